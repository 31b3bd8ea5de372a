use diesel::{
    deserialize::{self, FromSql},
    serialize::{self, IsNull, Output, ToSql},
    sql_types,
    sqlite::{Sqlite, SqliteValue},
};
use jiff::fmt::temporal::DateTimeParser;

use crate::{Date, ToDiesel};

static PARSER: DateTimeParser = DateTimeParser::new();

impl ToSql<sql_types::Date, Sqlite> for Date {
    fn to_sql<'b>(
        &'b self,
        out: &mut Output<'b, '_, Sqlite>,
    ) -> serialize::Result {
        out.set_value(self.to_dateonly().to_string());
        Ok(IsNull::No)
    }
}

impl FromSql<sql_types::Date, Sqlite> for Date {
    fn from_sql(value: SqliteValue<'_, '_, '_>) -> deserialize::Result<Date> {
        let text: String =
            FromSql::<sql_types::Date, Sqlite>::from_sql(value)?;
        decode_text(&text).map(dateonly::Date::to_diesel)
    }
}

impl FromSql<sql_types::Timestamp, Sqlite> for Date {
    fn from_sql(value: SqliteValue<'_, '_, '_>) -> deserialize::Result<Date> {
        let text: String =
            FromSql::<sql_types::Timestamp, Sqlite>::from_sql(value)?;
        decode_text(&text).map(dateonly::Date::to_diesel)
    }
}

/// Decodes a canonical date, or the date of civil datetime text like
/// `2024-06-19 10:00:00`.
fn decode_text(text: &str) -> deserialize::Result<dateonly::Date> {
    match dateonly::Date::parse(text) {
        Ok(date) => Ok(date),
        Err(_) if text.contains(':') => {
            let dt = PARSER.parse_datetime(text)?;
            Ok(dateonly::Date::from_civil(dt.date())?)
        }
        Err(err) => Err(err.into()),
    }
}
