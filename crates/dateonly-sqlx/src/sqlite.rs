use jiff::fmt::temporal::DateTimeParser;
use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    types::Type,
};
use sqlx_sqlite::{
    Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef,
};

use crate::{Date, ToSqlx};

static PARSER: DateTimeParser = DateTimeParser::new();

impl Type<Sqlite> for Date {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <str as Type<Sqlite>>::compatible(ty)
            || <f64 as Type<Sqlite>>::compatible(ty)
    }
}

impl Encode<'_, Sqlite> for Date {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'_>>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.to_dateonly().to_string(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Date {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        // A `&str` since a `REAL` column needs to be parsed as an `f64`,
        // and only one decode is possible per value.
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        decode_text(text).map(dateonly::Date::to_sqlx)
    }
}

fn decode_text(text: &str) -> Result<dateonly::Date, BoxDynError> {
    // Datetime text, like `2024-06-19 10:00:00` from `datetime()`, always
    // has a `:` in it. Such values are civil, so the date is taken as
    // written.
    if text.contains(':') {
        if let Ok(date) = dateonly::Date::parse(text) {
            return Ok(date);
        }
        let dt = PARSER.parse_datetime(text)?;
        return Ok(dateonly::Date::from_civil(dt.date())?);
    }
    if let Ok(julian_days) = text.parse::<f64>() {
        let timestamp = julian_days_to_timestamp(julian_days)?;
        return Ok(dateonly::Date::from_timestamp(timestamp)?);
    }
    Ok(dateonly::Date::parse(text)?)
}

fn julian_days_to_timestamp(
    days: f64,
) -> Result<jiff::Timestamp, BoxDynError> {
    // The Unix epoch in terms of SQLite julian days:
    //
    //     sqlite> select julianday('1970-01-01T00:00:00Z');
    //     julianday('1970-01-01T00:00:00Z')
    //     ---------------------------------
    //     2440587.5
    static UNIX_EPOCH_AS_JULIAN_DAYS: f64 = 2440587.5;
    // SQLite assumes 24 hours in every day.
    static SECONDS_PER_DAY: f64 = 86400.0;

    let timestamp = (days - UNIX_EPOCH_AS_JULIAN_DAYS) * SECONDS_PER_DAY;
    let sdur = jiff::SignedDuration::try_from_secs_f64(timestamp)?;
    Ok(jiff::Timestamp::from_duration(sdur)?)
}
