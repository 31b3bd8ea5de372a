use diesel::{
    deserialize::{self, FromSql},
    pg::{
        data_types::{PgDate, PgTimestamp},
        Pg, PgValue,
    },
    serialize::{self, Output, ToSql},
    sql_types,
};

use crate::{Date, ToDiesel};

/// The number of days from the Unix epoch to PostgreSQL's epoch of
/// `2000-01-01`.
///
/// The format of values on the wire is not a documented guarantee of
/// PostgreSQL.[1] The layouts used here follow `sqlx`'s own `chrono`
/// integration, and Diesel's.
///
/// [1]: https://www.postgresql.org/docs/current/protocol-overview.html#PROTOCOL-FORMAT-CODES
const POSTGRES_EPOCH_UNIX_DAY: i32 = 10_957;
const MICROS_PER_DAY: i64 = 86_400_000_000;

impl ToSql<sql_types::Date, Pg> for Date {
    fn to_sql<'b>(
        &'b self,
        out: &mut Output<'b, '_, Pg>,
    ) -> serialize::Result {
        // The encoding is the number of days since 2000-01-01.
        let days =
            self.to_dateonly().unix_epoch_day() - POSTGRES_EPOCH_UNIX_DAY;
        ToSql::<sql_types::Date, Pg>::to_sql(
            &PgDate(days),
            &mut out.reborrow(),
        )
    }
}

impl FromSql<sql_types::Date, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Date> {
        let PgDate(days) = FromSql::<sql_types::Date, Pg>::from_sql(bytes)?;
        from_postgres_days(days).map(dateonly::Date::to_diesel)
    }
}

impl FromSql<sql_types::Timestamp, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Date> {
        let PgTimestamp(micros) =
            FromSql::<sql_types::Timestamp, Pg>::from_sql(bytes)?;
        from_postgres_micros(micros).map(dateonly::Date::to_diesel)
    }
}

impl FromSql<sql_types::Timestamptz, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Date> {
        // Stored as UTC, so this is the UTC date of the instant.
        let PgTimestamp(micros) =
            FromSql::<sql_types::Timestamptz, Pg>::from_sql(bytes)?;
        from_postgres_micros(micros).map(dateonly::Date::to_diesel)
    }
}

fn from_postgres_days(days: i32) -> deserialize::Result<dateonly::Date> {
    // `infinity` and `-infinity` are `i32::MAX` and `i32::MIN`.
    let days = days
        .checked_add(POSTGRES_EPOCH_UNIX_DAY)
        .ok_or("PostgreSQL date is out of range")?;
    Ok(dateonly::Date::from_unix_epoch_day(days)?)
}

fn from_postgres_micros(micros: i64) -> deserialize::Result<dateonly::Date> {
    let days = i32::try_from(micros.div_euclid(MICROS_PER_DAY))?;
    from_postgres_days(days)
}
