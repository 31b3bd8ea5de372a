use jiff::civil;
use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    types::Type,
};
use sqlx_postgres::{
    types::Oid, PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat,
    PgValueRef, Postgres,
};

use crate::{Date, ToSqlx};

/// The number of days from the Unix epoch to PostgreSQL's epoch of
/// `2000-01-01`.
///
/// The format of values on the wire is not a documented guarantee of
/// PostgreSQL.[1] The layouts used here follow `sqlx`'s own `chrono`
/// integration.
///
/// [1]: https://www.postgresql.org/docs/current/protocol-overview.html#PROTOCOL-FORMAT-CODES
const POSTGRES_EPOCH_UNIX_DAY: i32 = 10_957;
const MICROS_PER_DAY: i64 = 86_400_000_000;

// https://github.com/launchbadge/sqlx/blob/65229f7ff91ecd38be7c10fb61ff3e05bedabe87/sqlx-postgres/src/type_info.rs#L519
const DATE: Oid = Oid(1082);
// https://github.com/launchbadge/sqlx/blob/65229f7ff91ecd38be7c10fb61ff3e05bedabe87/sqlx-postgres/src/type_info.rs#L523
const DATE_ARRAY: Oid = Oid(1182);
// https://github.com/launchbadge/sqlx/blob/65229f7ff91ecd38be7c10fb61ff3e05bedabe87/sqlx-postgres/src/type_info.rs#L521
const TIMESTAMP: Oid = Oid(1114);
// https://github.com/launchbadge/sqlx/blob/65229f7ff91ecd38be7c10fb61ff3e05bedabe87/sqlx-postgres/src/type_info.rs#L526
const TIMESTAMPTZ: Oid = Oid(1184);

impl Type<Postgres> for Date {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(DATE)
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        [DATE, TIMESTAMP, TIMESTAMPTZ]
            .into_iter()
            .any(|oid| *ty == PgTypeInfo::with_oid(oid))
    }
}

impl PgHasArrayType for Date {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(DATE_ARRAY)
    }
}

impl Encode<'_, Postgres> for Date {
    fn encode_by_ref(
        &self,
        buf: &mut PgArgumentBuffer,
    ) -> Result<IsNull, BoxDynError> {
        // The encoding is the number of days since 2000-01-01. This can't
        // overflow since a date's Unix day is within a few million of zero.
        let days =
            self.to_dateonly().unix_epoch_day() - POSTGRES_EPOCH_UNIX_DAY;
        Encode::<Postgres>::encode(days, buf)
    }
}

impl<'r> Decode<'r, Postgres> for Date {
    fn decode(value: PgValueRef<'r>) -> Result<Date, BoxDynError> {
        match value.format() {
            PgValueFormat::Binary => {
                let bytes = value.as_bytes()?;
                decode_binary(bytes).map(dateonly::Date::to_sqlx)
            }
            PgValueFormat::Text => {
                decode_text(value.as_str()?).map(dateonly::Date::to_sqlx)
            }
        }
    }
}

/// Decodes a binary `DATE`, `TIMESTAMP` or `TIMESTAMPTZ` value.
///
/// A `DATE` is an `i32` number of days since 2000-01-01. Both timestamp
/// types are an `i64` number of microseconds since 2000-01-01T00:00:00, in
/// UTC for `TIMESTAMPTZ`. The two are told apart by their size.
fn decode_binary(bytes: &[u8]) -> Result<dateonly::Date, BoxDynError> {
    if let Ok(days) = <[u8; 4]>::try_from(bytes) {
        return from_postgres_days(i32::from_be_bytes(days));
    }
    if let Ok(micros) = <[u8; 8]>::try_from(bytes) {
        let days = i64::from_be_bytes(micros).div_euclid(MICROS_PER_DAY);
        let days = i32::try_from(days)?;
        return from_postgres_days(days);
    }
    Err(format!(
        "expected 4 or 8 bytes for a PostgreSQL date, but got {} bytes",
        bytes.len(),
    )
    .into())
}

/// Decodes a textual `DATE`, `TIMESTAMP` or `TIMESTAMPTZ` value.
///
/// A `TIMESTAMPTZ` is rendered in the session's time zone with an offset,
/// so it is converted to UTC first. This agrees with the binary format. A
/// `TIMESTAMP` has no offset and its date is taken as written.
fn decode_text(text: &str) -> Result<dateonly::Date, BoxDynError> {
    if !text.contains(':') {
        return Ok(dateonly::Date::parse(text)?);
    }
    if let Ok(timestamp) = text.parse::<jiff::Timestamp>() {
        return Ok(dateonly::Date::from_timestamp(timestamp)?);
    }
    let dt = text.parse::<civil::DateTime>()?;
    Ok(dateonly::Date::from_civil(dt.date())?)
}

fn from_postgres_days(days: i32) -> Result<dateonly::Date, BoxDynError> {
    // `infinity` and `-infinity` are `i32::MAX` and `i32::MIN`.
    let days = days
        .checked_add(POSTGRES_EPOCH_UNIX_DAY)
        .ok_or("PostgreSQL date is out of range")?;
    Ok(dateonly::Date::from_unix_epoch_day(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: i32, day: i32) -> dateonly::Date {
        dateonly::Date::new(year, month, day).unwrap()
    }

    #[test]
    fn epoch() {
        assert_eq!(
            dateonly::Date::new(2000, 1, 1).unwrap().unix_epoch_day(),
            POSTGRES_EPOCH_UNIX_DAY,
        );
    }

    #[test]
    fn decode_binary_date() {
        let got = decode_binary(&0i32.to_be_bytes()).unwrap();
        assert_eq!(got, date(2000, 1, 1));
        let got = decode_binary(&(-1i32).to_be_bytes()).unwrap();
        assert_eq!(got, date(1999, 12, 31));
        assert!(decode_binary(&i32::MAX.to_be_bytes()).is_err());
        assert!(decode_binary(&i32::MIN.to_be_bytes()).is_err());
    }

    #[test]
    fn decode_binary_timestamp() {
        // 1999-12-31T23:59:59.999999 is still 1999-12-31.
        let got = decode_binary(&(-1i64).to_be_bytes()).unwrap();
        assert_eq!(got, date(1999, 12, 31));
        let got = decode_binary(&MICROS_PER_DAY.to_be_bytes()).unwrap();
        assert_eq!(got, date(2000, 1, 2));
        assert!(decode_binary(&i64::MAX.to_be_bytes()).is_err());
        assert!(decode_binary(&[0; 3]).is_err());
    }

    #[test]
    fn decode_text_values() {
        assert_eq!(decode_text("2024-06-19").unwrap(), date(2024, 6, 19));
        assert_eq!(
            decode_text("2024-06-19 23:30:00").unwrap(),
            date(2024, 6, 19),
        );
        assert!(decode_text("infinity").is_err());
    }

    #[test]
    fn decode_text_timestamptz_uses_utc() {
        assert_eq!(
            decode_text("2024-06-19 23:30:00+07").unwrap(),
            date(2024, 6, 19),
        );
        // 2024-06-19T18:00:00Z, same as the binary format would give.
        assert_eq!(
            decode_text("2024-06-20 01:00:00+07").unwrap(),
            date(2024, 6, 19),
        );
        assert_eq!(
            decode_text("2024-06-19 20:00:00-05").unwrap(),
            date(2024, 6, 20),
        );
    }
}
