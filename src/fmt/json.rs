/*!
The structured interchange (JSON) adapter.

A date is encoded as a JSON string holding its canonical `YYYY-MM-DD` form.
Decoding requires a JSON string, whose contents are then run through the
shared two-stage parser described in the [module docs](crate::fmt). The JSON
literal `null` decodes to "no date".

This requires the `json` feature. JSON itself is handled by `serde_json`,
so string escapes are supported and surrounding whitespace is ignored.

# Example

```
use dateonly::{fmt::json, Date};

let date = Date::new(2020, 1, 1)?;
assert_eq!(json::encode(date), r#""2020-01-01""#);
assert_eq!(json::decode(r#""2020-01-01""#)?, Some(date));
assert_eq!(json::decode(r#""2020-01-01T01:01:01+07:00""#)?, Some(date));
assert_eq!(json::decode("null")?, None);
assert!(json::decode("2020-01-01").is_err());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    error::{fmt::Error as E, ErrorContext},
    fmt::parser,
    Date, Error,
};

/// Encodes a date as a JSON string.
///
/// Since the canonical form never contains characters that need escaping,
/// this is just the canonical form wrapped in double quotes.
#[inline]
pub fn encode(date: Date) -> String {
    format!("\"{date}\"")
}

/// Decodes a date from a JSON payload.
///
/// The JSON literal `null` returns `Ok(None)`.
///
/// # Errors
///
/// This returns an error when the payload is not a JSON string or `null`,
/// when the string is neither a canonical date nor an RFC 3339 timestamp, or
/// when it names a date outside of the supported range.
pub fn decode<I: AsRef<[u8]>>(input: I) -> Result<Option<Date>, Error> {
    let input = input.as_ref();
    let string: Option<String> =
        serde_json::from_slice(input).context(E::JsonPayload)?;
    match string {
        None => {
            trace!("JSON null decodes to no date");
            Ok(None)
        }
        Some(string) => parser::parse(string.as_bytes()).map(Some),
    }
}

/// Decodes a date from a JSON payload into `date`.
///
/// A JSON `null` leaves `date` unchanged. So does an error.
///
/// # Errors
///
/// This returns an error in the same circumstances as [`decode`].
///
/// # Example
///
/// ```
/// use dateonly::{fmt::json, Date};
///
/// let mut date = Date::new(2020, 1, 1)?;
/// json::decode_into(&mut date, "null")?;
/// assert_eq!(date, Date::new(2020, 1, 1)?);
///
/// assert!(json::decode_into(&mut date, r#""not-a-date""#).is_err());
/// assert_eq!(date, Date::new(2020, 1, 1)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_into<I: AsRef<[u8]>>(
    date: &mut Date,
    input: I,
) -> Result<(), Error> {
    if let Some(decoded) = decode(input)? {
        *date = decoded;
    }
    Ok(())
}
