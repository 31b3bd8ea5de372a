/*!
The plain text adapter.

A date is encoded as its canonical `YYYY-MM-DD` form, without any quoting.
Decoding runs the shared two-stage parser described in the
[module docs](crate::fmt).

Empty input decodes to "no date" instead of an error. This makes the adapter
suitable for binding optional values from sources like HTTP query parameters
or form fields, where an absent value is routinely sent as an empty string.

# Example

```
use dateonly::{fmt::text, Date};

let date = Date::new(2020, 1, 1)?;
assert_eq!(text::encode(date), "2020-01-01");
assert_eq!(text::decode("2020-01-01")?, Some(date));
assert_eq!(text::decode("")?, None);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{fmt::parser, Date, Error};

/// Encodes a date as its canonical `YYYY-MM-DD` form.
///
/// This is the same as `date.to_string()`.
#[inline]
pub fn encode(date: Date) -> String {
    date.to_string()
}

/// Decodes a date from text.
///
/// Empty input returns `Ok(None)`.
///
/// # Errors
///
/// This returns an error when non-empty input is neither a canonical date
/// nor an RFC 3339 timestamp, or when it names a date outside of the
/// supported range.
pub fn decode<I: AsRef<[u8]>>(input: I) -> Result<Option<Date>, Error> {
    let input = input.as_ref();
    if input.is_empty() {
        trace!("empty text input decodes to no date");
        return Ok(None);
    }
    parser::parse(input).map(Some)
}

/// Decodes a date from text into `date`.
///
/// Empty input leaves `date` unchanged. So does an error.
///
/// # Errors
///
/// This returns an error in the same circumstances as [`decode`].
///
/// # Example
///
/// ```
/// use dateonly::{fmt::text, Date};
///
/// let mut date = Date::new(2020, 1, 1)?;
/// text::decode_into(&mut date, "")?;
/// assert_eq!(date, Date::new(2020, 1, 1)?);
///
/// assert!(text::decode_into(&mut date, "2020-02-30").is_err());
/// assert_eq!(date, Date::new(2020, 1, 1)?);
///
/// text::decode_into(&mut date, "2020-02-29")?;
/// assert_eq!(date, Date::new(2020, 2, 29)?);
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
