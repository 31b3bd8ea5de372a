/*!
The binary transfer adapter.

A date is encoded as the instant at which it begins in UTC, in a compact,
fixed size, big-endian layout:

| Bytes    | Meaning                                                      |
|----------|--------------------------------------------------------------|
| `0`      | Version. `1`, or `2` when an offset seconds byte is present. |
| `1..9`   | `i64` seconds since `0001-01-01T00:00:00Z`.                  |
| `9..13`  | `i32` nanoseconds, in `0..=999_999_999`.                     |
| `13..15` | `i16` offset in minutes east of UTC, or `-1` for UTC itself. |
| `15`     | Version `2` only. Offset seconds, in `0..=59`.               |

The encoder always writes version `1` with zero nanoseconds and the `-1`
(UTC) offset, so an encoded date is always [`ENCODED_LEN`] bytes. The
decoder accepts both versions and any offset. When the payload carries an
offset other than UTC, the date is taken from the wall clock at that offset.
This matches [`Date::from_zoned`](crate::Date::from_zoned).

# Example

```
use dateonly::{fmt::binary, Date};

let date = Date::new(2020, 1, 1)?;
let bytes = binary::encode(date);
assert_eq!(bytes.len(), binary::ENCODED_LEN);
assert_eq!(binary::decode(&bytes)?, date);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use jiff::{tz::Offset, Timestamp};

use crate::{
    error::{binary::Error as E, date, Error, ErrorContext},
    Date,
};

/// The length, in bytes, of an encoded date.
pub const ENCODED_LEN: usize = 15;

const VERSION_MINUTES: u8 = 1;
const VERSION_SECONDS: u8 = 2;
const OFFSET_UTC: i16 = -1;
const SECONDS_FROM_0001_01_01_TO_1970_01_01: i64 = 62_135_596_800;

/// Encodes a date in the binary layout described in the
/// [module docs](self).
pub fn encode(date: Date) -> [u8; ENCODED_LEN] {
    let seconds =
        date.timestamp().as_second() + SECONDS_FROM_0001_01_01_TO_1970_01_01;
    let mut buf = [0; ENCODED_LEN];
    buf[0] = VERSION_MINUTES;
    buf[1..9].copy_from_slice(&seconds.to_be_bytes());
    buf[9..13].copy_from_slice(&0i32.to_be_bytes());
    buf[13..15].copy_from_slice(&OFFSET_UTC.to_be_bytes());
    buf
}

/// Decodes a date from the binary layout described in the
/// [module docs](self).
///
/// # Errors
///
/// This returns an error when the payload is empty, has an unknown version,
/// has the wrong length for its version, or carries invalid nanoseconds or an
/// invalid offset. It also returns an error when the encoded instant, or the
/// date at the encoded offset, is outside of the supported range.
///
/// # Example
///
/// ```
/// use dateonly::fmt::binary;
///
/// let err = binary::decode(&[1, 2, 3]).unwrap_err();
/// assert!(err.is_codec());
/// assert_eq!(
///     err.to_string(),
///     "failed to decode binary date: binary payload with version 1 \
///      must be 15 bytes long, but got 3 bytes",
/// );
/// ```
pub fn decode(bytes: &[u8]) -> Result<Date, Error> {
    decode_payload(bytes).context(E::Decode)
}

/// Decodes a date from the binary layout into `date`.
///
/// On error, `date` is left unchanged.
///
/// # Errors
///
/// This returns an error in the same circumstances as [`decode`].
pub fn decode_into(date: &mut Date, bytes: &[u8]) -> Result<(), Error> {
    *date = decode(bytes)?;
    Ok(())
}

fn decode_payload(bytes: &[u8]) -> Result<Date, Error> {
    let version = *bytes.first().ok_or(E::Empty)?;
    let expected = match version {
        VERSION_MINUTES => ENCODED_LEN,
        VERSION_SECONDS => ENCODED_LEN + 1,
        _ => return Err(E::UnsupportedVersion { version }.into()),
    };
    if bytes.len() != expected {
        return Err(E::InvalidLength {
            version,
            expected,
            got: bytes.len(),
        }
        .into());
    }

    let seconds = read_i64(&bytes[1..9]);
    let nanosecond = read_i32(&bytes[9..13]);
    let offset_minutes = read_i16(&bytes[13..15]);
    let offset_seconds =
        if version == VERSION_SECONDS { i32::from(bytes[15]) } else { 0 };
    if !(0..=999_999_999).contains(&nanosecond) {
        return Err(E::InvalidNanosecond { nanosecond }.into());
    }

    let unix_seconds = seconds
        .checked_sub(SECONDS_FROM_0001_01_01_TO_1970_01_01)
        .ok_or(date::Error::OutOfRange)?;
    let timestamp = Timestamp::new(unix_seconds, nanosecond)
        .context(E::InvalidTimestamp)?;
    let offset = if offset_minutes == OFFSET_UTC && offset_seconds == 0 {
        Offset::UTC
    } else {
        let seconds = i32::from(offset_minutes) * 60 + offset_seconds;
        debug!("decoding binary date with non-UTC offset of {seconds}s");
        Offset::from_seconds(seconds).context(E::InvalidOffset)?
    };
    Date::from_civil(offset.to_datetime(timestamp).date())
}

fn read_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0; 8];
    buf.copy_from_slice(bytes);
    i64::from_be_bytes(buf)
}

fn read_i32(bytes: &[u8]) -> i32 {
    let mut buf = [0; 4];
    buf.copy_from_slice(bytes);
    i32::from_be_bytes(buf)
}

fn read_i16(bytes: &[u8]) -> i16 {
    let mut buf = [0; 2];
    buf.copy_from_slice(bytes);
    i16::from_be_bytes(buf)
}
