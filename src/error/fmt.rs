use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Empty,
    ExpectedDigits { what: &'static str, count: usize },
    ExpectedSeparator { after: &'static str },
    Failed { input: Box<[u8]> },
    InvalidDate,
    InvalidDigit { what: &'static str, byte: u8 },
    InvalidTimestamp,
    #[cfg(feature = "json")]
    JsonPayload,
    MissingOffset,
    MissingTime,
    TrailingInput { unparsed: Box<[u8]> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Empty => f.write_str("an empty string is not a valid date"),
            ExpectedDigits { what, count } => {
                write!(f, "expected {count} digit {what}, but found end of input")
            }
            ExpectedSeparator { after } => {
                write!(f, "expected `-` separator after {after}")
            }
            Failed { ref input } => write!(
                f,
                "failed to parse {input:?} as a date",
                input = escape::Bytes(input),
            ),
            InvalidDate => f.write_str(
                "parsed year, month and day do not form a valid date",
            ),
            InvalidDigit { what, byte } => write!(
                f,
                "invalid digit {byte:?} in {what}",
                byte = escape::Byte(byte),
            ),
            InvalidTimestamp => {
                f.write_str("failed to parse input as an RFC 3339 timestamp")
            }
            #[cfg(feature = "json")]
            JsonPayload => f.write_str(
                "expected a JSON string or `null` as the date payload",
            ),
            MissingOffset => f.write_str(
                "RFC 3339 timestamp is missing a UTC offset \
                 (like `Z` or `+07:00`)",
            ),
            MissingTime => {
                f.write_str("RFC 3339 timestamp is missing a time of day")
            }
            TrailingInput { ref unparsed } => write!(
                f,
                "unparsed input {unparsed:?} remains after date",
                unparsed = escape::Bytes(unparsed),
            ),
        }
    }
}
