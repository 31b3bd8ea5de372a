use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Decode,
    Empty,
    InvalidLength { version: u8, expected: usize, got: usize },
    InvalidNanosecond { nanosecond: i32 },
    InvalidOffset,
    InvalidTimestamp,
    UnsupportedVersion { version: u8 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Binary(err).into()
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
            Decode => f.write_str("failed to decode binary date"),
            Empty => f.write_str("binary payload is empty"),
            InvalidLength { version, expected, got } => write!(
                f,
                "binary payload with version {version} must be \
                 {expected} bytes long, but got {got} bytes",
            ),
            InvalidNanosecond { nanosecond } => write!(
                f,
                "nanosecond {nanosecond} is not in the range 0..=999999999",
            ),
            InvalidOffset => f.write_str("binary payload has invalid offset"),
            InvalidTimestamp => {
                f.write_str("binary payload has invalid timestamp")
            }
            UnsupportedVersion { version } => {
                write!(f, "unsupported binary payload version {version}")
            }
        }
    }
}
