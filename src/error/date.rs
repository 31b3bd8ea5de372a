use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    AddDate { years: i32, months: i32, days: i32 },
    AddDay { days: i32 },
    InvalidClock,
    Normalize { year: i32, month: i32, day: i32 },
    OutOfRange,
    ToZoned,
}

impl Error {
    /// Whether this error reflects a value outside of what a date (or a
    /// clock time or time zone attached to one) can represent.
    pub(crate) fn is_range(&self) -> bool {
        matches!(
            *self,
            Error::InvalidClock | Error::OutOfRange | Error::ToZoned
        )
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Date(err).into()
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
            AddDate { years, months, days } => write!(
                f,
                "failed to add {years} years, {months} months \
                 and {days} days to date",
            ),
            AddDay { days } => write!(f, "failed to add {days} days to date"),
            InvalidClock => f.write_str(
                "invalid clock time (hours must be in 0..=23, minutes \
                 and seconds in 0..=59, nanoseconds in 0..=999999999)",
            ),
            Normalize { year, month, day } => write!(
                f,
                "failed to create date from year {year}, \
                 month {month} and day {day}",
            ),
            OutOfRange => f.write_str(
                "date is outside the supported range \
                 of -9999-01-03 to 9999-12-30",
            ),
            ToZoned => f.write_str("failed to attach time zone to date"),
        }
    }
}
