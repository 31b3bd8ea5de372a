use std::sync::Arc;

pub(crate) mod binary;
pub(crate) mod date;
pub(crate) mod fmt;

/// An error that can occur in this crate.
///
/// Errors fall into a few broad categories, each with a predicate:
///
/// * [`Error::is_parse`] for textual input (including JSON payloads) that
/// is neither a `YYYY-MM-DD` date nor an RFC 3339 timestamp.
/// * [`Error::is_range`] for values that fall outside of the supported range
/// of dates (`-9999-01-03` to `9999-12-30`) after normalization, for an
/// invalid clock time, or for a date and clock time that can't be placed in
/// the requested time zone without leaving the range of a `jiff::Zoned`.
/// * [`Error::is_codec`] for malformed binary payloads.
///
/// These categories are not mutually exclusive. For example, a binary
/// payload that is well formed but encodes a timestamp outside the supported
/// range is both a codec error and a range error.
///
/// # Design
///
/// Like Jiff, this crate uses a single error type for all operations. An
/// error is a chain of causes, from the highest level context down to the
/// root cause. Its `Display` implementation renders the whole chain
/// separated by `: `. Errors originating from Jiff (or `serde_json`) are
/// embedded in this chain as-is.
///
/// An `Error` is one word in size and cheap to clone.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable even when it embeds
    /// an error that isn't (like `serde_json::Error`).
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value of
    /// this crate specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from textual input that
    /// could not be parsed as a date.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert!("not-a-date".parse::<Date>().unwrap_err().is_parse());
    /// assert!("2020-13-01".parse::<Date>().unwrap_err().is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Fmt(_) => true,
            #[cfg(feature = "json")]
            ErrorKind::Json(_) => true,
            _ => false,
        })
    }

    /// Returns true when this error originated as a result of a value being
    /// out of this crate's supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert!(Date::new(10_000, 1, 1).unwrap_err().is_range());
    /// assert!(Date::MAX.add_day(1).unwrap_err().is_range());
    /// assert!(Date::MIN.to_time(24, 0, 0, 0, jiff::tz::TimeZone::UTC)
    ///     .unwrap_err()
    ///     .is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Date(ref err) => err.is_range(),
            _ => false,
        })
    }

    /// Returns true when this error originated from a malformed binary
    /// payload.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::fmt::binary;
    ///
    /// assert!(binary::decode(&[]).unwrap_err().is_codec());
    /// assert!(binary::decode(&[9, 0, 0]).unwrap_err().is_codec());
    /// ```
    pub fn is_codec(&self) -> bool {
        self.chain().any(|err| matches!(*err.kind(), ErrorKind::Binary(_)))
    }
}

impl Error {
    /// Wraps an error from Jiff.
    #[inline(never)]
    #[cold]
    pub(crate) fn jiff(err: jiff::Error) -> Error {
        Error::from(ErrorKind::Jiff(err))
    }

    /// Wraps an error from `serde_json`.
    #[cfg(feature = "json")]
    #[inline(never)]
    #[cold]
    pub(crate) fn json(err: serde_json::Error) -> Error {
        Error::from(ErrorKind::Json(err))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because every consequent is created just before being passed
        // here, so the `Arc` has exactly one reference.
        let inner = Arc::get_mut(&mut err.inner).unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Binary(self::binary::Error),
    Date(self::date::Error),
    Fmt(self::fmt::Error),
    Jiff(jiff::Error),
    #[cfg(feature = "json")]
    Json(serde_json::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Binary(ref err) => err.fmt(f),
            Date(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Jiff(ref err) => err.fmt(f),
            #[cfg(feature = "json")]
            Json(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
///
/// This exists to support the `Error::from_args` public API, which permits
/// users to manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for jiff::Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        Error::jiff(self)
    }
}

#[cfg(feature = "json")]
impl IntoError for serde_json::Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        Error::json(self)
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful when the consequent error allocates, since the closure
    /// avoids paying that cost in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
