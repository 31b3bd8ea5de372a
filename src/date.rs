use jiff::{
    civil::{self, Weekday},
    tz::{Offset, TimeZone},
    SignedDuration, Timestamp, Zoned,
};

use crate::{
    error::{date::Error as E, Error, ErrorContext},
    fmt,
    util::epoch::{self, SECONDS_PER_DAY},
};

/// The first day in the supported range, `-9999-01-03`, as days since the
/// Unix epoch.
const MIN_UNIX_DAY: i64 = -4_371_585;
/// The last day in the supported range, `9999-12-30`, as days since the Unix
/// epoch.
const MAX_UNIX_DAY: i64 = 2_932_895;
/// `0001-01-01` as days since the Unix epoch.
const ZERO_UNIX_DAY: i64 = -719_162;

/// A calendar date anchored at midnight UTC.
///
/// A `Date` is a year, month and day. It is represented by the instant at
/// which that day begins in UTC, and every value upholds that invariant: the
/// underlying [`Timestamp`] is always a whole multiple of 24 hours away from
/// the Unix epoch. This means that two dates are equal exactly when their
/// year, month and day are equal, regardless of how each was created.
///
/// A `Date` never changes its calendar day when viewed from another time
/// zone. Conversions that need a time zone, like [`Date::to_location_time`],
/// build a *new* instant from the year, month and day instead of re-zoning
/// the stored one.
///
/// # Range
///
/// The supported range is [`Date::MIN`] (`-9999-01-03`) to [`Date::MAX`]
/// (`9999-12-30`). These are the first and last midnights in UTC that a
/// [`Timestamp`] can represent. Any operation whose result falls outside
/// this range returns an error.
///
/// # Default value
///
/// The default value is [`Date::ZERO`], `0001-01-01`. It can be tested for
/// with [`Date::is_zero`].
///
/// # Parsing and printing
///
/// The canonical form of a date is `YYYY-MM-DD`. That is what `Display`
/// prints and what every adapter in [`crate::fmt`] emits. Parsing accepts the
/// canonical form and, as a fallback, a full RFC 3339 timestamp. In the
/// latter case, the date is taken as written and the time and offset are
/// discarded:
///
/// ```
/// use dateonly::Date;
///
/// let date: Date = "2024-06-19".parse()?;
/// assert_eq!(date.to_string(), "2024-06-19");
///
/// let date: Date = "2024-06-19T23:30:00-05:00".parse()?;
/// assert_eq!(date.to_string(), "2024-06-19");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons
///
/// `Date` implements `Eq`, `Ord` and `Hash`. [`Date::before`] and
/// [`Date::after`] are provided as conveniences.
///
/// # Arithmetic
///
/// [`Date::add_date`] and [`Date::add_day`] add calendar units. Unlike
/// Jiff's span arithmetic, the result is *not* clamped to the end of a
/// month. Instead, days past the end of a month roll over into the next one:
///
/// ```
/// use dateonly::Date;
///
/// let date = Date::new(2021, 1, 31)?.add_date(0, 1, 0)?;
/// assert_eq!(date.to_string(), "2021-03-03");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Subtracting one date from another returns a [`SignedDuration`], which is
/// always a whole number of 24 hour days.
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date {
    timestamp: Timestamp,
}

impl Date {
    /// The minimum representable date, `-9999-01-03`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::MIN.to_string(), "-9999-01-03");
    /// assert!(Date::MIN.add_day(-1).is_err());
    /// ```
    pub const MIN: Date = Date::constant(MIN_UNIX_DAY);

    /// The maximum representable date, `9999-12-30`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::MAX.to_string(), "9999-12-30");
    /// assert!(Date::MAX.add_day(1).is_err());
    /// ```
    pub const MAX: Date = Date::constant(MAX_UNIX_DAY);

    /// The zero date, `0001-01-01`.
    ///
    /// This is also the `Default` value of a `Date`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::ZERO.to_string(), "0001-01-01");
    /// assert_eq!(Date::default(), Date::ZERO);
    /// ```
    pub const ZERO: Date = Date::constant(ZERO_UNIX_DAY);

    /// The Unix epoch, `1970-01-01`.
    pub const UNIX_EPOCH: Date = Date::constant(0);

    /// Creates a new date from a year, month and day.
    ///
    /// Months and days outside of their usual ranges roll over into
    /// adjacent months and years. For example, month `13` is January of the
    /// following year, day `0` is the last day of the previous month and
    /// `2021-02-29` is `2021-03-01`. Months are 1-based, so January is `1`.
    ///
    /// # Errors
    ///
    /// This returns an error when the normalized date falls outside of the
    /// range [`Date::MIN`] to [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::new(2024, 2, 29)?.to_string(), "2024-02-29");
    /// assert_eq!(Date::new(2021, 2, 29)?.to_string(), "2021-03-01");
    /// assert_eq!(Date::new(2020, 13, 1)?.to_string(), "2021-01-01");
    /// assert_eq!(Date::new(2020, 3, 0)?.to_string(), "2020-02-29");
    ///
    /// assert!(Date::new(10_000, 1, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Date, Error> {
        let days = epoch::days_from_civil(
            i64::from(year),
            i64::from(month),
            i64::from(day),
        );
        Date::from_unix_day(days)
            .with_context(|| E::Normalize { year, month, day })
    }

    /// Returns the calendar day of the given zoned datetime *as seen in its
    /// own time zone*.
    ///
    /// This is worth being careful about. The date returned is the one on
    /// the wall clock of `zdt`, not the date in UTC. So
    /// `2020-01-01T01:00:00+07:00` becomes `2020-01-01` even though the same
    /// instant is `2019-12-31` in UTC. If you want the UTC date, convert the
    /// zoned datetime to UTC first (or use [`Date::from_timestamp`]).
    ///
    /// # Errors
    ///
    /// This returns an error when the calendar day falls outside of the
    /// range [`Date::MIN`] to [`Date::MAX`]. This can only happen within a
    /// day of the limits of what a `Zoned` can represent.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::{civil, tz::{self, TimeZone}};
    ///
    /// let zdt = civil::date(2020, 1, 1)
    ///     .at(1, 0, 0, 0)
    ///     .to_zoned(TimeZone::fixed(tz::offset(7)))?;
    /// assert_eq!(Date::from_zoned(&zdt)?.to_string(), "2020-01-01");
    ///
    /// // Converting to UTC first gives the UTC day.
    /// let utc = zdt.with_time_zone(TimeZone::UTC);
    /// assert_eq!(Date::from_zoned(&utc)?.to_string(), "2019-12-31");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_zoned(zdt: &Zoned) -> Result<Date, Error> {
        Date::from_civil(zdt.date())
    }

    /// Returns the calendar day, in UTC, of the given timestamp.
    ///
    /// # Errors
    ///
    /// This returns an error when the timestamp falls on a UTC day that is
    /// outside of the range [`Date::MIN`] to [`Date::MAX`]. That is, on the
    /// first partial day (`-9999-01-02`) that a `Timestamp` supports. The
    /// last instant a `Timestamp` supports, `9999-12-30T22:00:00.999999999Z`,
    /// falls on [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::Timestamp;
    ///
    /// let ts: Timestamp = "2020-01-01T01:00:00+07:00".parse()?;
    /// assert_eq!(Date::from_timestamp(ts)?.to_string(), "2019-12-31");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_timestamp(timestamp: Timestamp) -> Result<Date, Error> {
        Date::from_unix_day(timestamp.as_second().div_euclid(SECONDS_PER_DAY))
    }

    /// Converts a Jiff civil date to a `Date`.
    ///
    /// # Errors
    ///
    /// A `civil::Date` supports a slightly wider range than a `Date`. This
    /// returns an error for `-9999-01-01`, `-9999-01-02` and `9999-12-31`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::civil;
    ///
    /// let date = Date::from_civil(civil::date(2024, 2, 29))?;
    /// assert_eq!(date.ymd(), (2024, 2, 29));
    /// assert!(Date::from_civil(civil::Date::MAX).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_civil(date: civil::Date) -> Result<Date, Error> {
        let days = epoch::days_from_civil(
            i64::from(date.year()),
            i64::from(date.month()),
            i64::from(date.day()),
        );
        Date::from_unix_day(days)
    }

    /// Creates a date from a number of days since `1970-01-01`.
    ///
    /// # Errors
    ///
    /// This returns an error when the resulting date falls outside of the
    /// range [`Date::MIN`] to [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::from_unix_epoch_day(0)?, Date::UNIX_EPOCH);
    /// assert_eq!(Date::from_unix_epoch_day(-1)?.to_string(), "1969-12-31");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_unix_epoch_day(days: i32) -> Result<Date, Error> {
        Date::from_unix_day(i64::from(days))
    }

    /// Returns today's date in the system time zone.
    ///
    /// This is [`Date::from_zoned`] applied to [`Zoned::now`].
    ///
    /// # Panics
    ///
    /// This panics if the system clock is set to a time on a day outside of
    /// the range [`Date::MIN`] to [`Date::MAX`]. Jiff's `Zoned::now` panics
    /// in similar circumstances.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert!(Date::now() > Date::new(2020, 1, 1)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn now() -> Date {
        Date::from_zoned(&Zoned::now())
            .expect("system clock reports a date within the supported range")
    }

    /// Parses a date from its canonical `YYYY-MM-DD` form or, failing that,
    /// from an RFC 3339 timestamp.
    ///
    /// This is the same routine used by `FromStr` and by every decoder in
    /// [`crate::fmt`]. See the [`fmt`](crate::fmt) module docs for the
    /// details of both stages.
    ///
    /// # Errors
    ///
    /// This returns an error when the input matches neither format, or
    /// when it names a date outside of the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::parse("2020-01-01")?, Date::new(2020, 1, 1)?);
    /// assert_eq!(Date::parse(b"2020-01-01T23:00:00Z")?, Date::new(2020, 1, 1)?);
    /// assert!(Date::parse("01/01/2020").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Date, Error> {
        fmt::parser::parse(input.as_ref())
    }

    /// Returns true if this date is strictly before `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let d1 = Date::new(2020, 1, 1)?;
    /// let d2 = Date::new(2020, 1, 2)?;
    /// assert!(d1.before(d2));
    /// assert!(!d2.before(d1));
    /// assert!(!d1.before(d1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn before(self, other: Date) -> bool {
        self < other
    }

    /// Returns true if this date is strictly after `other`.
    #[inline]
    pub fn after(self, other: Date) -> bool {
        self > other
    }

    /// Adds the given number of years, months and days to this date.
    ///
    /// The components are added to the year, month and day of this date
    /// and the result is normalized in the same way as [`Date::new`]. In
    /// particular, there is no clamping to the end of a month: one month
    /// after `2021-01-31` is `2021-03-03` (since "February 31st" is three
    /// days past the end of February). Negative values subtract.
    ///
    /// # Errors
    ///
    /// This returns an error when the result falls outside of the range
    /// [`Date::MIN`] to [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let date = Date::new(2020, 2, 29)?;
    /// assert_eq!(date.add_date(1, 0, 0)?.to_string(), "2021-03-01");
    /// assert_eq!(date.add_date(0, -2, 0)?.to_string(), "2019-12-29");
    /// assert_eq!(date.add_date(0, 0, 1)?.to_string(), "2020-03-01");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add_date(
        self,
        years: i32,
        months: i32,
        days: i32,
    ) -> Result<Date, Error> {
        let (year, month, day) = self.ymd();
        let unix_day = epoch::days_from_civil(
            i64::from(year) + i64::from(years),
            i64::from(month) + i64::from(months),
            i64::from(day) + i64::from(days),
        );
        Date::from_unix_day(unix_day)
            .with_context(|| E::AddDate { years, months, days })
    }

    /// Adds the given number of days to this date.
    ///
    /// This is a shorthand for `date.add_date(0, 0, days)`. Negative values
    /// subtract.
    ///
    /// # Errors
    ///
    /// This returns an error when the result falls outside of the range
    /// [`Date::MIN`] to [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let date = Date::new(2020, 1, 1)?.add_day(-1)?;
    /// assert_eq!(date.ymd(), (2019, 12, 31));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add_day(self, days: i32) -> Result<Date, Error> {
        Date::from_unix_day(self.unix_day() + i64::from(days))
            .with_context(|| E::AddDay { days })
    }

    /// Returns the elapsed time from `other` to this date.
    ///
    /// The duration is always a whole number of 24 hour days. It is negative
    /// when `other` comes after this date. This is also what `self - other`
    /// returns.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::SignedDuration;
    ///
    /// let d1 = Date::new(2020, 3, 1)?;
    /// let d2 = Date::new(2020, 2, 1)?;
    /// assert_eq!(d1.duration_since(d2), SignedDuration::from_hours(29 * 24));
    /// assert_eq!(d2 - d1, SignedDuration::from_hours(-29 * 24));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn duration_since(self, other: Date) -> SignedDuration {
        SignedDuration::from_secs(
            self.timestamp.as_second() - other.timestamp.as_second(),
        )
    }

    /// Returns the number of days from `other` to this date.
    ///
    /// This is negative when `other` comes after this date.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let d1 = Date::new(2021, 1, 1)?;
    /// let d2 = Date::new(2020, 1, 1)?;
    /// assert_eq!(d1.days_since(d2), 366);
    /// assert_eq!(d2.days_since(d1), -366);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn days_since(self, other: Date) -> i32 {
        self.unix_epoch_day() - other.unix_epoch_day()
    }

    /// Returns the year of this date.
    ///
    /// The year is in the range `-9999..=9999`.
    #[inline]
    pub fn year(self) -> i16 {
        self.to_civil().year()
    }

    /// Returns the month of this date, in the range `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.to_civil().month()
    }

    /// Returns the day of the month, in the range `1..=31`.
    #[inline]
    pub fn day(self) -> i8 {
        self.to_civil().day()
    }

    /// Returns the year, month and day of this date.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let (year, month, day) = Date::new(2020, 14, 1)?.ymd();
    /// assert_eq!((year, month, day), (2021, 2, 1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn ymd(self) -> (i16, i8, i8) {
        let date = self.to_civil();
        (date.year(), date.month(), date.day())
    }

    /// Returns the day of the week of this date.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::civil::Weekday;
    ///
    /// assert_eq!(Date::new(2020, 1, 1)?.weekday(), Weekday::Wednesday);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn weekday(self) -> Weekday {
        self.to_civil().weekday()
    }

    /// Returns the ISO 8601 week-numbering year and week number of this
    /// date.
    ///
    /// Weeks start on Monday and week `1` is the week containing the year's
    /// first Thursday. So the first few days of January may belong to the
    /// last week (`52` or `53`) of the previous ISO year, and the last few
    /// days of December may belong to week `1` of the next one.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::new(2021, 1, 3)?.iso_week(), (2020, 53));
    /// assert_eq!(Date::new(2019, 12, 30)?.iso_week(), (2020, 1));
    /// assert_eq!(Date::new(2024, 6, 19)?.iso_week(), (2024, 25));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn iso_week(self) -> (i16, i8) {
        let week_date = self.to_civil().iso_week_date();
        (week_date.year(), week_date.week())
    }

    /// Returns the 1-based ordinal day of the year.
    ///
    /// This is in the range `1..=365`, or `1..=366` in leap years.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert_eq!(Date::new(2020, 1, 1)?.day_of_year(), 1);
    /// assert_eq!(Date::new(2020, 12, 31)?.day_of_year(), 366);
    /// assert_eq!(Date::new(2021, 12, 31)?.day_of_year(), 365);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn day_of_year(self) -> i16 {
        self.to_civil().day_of_year()
    }

    /// Returns true only when this is [`Date::ZERO`] (`0001-01-01`).
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// assert!(Date::default().is_zero());
    /// assert!(!Date::UNIX_EPOCH.is_zero());
    /// ```
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Date::ZERO
    }

    /// Returns the number of days since `1970-01-01`.
    ///
    /// This is negative for dates before the Unix epoch.
    #[inline]
    pub fn unix_epoch_day(self) -> i32 {
        // OK because the supported range is about 7.3 million days.
        self.unix_day() as i32
    }

    /// Returns the instant at which this date begins in UTC.
    #[inline]
    pub fn timestamp(self) -> Timestamp {
        self.timestamp
    }

    /// Returns midnight of this date in UTC.
    ///
    /// This is the stored instant, unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let zdt = Date::new(2020, 1, 1)?.to_utc_time();
    /// assert_eq!(zdt.to_string(), "2020-01-01T00:00:00+00:00[UTC]");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_utc_time(self) -> Zoned {
        self.timestamp.to_zoned(TimeZone::UTC)
    }

    /// Returns midnight of this date in the system time zone.
    ///
    /// See [`Date::to_location_time`] for details.
    ///
    /// # Errors
    ///
    /// See [`Date::to_location_time`].
    pub fn to_local_time(self) -> Result<Zoned, Error> {
        self.to_location_time(TimeZone::system())
    }

    /// Returns midnight of this date in the given time zone.
    ///
    /// This is a fresh construction from the year, month and day of this
    /// date. It is not a re-zoning of the stored UTC instant. So the date on
    /// the wall clock of the result is always this date.
    ///
    /// When midnight does not exist in the time zone (for example, because
    /// it falls in a gap created by a daylight saving time transition), the
    /// "compatible" strategy is used, which picks the wall clock time just
    /// after the gap.
    ///
    /// # Errors
    ///
    /// This returns an error if the result is outside the range supported
    /// by a `Zoned`. This can only happen within a day of [`Date::MIN`] or
    /// [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::{civil, tz::{self, TimeZone}};
    ///
    /// let date = Date::new(2020, 1, 1)?;
    /// let zdt = date.to_location_time(TimeZone::fixed(tz::offset(-5)))?;
    /// assert_eq!(zdt.date(), civil::date(2020, 1, 1));
    /// assert_eq!(zdt.time(), civil::Time::midnight());
    /// // Not the same instant as the stored one!
    /// assert_ne!(zdt.timestamp(), date.timestamp());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_location_time(self, tz: TimeZone) -> Result<Zoned, Error> {
        self.to_civil().to_zoned(tz).context(E::ToZoned)
    }

    /// Returns this date at the given clock time in the system time zone.
    ///
    /// See [`Date::to_time`] for details.
    ///
    /// # Errors
    ///
    /// See [`Date::to_time`].
    pub fn to_local_time_at_clock(
        self,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Result<Zoned, Error> {
        self.to_time(hour, minute, second, 0, TimeZone::system())
    }

    /// Returns this date at the given clock time in the given time zone.
    ///
    /// Like [`Date::to_location_time`], this is a fresh construction from
    /// the year, month and day of this date. Ambiguous or nonexistent
    /// clock times are resolved with the "compatible" strategy.
    ///
    /// # Errors
    ///
    /// Clock values are validated, not rolled over. This returns an error
    /// when `hour` is not in `0..=23`, `minute` or `second` are not in
    /// `0..=59` or `nanosecond` is not in `0..=999_999_999`. This also
    /// returns an error if the result is outside the range supported by a
    /// `Zoned`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    /// use jiff::{civil, tz::{self, TimeZone}};
    ///
    /// let tz = TimeZone::fixed(tz::offset(7));
    /// let zdt = Date::new(2020, 1, 1)?.to_time(17, 30, 0, 0, tz.clone())?;
    /// assert_eq!(zdt.datetime(), civil::date(2020, 1, 1).at(17, 30, 0, 0));
    ///
    /// assert!(Date::new(2020, 1, 1)?.to_time(24, 0, 0, 0, tz).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_time(
        self,
        hour: i8,
        minute: i8,
        second: i8,
        nanosecond: i32,
        tz: TimeZone,
    ) -> Result<Zoned, Error> {
        let time = civil::Time::new(hour, minute, second, nanosecond)
            .context(E::InvalidClock)?;
        self.to_civil().to_datetime(time).to_zoned(tz).context(E::ToZoned)
    }

    /// Returns the logical database column type of a `Date`.
    ///
    /// This is always [`crate::COLUMN_TYPE`], `"date"`.
    #[inline]
    pub fn data_type() -> &'static str {
        crate::COLUMN_TYPE
    }

    /// Encodes this date in its canonical text form.
    ///
    /// This is the same as `date.to_string()`. See [`crate::fmt::text`].
    pub fn marshal_text(self) -> String {
        fmt::text::encode(self)
    }

    /// Decodes text into this date.
    ///
    /// Empty input leaves this date unchanged. On error, this date is also
    /// left unchanged. See [`crate::fmt::text`].
    ///
    /// # Errors
    ///
    /// This returns an error when non-empty input is neither a canonical
    /// date nor an RFC 3339 timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let mut date = Date::new(2020, 1, 1)?;
    /// date.unmarshal_text("")?;
    /// assert_eq!(date.to_string(), "2020-01-01");
    /// date.unmarshal_text("2021-06-01")?;
    /// assert_eq!(date.to_string(), "2021-06-01");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn unmarshal_text<I: AsRef<[u8]>>(
        &mut self,
        input: I,
    ) -> Result<(), Error> {
        fmt::text::decode_into(self, input)
    }

    /// Encodes this date as a JSON string, like `"2020-01-01"`.
    ///
    /// See [`crate::fmt::json`].
    #[cfg(feature = "json")]
    pub fn marshal_json(self) -> String {
        fmt::json::encode(self)
    }

    /// Decodes a JSON payload into this date.
    ///
    /// A JSON `null` leaves this date unchanged. On error, this date is also
    /// left unchanged. See [`crate::fmt::json`].
    ///
    /// # Errors
    ///
    /// This returns an error when the payload isn't a JSON string or `null`,
    /// or when the string isn't a canonical date or RFC 3339 timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let mut date = Date::new(2020, 1, 1)?;
    /// date.unmarshal_json("null")?;
    /// assert_eq!(date.to_string(), "2020-01-01");
    /// date.unmarshal_json(r#""2021-06-01T10:00:00+09:00""#)?;
    /// assert_eq!(date.to_string(), "2021-06-01");
    /// assert!(date.unmarshal_json("2021-06-01").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "json")]
    pub fn unmarshal_json<I: AsRef<[u8]>>(
        &mut self,
        input: I,
    ) -> Result<(), Error> {
        fmt::json::decode_into(self, input)
    }

    /// Encodes this date in the binary layout described in
    /// [`crate::fmt::binary`].
    pub fn marshal_binary(self) -> [u8; fmt::binary::ENCODED_LEN] {
        fmt::binary::encode(self)
    }

    /// Decodes a binary payload into this date.
    ///
    /// On error, this date is left unchanged. See [`crate::fmt::binary`].
    ///
    /// # Errors
    ///
    /// This returns an error when the payload is malformed or encodes a
    /// date outside of the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Date;
    ///
    /// let bytes = Date::new(2020, 1, 1)?.marshal_binary();
    /// let mut date = Date::default();
    /// date.unmarshal_binary(&bytes)?;
    /// assert_eq!(date.to_string(), "2020-01-01");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), Error> {
        fmt::binary::decode_into(self, bytes)
    }
}

impl Date {
    const fn constant(unix_day: i64) -> Date {
        Date { timestamp: Timestamp::constant(unix_day * SECONDS_PER_DAY, 0) }
    }

    fn from_unix_day(days: i64) -> Result<Date, Error> {
        if !(MIN_UNIX_DAY..=MAX_UNIX_DAY).contains(&days) {
            return Err(E::OutOfRange.into());
        }
        let timestamp = Timestamp::from_second(days * SECONDS_PER_DAY)
            .context(E::OutOfRange)?;
        Ok(Date { timestamp })
    }

    fn unix_day(self) -> i64 {
        self.timestamp.as_second() / SECONDS_PER_DAY
    }

    fn to_civil(self) -> civil::Date {
        Offset::UTC.to_datetime(self.timestamp).date()
    }
}

impl Default for Date {
    fn default() -> Date {
        Date::ZERO
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let (year, month, day) = self.ymd();
        if year < 0 {
            write!(f, "-{:04}-{month:02}-{day:02}", year.unsigned_abs())
        } else {
            write!(f, "{year:04}-{month:02}-{day:02}")
        }
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for Date {
    type Err = Error;

    fn from_str(string: &str) -> Result<Date, Error> {
        Date::parse(string)
    }
}

impl core::ops::Sub for Date {
    type Output = SignedDuration;

    #[inline]
    fn sub(self, rhs: Date) -> SignedDuration {
        self.duration_since(rhs)
    }
}

impl TryFrom<civil::Date> for Date {
    type Error = Error;

    fn try_from(date: civil::Date) -> Result<Date, Error> {
        Date::from_civil(date)
    }
}

impl<'a> TryFrom<&'a Zoned> for Date {
    type Error = Error;

    fn try_from(zdt: &'a Zoned) -> Result<Date, Error> {
        Date::from_zoned(zdt)
    }
}

impl TryFrom<Timestamp> for Date {
    type Error = Error;

    fn try_from(timestamp: Timestamp) -> Result<Date, Error> {
        Date::from_timestamp(timestamp)
    }
}

impl From<Date> for civil::Date {
    fn from(date: Date) -> civil::Date {
        date.to_civil()
    }
}

impl From<Date> for Timestamp {
    fn from(date: Date) -> Timestamp {
        date.timestamp
    }
}

impl From<Date> for Zoned {
    fn from(date: Date) -> Zoned {
        date.to_utc_time()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Date, D::Error> {
        use serde::de;

        struct DateVisitor;

        impl<'de> de::Visitor<'de> for DateVisitor {
            type Value = Date;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a YYYY-MM-DD date or RFC 3339 timestamp string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Date, E> {
                fmt::parser::parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(DateVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        let span = MAX_UNIX_DAY - MIN_UNIX_DAY + 1;
        let offset = i64::from(<i32 as quickcheck::Arbitrary>::arbitrary(g))
            .rem_euclid(span);
        Date::from_unix_day(MIN_UNIX_DAY + offset).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Date>> {
        let days = self.unix_epoch_day();
        Box::new(
            quickcheck::Arbitrary::shrink(&days)
                .filter_map(|days| Date::from_unix_epoch_day(days).ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz};

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Date::MIN.ymd(), (-9999, 1, 3));
        assert_eq!(Date::MAX.ymd(), (9999, 12, 30));
        assert_eq!(Date::ZERO.ymd(), (1, 1, 1));
        assert_eq!(Date::UNIX_EPOCH.ymd(), (1970, 1, 1));
        assert_eq!(
            Date::ZERO.timestamp().as_second(),
            -62_135_596_800,
            "zero date is 0001-01-01T00:00:00Z",
        );
    }

    #[test]
    fn new_is_normalized() {
        let date = Date::new(2020, 1, 1).unwrap();
        assert_eq!(date.timestamp().as_second() % SECONDS_PER_DAY, 0);
        assert_eq!(date.timestamp().subsec_nanosecond(), 0);
        assert_eq!(date.ymd(), (2020, 1, 1));
        assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 1));
    }

    #[test]
    fn new_rolls_over() {
        let ymd = |y, m, d| Date::new(y, m, d).unwrap().ymd();
        assert_eq!(ymd(2021, 2, 29), (2021, 3, 1));
        assert_eq!(ymd(2020, 2, 30), (2020, 3, 1));
        assert_eq!(ymd(2020, 13, 1), (2021, 1, 1));
        assert_eq!(ymd(2020, 0, 1), (2019, 12, 1));
        assert_eq!(ymd(2020, 1, 0), (2019, 12, 31));
        assert_eq!(ymd(2020, 1, 32), (2020, 2, 1));
        assert_eq!(ymd(2020, -1, -1), (2019, 10, 30));
        assert_eq!(ymd(0, 1, 1), (0, 1, 1));
        assert_eq!(ymd(-44, 3, 15), (-44, 3, 15));
    }

    #[test]
    fn new_out_of_range() {
        insta::assert_snapshot!(
            Date::new(10_000, 1, 1).unwrap_err(),
            @"failed to create date from year 10000, month 1 and day 1: date is outside the supported range of -9999-01-03 to 9999-12-30",
        );
        assert!(Date::new(9999, 12, 31).unwrap_err().is_range());
        assert!(Date::new(-9999, 1, 2).unwrap_err().is_range());
        assert!(Date::new(i32::MAX, i32::MAX, i32::MAX).is_err());
        assert!(Date::new(i32::MIN, i32::MIN, i32::MIN).is_err());
        assert_eq!(Date::new(9999, 12, 30).unwrap(), Date::MAX);
        assert_eq!(Date::new(-9999, 1, 3).unwrap(), Date::MIN);
    }

    #[test]
    fn from_zoned_keeps_wall_clock_day() {
        let zdt = date(2020, 1, 1)
            .at(1, 1, 1, 1)
            .to_zoned(TimeZone::fixed(tz::offset(7)))
            .unwrap();
        assert_eq!(Date::from_zoned(&zdt).unwrap().ymd(), (2020, 1, 1));
        assert_eq!(Date::try_from(&zdt).unwrap().ymd(), (2020, 1, 1));
        // The same instant is still on the previous day in UTC.
        let got = Date::from_timestamp(zdt.timestamp()).unwrap();
        assert_eq!(got.ymd(), (2019, 12, 31));

        let zdt = date(2020, 1, 1)
            .at(23, 59, 59, 999_999_999)
            .to_zoned(TimeZone::fixed(tz::offset(-10)))
            .unwrap();
        assert_eq!(Date::from_zoned(&zdt).unwrap().ymd(), (2020, 1, 1));
    }

    #[test]
    fn from_timestamp_before_epoch() {
        let ts = Timestamp::from_second(-1).unwrap();
        assert_eq!(Date::from_timestamp(ts).unwrap().ymd(), (1969, 12, 31));
        let ts = Timestamp::from_second(-SECONDS_PER_DAY).unwrap();
        assert_eq!(Date::from_timestamp(ts).unwrap().ymd(), (1969, 12, 31));
        assert_eq!(Date::from_timestamp(Timestamp::MAX).unwrap(), Date::MAX);
        assert!(Date::from_timestamp(Timestamp::MIN).unwrap_err().is_range());
    }

    #[test]
    fn comparisons() {
        let d1 = Date::new(2020, 1, 1).unwrap();
        let d2 = Date::new(2020, 1, 2).unwrap();
        assert!(d1.before(d2));
        assert!(d2.after(d1));
        assert!(!d1.after(d1));
        assert_eq!(d1.cmp(&d2), core::cmp::Ordering::Less);
        assert_eq!(d2.cmp(&d1), core::cmp::Ordering::Greater);
        assert_eq!(d1.cmp(&d1), core::cmp::Ordering::Equal);
        // Dates built different ways compare equal.
        assert_eq!(d1, "2020-01-01T10:00:00+07:00".parse::<Date>().unwrap());
    }

    #[test]
    fn add_date_rolls_over() {
        let d = Date::new(2021, 1, 31).unwrap();
        assert_eq!(d.add_date(0, 1, 0).unwrap().ymd(), (2021, 3, 3));
        let d = Date::new(2020, 1, 31).unwrap();
        assert_eq!(d.add_date(0, 1, 0).unwrap().ymd(), (2020, 3, 2));
        let d = Date::new(2020, 3, 31).unwrap();
        assert_eq!(d.add_date(0, -1, 0).unwrap().ymd(), (2020, 3, 2));
        assert_eq!(d.add_date(-1, -3, -31).unwrap().ymd(), (2018, 11, 30));
    }

    #[test]
    fn add_day() {
        let d = Date::new(2020, 1, 1).unwrap();
        assert_eq!(d.add_day(-1).unwrap().ymd(), (2019, 12, 31));
        assert_eq!(d.add_day(366).unwrap().ymd(), (2021, 1, 1));
        assert_eq!(d.add_day(0).unwrap(), d);
        insta::assert_snapshot!(
            Date::MAX.add_day(1).unwrap_err(),
            @"failed to add 1 days to date: date is outside the supported range of -9999-01-03 to 9999-12-30",
        );
        assert!(Date::MIN.add_day(i32::MIN).is_err());
        assert!(Date::MAX.add_day(i32::MAX).is_err());
        assert_eq!(
            Date::MIN.add_day(Date::MAX.days_since(Date::MIN)).unwrap(),
            Date::MAX,
        );
    }

    #[test]
    fn add_date_error() {
        insta::assert_snapshot!(
            Date::MIN.add_date(0, -1, 0).unwrap_err(),
            @"failed to add 0 years, -1 months and 0 days to date: date is outside the supported range of -9999-01-03 to 9999-12-30",
        );
    }

    #[test]
    fn sub_is_whole_days() {
        let d1 = Date::new(2020, 3, 1).unwrap();
        let d2 = Date::new(2019, 3, 1).unwrap();
        assert_eq!(d1 - d2, SignedDuration::from_hours(366 * 24));
        assert_eq!(d2 - d1, SignedDuration::from_hours(-366 * 24));
        assert_eq!(d1 - d1, SignedDuration::ZERO);
        assert_eq!(d1.days_since(d2), 366);
    }

    #[test]
    fn accessors() {
        let d = Date::new(2020, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Wednesday);
        assert_eq!(d.day_of_year(), 1);
        assert_eq!(d.iso_week(), (2020, 1));

        let d = Date::new(2020, 12, 31).unwrap();
        assert_eq!(d.day_of_year(), 366);
        assert_eq!(d.iso_week(), (2020, 53));

        let d = Date::new(2021, 1, 3).unwrap();
        assert_eq!(d.iso_week(), (2020, 53));
        let d = Date::new(2021, 1, 4).unwrap();
        assert_eq!(d.iso_week(), (2021, 1));
        let d = Date::new(2024, 12, 30).unwrap();
        assert_eq!(d.iso_week(), (2025, 1));
        let d = Date::new(2016, 1, 1).unwrap();
        assert_eq!(d.iso_week(), (2015, 53));
        let d = Date::new(2022, 1, 1).unwrap();
        assert_eq!(d.iso_week(), (2021, 52));

        assert!(Date::ZERO.is_zero());
        assert!(!Date::MIN.is_zero());
        assert_eq!(Date::data_type(), "date");
    }

    #[test]
    fn to_utc_time_is_stored_instant() {
        let d = Date::new(2020, 1, 1).unwrap();
        let zdt = d.to_utc_time();
        assert_eq!(zdt.timestamp(), d.timestamp());
        assert_eq!(zdt.offset(), Offset::UTC);
        assert_eq!(Zoned::from(d), zdt);
    }

    #[test]
    fn to_location_time_keeps_date() {
        let d = Date::new(2020, 1, 1).unwrap();
        for hours in [-12, -5, 0, 7, 14] {
            let tz = TimeZone::fixed(tz::offset(hours));
            let zdt = d.to_location_time(tz).unwrap();
            assert_eq!(zdt.date(), date(2020, 1, 1));
            assert_eq!(zdt.time(), civil::Time::midnight());
            assert_eq!(Date::from_zoned(&zdt).unwrap(), d);
        }
    }

    #[test]
    fn to_location_time_in_gap() {
        // Clocks jumped from 00:00 to 01:00 on 2018-11-04.
        let tz = TimeZone::posix("<-03>3<-02>,M11.1.0/0,M2.3.0/0").unwrap();
        let d = Date::new(2018, 11, 4).unwrap();
        let zdt = d.to_location_time(tz).unwrap();
        assert_eq!(zdt.date(), date(2018, 11, 4));
        assert_eq!(zdt.hour(), 1);
    }

    #[test]
    fn to_time() {
        let d = Date::new(2020, 1, 1).unwrap();
        let tz = TimeZone::fixed(tz::offset(7));
        let zdt = d.to_time(1, 1, 1, 1, tz.clone()).unwrap();
        assert_eq!(zdt.datetime(), date(2020, 1, 1).at(1, 1, 1, 1));
        assert_eq!(zdt.offset(), tz::offset(7));

        assert!(d.to_time(24, 0, 0, 0, tz.clone()).unwrap_err().is_range());
        assert!(d.to_time(0, 60, 0, 0, tz.clone()).unwrap_err().is_range());
        assert!(d.to_time(0, 0, -1, 0, tz.clone()).unwrap_err().is_range());
        assert!(d.to_time(0, 0, 0, 1_000_000_000, tz).unwrap_err().is_range());
    }

    #[test]
    fn to_local_time_keeps_date() {
        let d = Date::new(2020, 6, 15).unwrap();
        let zdt = d.to_local_time().unwrap();
        assert_eq!(zdt.date(), date(2020, 6, 15));
        let zdt = d.to_local_time_at_clock(12, 0, 0).unwrap();
        assert_eq!(zdt.date(), date(2020, 6, 15));
    }

    #[test]
    fn display() {
        let show = |y, m, d| Date::new(y, m, d).unwrap().to_string();
        assert_eq!(show(2020, 1, 1), "2020-01-01");
        assert_eq!(show(1, 1, 1), "0001-01-01");
        assert_eq!(show(0, 1, 1), "0000-01-01");
        assert_eq!(show(-44, 3, 15), "-0044-03-15");
        assert_eq!(show(-9999, 1, 3), "-9999-01-03");
        assert_eq!(format!("{:?}", Date::UNIX_EPOCH), "1970-01-01");
    }

    #[test]
    fn conversions() {
        let d = Date::new(2024, 2, 29).unwrap();
        assert_eq!(civil::Date::from(d), date(2024, 2, 29));
        assert_eq!(Date::try_from(date(2024, 2, 29)).unwrap(), d);
        assert_eq!(Timestamp::from(d), d.timestamp());
        assert_eq!(Date::try_from(d.timestamp()).unwrap(), d);
        assert!(Date::try_from(civil::Date::MIN).unwrap_err().is_range());
        assert_eq!(Date::from_unix_epoch_day(d.unix_epoch_day()).unwrap(), d);
    }

    quickcheck::quickcheck! {
        fn prop_always_midnight(date: Date) -> bool {
            date.timestamp().as_second() % SECONDS_PER_DAY == 0
                && date.timestamp().subsec_nanosecond() == 0
        }

        fn prop_civil_roundtrip(date: Date) -> bool {
            Date::from_civil(civil::Date::from(date)).unwrap() == date
        }

        fn prop_new_ymd_roundtrip(date: Date) -> bool {
            let (y, m, d) = date.ymd();
            Date::new(i32::from(y), i32::from(m), i32::from(d)).unwrap() == date
        }

        fn prop_add_day_inverts_days_since(d1: Date, d2: Date) -> bool {
            d2.add_day(d1.days_since(d2)).unwrap() == d1
        }

        fn prop_sub_matches_days_since(d1: Date, d2: Date) -> bool {
            (d1 - d2).as_secs() == i64::from(d1.days_since(d2)) * SECONDS_PER_DAY
        }

        fn prop_order_matches_ymd(d1: Date, d2: Date) -> bool {
            d1.cmp(&d2) == d1.ymd().cmp(&d2.ymd())
        }
    }
}
