use diesel::{
    backend::Backend,
    deserialize::FromSql,
    serialize::{Output, ToSql},
};

use crate::ToDiesel;

/// A wrapper type for a date in a nullable column.
///
/// Diesel only implements its nullable conversions for `Option<T>` where
/// `T` is a type it knows about, so an `Option<dateonly::Date>` can't be
/// loaded directly. This wraps `Option<Date>` instead. A SQL `NULL` loads
/// as `None`, and `None` is written back as `NULL`. Any non-`NULL` value
/// is decoded exactly like a [`Date`](crate::Date), so for example a
/// `TIMESTAMP` column still loads as the date it falls on.
///
/// This can be used when deriving [`diesel::deserialize::Queryable`]
/// or [`diesel::deserialize::QueryableByName`] trait implementations.
///
/// # Example
///
/// ```
/// use dateonly_diesel::{NullableDate, ToDiesel};
///
/// let due: Option<dateonly::Date> = None;
/// let wrapper: NullableDate = due.to_diesel();
/// assert_eq!(wrapper.to_dateonly(), None);
///
/// let due = Some(dateonly::Date::new(2024, 6, 19)?);
/// assert_eq!(NullableDate::from(due).to_dateonly(), due);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, diesel::deserialize::FromSqlRow)]
pub struct NullableDate(Option<crate::Date>);

impl NullableDate {
    /// Returns the date, or `None` when the column was `NULL`.
    pub fn to_dateonly(self) -> Option<dateonly::Date> {
        self.0.map(crate::Date::to_dateonly)
    }

    /// Returns true when the column was `NULL`.
    pub fn is_null(self) -> bool {
        self.0.is_none()
    }
}

impl ToDiesel for Option<dateonly::Date> {
    type Target = NullableDate;

    fn to_diesel(self) -> NullableDate {
        NullableDate(self.map(ToDiesel::to_diesel))
    }
}

impl From<Option<dateonly::Date>> for NullableDate {
    fn from(date: Option<dateonly::Date>) -> NullableDate {
        date.to_diesel()
    }
}

impl From<NullableDate> for Option<dateonly::Date> {
    fn from(date: NullableDate) -> Option<dateonly::Date> {
        date.to_dateonly()
    }
}

// Both impls defer to Diesel's own `Option<T>` handling, which is what maps
// `NULL` to `None` and back.
impl<DB: Backend, ST> ToSql<ST, DB> for NullableDate
where
    Option<crate::Date>: ToSql<ST, DB>,
{
    fn to_sql<'b>(
        &'b self,
        out: &mut Output<'b, '_, DB>,
    ) -> diesel::serialize::Result {
        self.0.to_sql(out)
    }
}

impl<DB: Backend, ST> FromSql<ST, DB> for NullableDate
where
    Option<crate::Date>: FromSql<ST, DB>,
{
    fn from_sql(
        bytes: <DB as Backend>::RawValue<'_>,
    ) -> diesel::deserialize::Result<Self> {
        FromSql::from_sql(bytes).map(NullableDate)
    }

    fn from_nullable_sql(
        bytes: Option<<DB as Backend>::RawValue<'_>>,
    ) -> diesel::deserialize::Result<Self> {
        FromSql::from_nullable_sql(bytes).map(NullableDate)
    }
}
