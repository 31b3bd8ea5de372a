/// A trait for convenient conversions from `dateonly` types to SQLx types.
///
/// # Example
///
/// This shows how to convert a [`dateonly::Date`] to a [`Date`]:
///
/// ```
/// use dateonly_sqlx::ToSqlx;
///
/// let date: dateonly::Date = "2025-02-20".parse()?;
/// let wrapper = date.to_sqlx();
/// assert_eq!(format!("{wrapper:?}"), "Date(2025-02-20)");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ToSqlx {
    /// The wrapper type to convert to.
    type Target;

    /// A conversion method that converts a `dateonly` type to a SQLx
    /// wrapper type.
    fn to_sqlx(self) -> Self::Target;
}

/// A wrapper type for [`dateonly::Date`].
///
/// In PostgreSQL, this uses the `DATE` type. In SQLite, this uses the `TEXT`
/// type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date(dateonly::Date);

impl Date {
    /// Converts this wrapper to a [`dateonly::Date`].
    pub fn to_dateonly(self) -> dateonly::Date {
        self.0
    }
}

impl ToSqlx for dateonly::Date {
    type Target = Date;

    fn to_sqlx(self) -> Date {
        Date(self)
    }
}

impl From<Date> for dateonly::Date {
    fn from(x: Date) -> dateonly::Date {
        x.0
    }
}

impl From<dateonly::Date> for Date {
    fn from(x: dateonly::Date) -> Date {
        Date(x)
    }
}
