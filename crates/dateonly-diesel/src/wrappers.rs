/// A trait for convenient conversions from `dateonly` types to Diesel types.
///
/// # Example
///
/// This shows how to convert a [`dateonly::Date`] to a [`Date`]:
///
/// ```
/// use dateonly_diesel::ToDiesel;
///
/// let date: dateonly::Date = "2025-02-20".parse()?;
/// let wrapper = date.to_diesel();
/// assert_eq!(format!("{wrapper:?}"), "Date(2025-02-20)");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ToDiesel {
    /// The wrapper type to convert to.
    type Target;

    /// A conversion method that converts a `dateonly` type to a Diesel
    /// wrapper type.
    fn to_diesel(self) -> Self::Target;
}

/// A wrapper type for [`dateonly::Date`].
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    diesel::expression::AsExpression,
    diesel::deserialize::FromSqlRow,
)]
#[diesel(sql_type = diesel::sql_types::Date)]
pub struct Date(dateonly::Date);

impl Date {
    /// Converts this wrapper to a [`dateonly::Date`].
    pub fn to_dateonly(self) -> dateonly::Date {
        self.0
    }
}

impl ToDiesel for dateonly::Date {
    type Target = Date;

    fn to_diesel(self) -> Date {
        Date(self)
    }
}

impl From<dateonly::Date> for Date {
    fn from(x: dateonly::Date) -> Date {
        Date(x)
    }
}

impl From<Date> for dateonly::Date {
    fn from(x: Date) -> dateonly::Date {
        x.0
    }
}
