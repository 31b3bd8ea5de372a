/*!
This crate provides integration points for [`dateonly`] and [Diesel](diesel).

Note that to use this crate, you'll likely need to enable one of its
[database backend features](#crate-features).

# Organization

This crate defines a [`Date`] type that wraps [`dateonly::Date`]. The wrapper
provides implementations of the [`diesel::deserialize::FromSql`] and
[`diesel::serialize::ToSql`] traits for each supported backend, and derives
[`diesel::deserialize::Queryable`] through
[`diesel::deserialize::FromSqlRow`].

The intended workflow is to use the wrapper type within your wire types for
encoding and decoding data from databases such as PostgreSQL. The wrapper
owns the logic for encoding and decoding dates in database specific formats.

In order to the minimize the annoyance of wrapper types, the following
conveniences are afforded:

* A [`ToDiesel`] trait is provided and implemented for [`dateonly::Date`] and
`Option<dateonly::Date>`. It converts to the corresponding wrapper type in
this crate.
* A concrete `to_dateonly` method is provided on each wrapper type. For
example, [`Date::to_dateonly`]. This is the reverse of `ToDiesel`.
* There are `From` trait implementations in both directions.

Moreover, [`NullableDate`] is a wrapper type for `Option<dateonly::Date>`.
[Diesel requires additional wrapper types to express nullable
values.][diesel-optional-wrapper-types] A `NULL` value decodes to `None`.

# Database support

* **PostgreSQL** stores dates in its native `DATE` type. Decoding also
supports `TIMESTAMP` and `TIMESTAMPTZ` columns. Diesel always uses the binary
format, where a `TIMESTAMPTZ` is a UTC instant, so it decodes to that
instant's UTC date. A `TIMESTAMP` decodes to its date as stored.
* **SQLite** stores dates as `TEXT` in the canonical `YYYY-MM-DD` form.
Decoding also accepts datetime text, as written by SQLite's `datetime()`
function, for both `DATE` and `TIMESTAMP` columns.

# Example

```
use dateonly_diesel::ToDiesel;

let date = dateonly::Date::new(2024, 6, 19)?;
assert_eq!(date.to_diesel().to_dateonly(), date);
assert_eq!(Some(date).to_diesel().to_dateonly(), Some(date));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **postgres** - Enables `diesel/postgres_backend`.
* **sqlite** - Enables `diesel/sqlite`.

[diesel-optional-wrapper-types]: https://github.com/diesel-rs/diesel/discussions/4425
*/
#![deny(missing_docs)]

pub use self::nullable::NullableDate;
pub use self::wrappers::{Date, ToDiesel};

mod nullable;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;
mod wrappers;
