/*!
This crate provides integration points for [`dateonly`] and [SQLx][sqlx].

Note that to use this crate, you'll likely need to enable one of its
[database backend features](#crate-features).

# Organization

This crate defines a single [`Date`] type that wraps [`dateonly::Date`]. The
wrapper provides implementations of the [`sqlx_core::types::Type`],
[`sqlx_core::decode::Decode`] and [`sqlx_core::encode::Encode`] traits for
each supported backend.

The intended workflow is to use the wrapper type within your wire types for
encoding and decoding data from databases such as PostgreSQL. The wrapper
owns the logic for encoding and decoding dates in database specific formats.

In order to the minimize the annoyance of a wrapper type, the following
conveniences are afforded:

* A [`ToSqlx`] trait is provided and implemented for [`dateonly::Date`]. It
converts a date into the wrapper type in this crate.
* A concrete [`Date::to_dateonly`] method is the reverse of `ToSqlx`.
* There are `From` trait implementations in both directions.

A nullable column maps to `Option<Date>`, which SQLx supports for any type
implementing its traits. A `NULL` value decodes to `None`.

# Database support

* **PostgreSQL** stores dates in its native `DATE` type. Decoding also accepts
`TIMESTAMP` and `TIMESTAMPTZ` columns. A `TIMESTAMPTZ` decodes to the UTC date
of the stored instant, in both the binary and text formats. A `TIMESTAMP`
decodes to its date as stored.
* **SQLite** stores dates as `TEXT` in the canonical `YYYY-MM-DD` form.
Decoding also accepts datetime text (as written by SQLite's `datetime()`
function) and `REAL` julian day numbers.

# Example

```
use dateonly_sqlx::ToSqlx;

let date = dateonly::Date::new(2024, 6, 19)?;
let wrapper = date.to_sqlx();
assert_eq!(wrapper.to_dateonly(), date);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **postgres** - Enables the `sqlx-postgres` dependency.
* **sqlite** - Enables the `sqlx-sqlite` dependency.

[sqlx]: https://docs.rs/sqlx/0.8
*/

#![deny(missing_docs)]

pub use self::wrappers::{Date, ToSqlx};

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;
mod wrappers;
