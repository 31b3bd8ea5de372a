/*!
This crate provides [`Date`], a calendar date value type that is always
anchored at midnight UTC.

A `Date` is a year, month and day. Nothing more. It has no time of day and
it is not an instant that changes its meaning when viewed from another time
zone. This makes it a good fit for things like birthdays, billing periods
and due dates: values where "the 1st of January" should mean the 1st of
January regardless of where the computer reading it happens to be.

Internally, a `Date` is a [`jiff::Timestamp`] pinned to the first instant
of its day in UTC. Every `Date` upholds this invariant, which means
comparisons, hashing and differences between dates all behave like they
would on a plain year-month-day triple.

# Overview

* [`Date::new`] builds a date from a year, month and day. Values outside
of their usual ranges roll over, so `2021-02-29` becomes `2021-03-01`.
* [`Date::from_zoned`] extracts the calendar day of a [`jiff::Zoned`] *as
seen in that value's own time zone*.
* [`Date::add_date`] and [`Date::add_day`] do calendar arithmetic with the
same rollover rules.
* [`Date::to_location_time`] and [`Date::to_time`] go back to a
[`jiff::Zoned`] by recombining the calendar day with a clock time and a time
zone.
* The [`fmt`] module contains adapters for plain text, JSON, a compact
binary layout and Serde. All of them agree on `YYYY-MM-DD` as the canonical
form, and all of them also accept an RFC 3339 timestamp (keeping only its
date).

Database bindings live in the companion crates `dateonly-sqlx` and
`dateonly-diesel`.

# Example

This shows how to create a date, do some arithmetic on it and print it:

```
use dateonly::Date;

let date = Date::new(2020, 1, 1)?;
assert_eq!(date.add_day(-1)?.to_string(), "2019-12-31");
// Months roll over without clamping to the end of the month.
assert_eq!(Date::new(2021, 1, 31)?.add_date(0, 1, 0)?.to_string(), "2021-03-03");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: parsing

Parsing accepts both the canonical form and full RFC 3339 timestamps. In the
latter case, the time of day and offset are discarded:

```
use dateonly::Date;

let d1: Date = "2020-01-01".parse()?;
let d2: Date = "2020-01-01T23:59:59+07:00".parse()?;
assert_eq!(d1, d2);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **serde** - Implements Serde's `Serialize` and `Deserialize` traits for
`Date` and enables the [`fmt::serde`](crate::fmt) helpers.
* **json** - Enables the structured interchange adapter in `fmt::json`.
Implies `serde`.
* **logging** - Emits `trace` and `debug` level messages via the `log` crate.
This is mostly useful for figuring out which parsing strategy was used to
decode a value.
*/

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
// No clue why this thing is still unstable because it's pretty amazing. This
// adds Cargo feature annotations to items in the rustdoc output.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

pub use crate::{date::Date, error::Error};

#[macro_use]
mod logging;

mod date;
mod error;
pub mod fmt;
mod util;

/// The logical column type a [`Date`] maps to in a database schema.
///
/// This is what ORM-style schema generators should use for a `Date` field.
/// The `dateonly-sqlx` and `dateonly-diesel` crates both bind `Date` to the
/// corresponding `DATE` type of each backend.
///
/// # Example
///
/// ```
/// assert_eq!(dateonly::COLUMN_TYPE, "date");
/// assert_eq!(dateonly::Date::data_type(), dateonly::COLUMN_TYPE);
/// ```
pub const COLUMN_TYPE: &str = "date";
