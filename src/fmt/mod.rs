/*!
Encoders and decoders for [`Date`](crate::Date).

Every adapter in this module agrees on `YYYY-MM-DD` as the canonical form of
a date, and every decoder runs the same two-stage parser:

1. The canonical form: an optional `-` sign, exactly four year digits, a
`-`, two month digits, a `-` and two day digits. Nothing may follow. The
year, month and day must name a real day. Unlike [`Date::new`], parsing does
not roll over out-of-range values, so `2021-02-29` is an error.
2. If the input starts with a date in the canonical form that is followed by
a `T` (or `t`) separator, then the whole input is parsed as an RFC 3339
timestamp instead, like `2020-01-01T23:00:00-05:00`. A time and an offset
(either numeric or `Z`) are required. The date is kept *as written*. The
time of day and offset are discarded, so the example becomes `2020-01-01`
even though the same instant falls on `2020-01-02` in UTC. An RFC 9557 time
zone annotation (like `[America/New_York]`) is tolerated and ignored.

The adapters differ only in how they frame a date and how they represent a
missing one:

* [`text`] encodes the canonical form unquoted. Decoding empty input
produces no date.
* [`json`] (requires the `json` feature) encodes a JSON string. Decoding the
JSON literal `null` produces no date.
* [`binary`] encodes a compact fixed size layout.
* [`serde`](self::serde) (requires the `serde` feature) provides a helper
for use with Serde's `with` attribute. `Date` itself implements Serde's
traits when that feature is enabled.

Each decoding module provides both a `decode` function that returns a new
value and a `decode_into` function that assigns the decoded value to an
existing `Date` only after the whole input was decoded successfully. On
error, the target is left unchanged.

[`Date::new`]: crate::Date::new
*/

pub mod binary;
#[cfg(feature = "json")]
pub mod json;
pub(crate) mod parser;
#[cfg(feature = "serde")]
pub mod serde;
pub mod text;
