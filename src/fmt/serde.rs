/*!
This module provides helpers to use with [Serde].

`Date` itself implements `Serialize` and `Deserialize` when the `serde`
feature is enabled. It serializes to its canonical `YYYY-MM-DD` string and
deserializes from either that form or an RFC 3339 timestamp. So for most
uses, no helper is needed, and an `Option<Date>` field maps `null` to `None`
out of the box.

The helper here is exposed as a module meant to be used with Serde's
[`with` attribute]. It exists for payloads that use an empty string (in
addition to `null`) to mean "no date", which is common for data produced by
form submissions and some legacy APIs.

# Example

```
use dateonly::Date;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "dateonly::fmt::serde::optional")]
    due: Option<Date>,
}

let got: Record = serde_json::from_str(r#"{"due":""}"#)?;
assert_eq!(got.due, None);

let got: Record = serde_json::from_str(r#"{"due":null}"#)?;
assert_eq!(got.due, None);

let got: Record = serde_json::from_str(r#"{"due":"2024-06-19"}"#)?;
assert_eq!(got.due, Some(Date::new(2024, 6, 19)?));
assert_eq!(serde_json::to_string(&got)?, r#"{"due":"2024-06-19"}"#);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

use serde::de;

use crate::Date;

/// (De)serialize an optional date, treating both `null` and an empty string
/// as `None`.
pub mod optional {
    use crate::Date;

    /// Serialize an optional date as its canonical string, or `None` when
    /// absent.
    #[inline]
    pub fn serialize<S: serde::Serializer>(
        date: &Option<Date>,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        match *date {
            None => se.serialize_none(),
            Some(ref date) => se.collect_str(date),
        }
    }

    /// Deserialize an optional date, treating both `null` and an empty
    /// string as `None`.
    #[inline]
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        de: D,
    ) -> Result<Option<Date>, D::Error> {
        de.deserialize_option(super::OptionalVisitor)
    }
}

/// A visitor for `Option<Date>` that maps `null` to `None`.
struct OptionalVisitor;

impl<'de> de::Visitor<'de> for OptionalVisitor {
    type Value = Option<Date>;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("a date string, an empty string or `null`")
    }

    #[inline]
    fn visit_some<D: de::Deserializer<'de>>(
        self,
        de: D,
    ) -> Result<Option<Date>, D::Error> {
        de.deserialize_bytes(LenientVisitor)
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> Result<Option<Date>, E> {
        Ok(None)
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> Result<Option<Date>, E> {
        Ok(None)
    }
}

/// A visitor for a date string that maps an empty string to `None`.
struct LenientVisitor;

impl<'de> de::Visitor<'de> for LenientVisitor {
    type Value = Option<Date>;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("a date string or an empty string")
    }

    #[inline]
    fn visit_bytes<E: de::Error>(
        self,
        value: &[u8],
    ) -> Result<Option<Date>, E> {
        crate::fmt::text::decode(value).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Option<Date>, E> {
        self.visit_bytes(value.as_bytes())
    }
}
