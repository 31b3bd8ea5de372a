use dateonly::{
    fmt::{binary, json, text},
    Date,
};
use jiff::{
    civil,
    tz::{self, TimeZone},
};

use crate::Result;

/// A spread of dates that tends to shake out formatting bugs.
fn samples() -> Vec<Date> {
    let mut dates = vec![Date::MIN, Date::MAX, Date::ZERO, Date::UNIX_EPOCH];
    for &(y, m, d) in &[
        (2020, 1, 1),
        (2024, 2, 29),
        (1969, 12, 31),
        (0, 1, 1),
        (-1, 12, 31),
        (999, 9, 9),
    ] {
        dates.push(Date::new(y, m, d).unwrap());
    }
    dates
}

#[test]
fn json_encoding_is_date_only() -> Result {
    crate::init_logger();

    let date = Date::new(2020, 1, 1)?;
    assert_eq!(date.marshal_json(), r#""2020-01-01""#);

    // Asia/Ho_Chi_Minh has been at a fixed +07:00 since 1975.
    let zdt = civil::date(2020, 1, 1)
        .at(1, 1, 1, 1)
        .to_zoned(TimeZone::fixed(tz::offset(7)))
        .unwrap();
    assert_eq!(Date::from_zoned(&zdt)?.marshal_json(), r#""2020-01-01""#);
    Ok(())
}

#[test]
fn roundtrips() -> Result {
    for date in samples() {
        assert_eq!(json::decode(json::encode(date))?, Some(date));
        assert_eq!(text::decode(text::encode(date))?, Some(date));
        assert_eq!(binary::decode(&binary::encode(date))?, date);

        let serialized = serde_json::to_string(&date).unwrap();
        assert_eq!(serialized, json::encode(date));
        let deserialized: Date = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, date);

        let mut got = Date::default();
        got.unmarshal_json(date.marshal_json())?;
        assert_eq!(got, date);
        let mut got = Date::default();
        got.unmarshal_text(date.marshal_text())?;
        assert_eq!(got, date);
        let mut got = Date::default();
        got.unmarshal_binary(&date.marshal_binary())?;
        assert_eq!(got, date);
    }
    Ok(())
}

#[test]
fn fallback_matches_canonical() -> Result {
    crate::init_logger();

    let canonical = json::decode(r#""2020-01-01""#)?;
    let fallback = json::decode(r#""2020-01-01T00:00:00+07:00""#)?;
    assert_eq!(canonical, fallback);

    let canonical = text::decode("2020-01-01")?;
    let fallback = text::decode("2020-01-01T00:00:00+07:00")?;
    assert_eq!(canonical, fallback);
    Ok(())
}

#[test]
fn null_and_empty_are_noops() -> Result {
    let before = Date::new(2020, 1, 1)?;

    let mut date = before;
    date.unmarshal_json("null")?;
    assert_eq!(date, before);
    json::decode_into(&mut date, "null")?;
    assert_eq!(date, before);

    date.unmarshal_text("")?;
    assert_eq!(date, before);
    text::decode_into(&mut date, b"")?;
    assert_eq!(date, before);
    Ok(())
}

#[test]
fn malformed_json_is_an_error() {
    let before = Date::new(2020, 1, 1).unwrap();
    for input in [
        r#""not-a-date""#,
        "not-a-date",
        "2020-01-01",
        r#""2020-01-01"#,
        r#"'2020-01-01'"#,
        "20200101",
        "true",
        r#""2020-01-01 00:00:00""#,
    ] {
        let mut date = before;
        let err = date.unmarshal_json(input).unwrap_err();
        assert!(err.is_parse(), "{input}: {err}");
        assert_eq!(date, before, "{input}: target must be left unchanged");
    }
}

#[test]
fn binary_errors_are_codec_errors() {
    let mut date = Date::new(2020, 1, 1).unwrap();
    for payload in [&[][..], &[1][..], &[0; 15][..], &[2; 15][..]] {
        let err = date.unmarshal_binary(payload).unwrap_err();
        assert!(err.is_codec(), "{payload:?}: {err}");
    }
    assert_eq!(date, Date::new(2020, 1, 1).unwrap());
}

#[test]
fn serde_optional_field() {
    #[derive(Debug, serde::Deserialize, serde::Serialize)]
    struct Invoice {
        issued: Date,
        #[serde(default, with = "dateonly::fmt::serde::optional")]
        paid: Option<Date>,
    }

    let json = r#"{"issued":"2024-06-19T10:00:00-04:00","paid":""}"#;
    let invoice: Invoice = serde_json::from_str(json).unwrap();
    assert_eq!(invoice.issued, Date::new(2024, 6, 19).unwrap());
    assert_eq!(invoice.paid, None);
    assert_eq!(
        serde_json::to_string(&invoice).unwrap(),
        r#"{"issued":"2024-06-19","paid":null}"#,
    );

    let json = r#"{"issued":"2024-06-19","paid":"2024-07-01"}"#;
    let invoice: Invoice = serde_json::from_str(json).unwrap();
    assert_eq!(invoice.paid, Some(Date::new(2024, 7, 1).unwrap()));

    let json = r#"{"issued":"2024-06-19"}"#;
    let invoice: Invoice = serde_json::from_str(json).unwrap();
    assert_eq!(invoice.paid, None);
}
