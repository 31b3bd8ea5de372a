use std::collections::HashSet;

use dateonly::Date;
use jiff::{
    civil::{self, Weekday},
    tz::{self, TimeZone},
    SignedDuration, Timestamp,
};

use crate::Result;

#[test]
fn new_then_ymd() -> Result {
    crate::init_logger();

    for &(y, m, d) in &[
        (2020, 1, 1),
        (2020, 2, 29),
        (1999, 12, 31),
        (1, 1, 1),
        (1970, 1, 1),
        (-1, 6, 30),
    ] {
        let (year, month, day) = Date::new(y, m, d)?.ymd();
        assert_eq!(
            (i32::from(year), i32::from(month), i32::from(day)),
            (y, m, d),
        );
    }
    Ok(())
}

#[test]
fn new_with_overflow() -> Result {
    assert_eq!(Date::new(2019, 2, 29)?, Date::new(2019, 3, 1)?);
    assert_eq!(Date::new(2019, 12, 32)?, Date::new(2020, 1, 1)?);
    assert_eq!(Date::new(2020, 24, 1)?, Date::new(2021, 12, 1)?);
    assert_eq!(Date::new(2020, 1, -30)?, Date::new(2019, 12, 1)?);
    Ok(())
}

#[test]
fn add_day_crosses_year() -> Result {
    let date = Date::new(2020, 1, 1)?.add_day(-1)?;
    assert_eq!(date.ymd(), (2019, 12, 31));
    assert_eq!(date.to_string(), "2019-12-31");
    Ok(())
}

#[test]
fn add_date_does_not_clamp() -> Result {
    let jan31 = Date::new(2021, 1, 31)?;
    assert_eq!(jan31.add_date(0, 1, 0)?.to_string(), "2021-03-03");
    let jan31 = Date::new(2024, 1, 31)?;
    assert_eq!(jan31.add_date(0, 1, 0)?.to_string(), "2024-03-02");
    let leap = Date::new(2024, 2, 29)?;
    assert_eq!(leap.add_date(1, 0, 0)?.to_string(), "2025-03-01");
    assert_eq!(leap.add_date(4, 0, 0)?.to_string(), "2028-02-29");
    Ok(())
}

#[test]
fn equal_regardless_of_source() -> Result {
    let zdt = civil::date(2020, 1, 1)
        .at(23, 59, 59, 999_999_999)
        .to_zoned(TimeZone::fixed(tz::offset(-9)))
        .unwrap();
    let from_zoned = Date::from_zoned(&zdt)?;
    let from_new = Date::new(2020, 1, 1)?;
    let parsed: Date = "2020-01-01T12:00:00+14:00".parse()?;
    assert_eq!(from_zoned, from_new);
    assert_eq!(from_new, parsed);

    let set: HashSet<Date> = [from_zoned, from_new, parsed].into_iter().collect();
    assert_eq!(set.len(), 1);
    Ok(())
}

#[test]
fn ordering() -> Result {
    let mut dates = vec![
        Date::new(2020, 1, 2)?,
        Date::MAX,
        Date::new(-50, 1, 1)?,
        Date::ZERO,
        Date::MIN,
        Date::new(2020, 1, 1)?,
    ];
    dates.sort();
    let got: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        got,
        [
            "-9999-01-03",
            "-0050-01-01",
            "0001-01-01",
            "2020-01-01",
            "2020-01-02",
            "9999-12-30",
        ],
    );
    assert!(dates[0].before(dates[1]));
    assert!(dates[5].after(dates[4]));
    Ok(())
}

#[test]
fn sub_whole_days() -> Result {
    let d1 = Date::new(2024, 3, 31)?;
    let d2 = Date::new(2024, 3, 1)?;
    assert_eq!(d1 - d2, SignedDuration::from_hours(30 * 24));
    assert_eq!(d1.duration_since(d2), d1 - d2);
    assert_eq!(d1.days_since(d2), 30);
    assert_eq!((Date::MAX - Date::MIN).as_secs() % 86_400, 0);
    Ok(())
}

#[test]
fn accessors() -> Result {
    let date = Date::new(2024, 12, 30)?;
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), 12);
    assert_eq!(date.day(), 30);
    assert_eq!(date.weekday(), Weekday::Monday);
    assert_eq!(date.iso_week(), (2025, 1));
    assert_eq!(date.day_of_year(), 365);
    assert!(!date.is_zero());
    assert!(Date::default().is_zero());
    Ok(())
}

#[test]
fn zone_conversions_keep_the_date() -> Result {
    let date = Date::new(2020, 1, 1)?;

    let utc = date.to_utc_time();
    assert_eq!(utc.timestamp(), date.timestamp());
    assert_eq!(
        utc.timestamp(),
        "2020-01-01T00:00:00Z".parse::<Timestamp>().unwrap(),
    );

    let tz = TimeZone::fixed(tz::offset(7));
    let midnight = date.to_location_time(tz.clone())?;
    assert_eq!(midnight.datetime(), civil::date(2020, 1, 1).at(0, 0, 0, 0));
    assert_eq!(
        midnight.timestamp(),
        "2019-12-31T17:00:00Z".parse::<Timestamp>().unwrap(),
    );

    let later = date.to_time(1, 1, 1, 1, tz)?;
    assert_eq!(later.datetime(), civil::date(2020, 1, 1).at(1, 1, 1, 1));
    assert_eq!(Date::from_zoned(&later)?, date);
    Ok(())
}

#[test]
fn range_errors() -> Result {
    assert!(Date::new(10_000, 1, 1).unwrap_err().is_range());
    assert!(Date::MAX.add_day(1).unwrap_err().is_range());
    assert!(Date::MIN.add_date(0, 0, -1).unwrap_err().is_range());
    assert!(Date::from_timestamp(Timestamp::MIN).unwrap_err().is_range());
    assert!(Date::from_unix_epoch_day(i32::MAX).unwrap_err().is_range());

    // The last instant a timestamp supports is still on the last date.
    assert_eq!(Date::from_timestamp(Timestamp::MAX)?, Date::MAX);
    Ok(())
}

#[test]
fn zone_overflow_is_a_range_error() {
    // Midnight on the last date at -25:00 is past the last timestamp.
    let tz = TimeZone::fixed(tz::offset(-25));
    assert!(Date::MAX.to_location_time(tz).unwrap_err().is_range());
    // So is 23:00 in UTC.
    let err = Date::MAX.to_time(23, 0, 0, 0, TimeZone::UTC).unwrap_err();
    assert!(err.is_range());
}
