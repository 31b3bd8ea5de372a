/*!
Conversions between calendar triples and days since the Unix epoch.

Unlike the conversions in Jiff, these accept month and day values outside of
their usual ranges and roll them over into adjacent months and years. So
month `13` of `2020` is January of `2021`, and day `0` of March is the last
day of February. This is how `Date::new` and `Date::add_date` normalize their
inputs.
*/

/// The number of seconds in a civil day.
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

const DAYS_IN_ERA: i64 = 146_097;
const DAYS_FROM_0000_03_01_TO_1970_01_01: i64 = 719_468;

/// Returns the number of days since `1970-01-01` for the given year, month
/// and day, after rolling over out-of-range months and days.
///
/// The caller is responsible for range checking the result. Callers are
/// expected to widen `i32` inputs, in which case this cannot overflow.
pub(crate) fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    // Fold the month into the year first. Everything after this works with
    // a month in `1..=12`, and the day is folded in linearly at the end.
    let months = year * 12 + (month - 1);
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) + 1;

    // ref: http://howardhinnant.github.io/date_algorithms.html
    let year = if month <= 2 { year - 1 } else { year };
    let month = if month > 2 { month - 3 } else { month + 9 };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let day_of_year = (153 * month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
        + day_of_year;
    era * DAYS_IN_ERA + day_of_era - DAYS_FROM_0000_03_01_TO_1970_01_01
}
