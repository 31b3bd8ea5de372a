use jiff::{civil, fmt::temporal::Pieces};

use crate::{
    error::{fmt::Error as E, Error, ErrorContext},
    util::parse,
    Date,
};

/// Parses a date in its canonical form or, failing that, from an RFC 3339
/// timestamp.
///
/// Any error is wrapped with the original (escaped) input.
pub(crate) fn parse(input: &[u8]) -> Result<Date, Error> {
    parse_date(input).with_context(|| E::Failed { input: input.into() })
}

fn parse_date(input: &[u8]) -> Result<Date, Error> {
    if input.is_empty() {
        return Err(E::Empty.into());
    }
    let ((year, month, day), rest) = parse_ymd(input)?;
    match rest.first() {
        None => {
            let date =
                civil::Date::new(year, month, day).context(E::InvalidDate)?;
            trace!(
                "parsed {:?} as a canonical date",
                crate::util::escape::Bytes(input),
            );
            Date::from_civil(date)
        }
        Some(&b'T') | Some(&b't') => {
            debug!(
                "parsing {:?} as an RFC 3339 timestamp",
                crate::util::escape::Bytes(input),
            );
            parse_timestamp(input)
        }
        Some(_) => Err(E::TrailingInput { unparsed: rest.into() }.into()),
    }
}

/// Parses a `YYYY-MM-DD` prefix, with an optional leading `-`.
///
/// The year, month and day are not validated beyond being digits. The
/// remaining input is returned.
fn parse_ymd(input: &[u8]) -> Result<((i16, i8, i8), &[u8]), Error> {
    let (sign, input) = match input.split_first() {
        Some((&b'-', rest)) => (-1, rest),
        _ => (1, input),
    };
    let (year, input) = parse_digits(input, 4, "year")?;
    let input = parse_separator(input, "year")?;
    let (month, input) = parse_digits(input, 2, "month")?;
    let input = parse_separator(input, "month")?;
    let (day, input) = parse_digits(input, 2, "day")?;
    // OK because four (or two) digits always fit.
    let ymd = ((sign * year) as i16, month as i8, day as i8);
    Ok((ymd, input))
}

fn parse_digits<'i>(
    input: &'i [u8],
    count: usize,
    what: &'static str,
) -> Result<(i32, &'i [u8]), Error> {
    let (digits, rest) = parse::split(input, count)
        .ok_or(E::ExpectedDigits { what, count })?;
    let n = parse::digits(digits)
        .map_err(|byte| E::InvalidDigit { what, byte })?;
    Ok((n, rest))
}

fn parse_separator<'i>(
    input: &'i [u8],
    after: &'static str,
) -> Result<&'i [u8], Error> {
    match input.split_first() {
        Some((&b'-', rest)) => Ok(rest),
        _ => Err(E::ExpectedSeparator { after }.into()),
    }
}

/// Parses an RFC 3339 timestamp and returns its date as written.
fn parse_timestamp(input: &[u8]) -> Result<Date, Error> {
    let pieces = Pieces::parse(input).context(E::InvalidTimestamp)?;
    if pieces.time().is_none() {
        return Err(E::MissingTime.into());
    }
    if pieces.offset().is_none() {
        return Err(E::MissingOffset.into());
    }
    Date::from_civil(pieces.date())
}
