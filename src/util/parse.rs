/// Splits the given input into two slices at the given position.
///
/// If the position is greater than the length of the input, then `None` is
/// returned.
#[inline(always)]
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Parses a run of ASCII decimal digits into an integer.
///
/// If any byte isn't a digit, then that byte is returned as the error. The
/// input is expected to be short (at most four digits here), so this cannot
/// overflow.
#[inline(always)]
pub(crate) fn digits(bytes: &[u8]) -> Result<i32, u8> {
    let mut n: i32 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(byte);
        }
        n = n * 10 + i32::from(byte - b'0');
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_bounds() {
        assert_eq!(split(b"2020", 4), Some((&b"2020"[..], &b""[..])));
        assert_eq!(split(b"2020-", 4), Some((&b"2020"[..], &b"-"[..])));
        assert_eq!(split(b"202", 4), None);
    }

    #[test]
    fn parse_digits() {
        assert_eq!(digits(b"0000"), Ok(0));
        assert_eq!(digits(b"2020"), Ok(2020));
        assert_eq!(digits(b"09"), Ok(9));
        assert_eq!(digits(b"2O20"), Err(b'O'));
        assert_eq!(digits(b"+1"), Err(b'+'));
    }
}
