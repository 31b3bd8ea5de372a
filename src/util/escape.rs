/*!
Provides convenience routines for escaping raw bytes in error messages.

Decoders in this crate accept `&[u8]`, and input that fails to parse is
echoed back in the error. These types make sure that arbitrary bytes (control
characters, invalid UTF-8) are rendered readably.
*/

/// Provides a convenient `Display` and `Debug` implementation for a `u8`.
///
/// The byte is treated as ASCII. If it isn't printable ASCII, then it's
/// emitted as an escape sequence.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        for (i, b) in core::ascii::escape_default(self.0).enumerate() {
            // capitalize \xab to \xAB
            let b = if i >= 2 { b.to_ascii_uppercase() } else { b };
            core::fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Provides a convenient `Display` and `Debug` implementation for `&[u8]`.
///
/// Valid UTF-8 is emitted as-is (modulo the usual debug escapes), while any
/// byte that isn't part of a valid UTF-8 sequence is emitted as a hex escape.
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut bytes = self.0;
        loop {
            match core::str::from_utf8(bytes) {
                Ok(valid) => return write_escaped(f, valid),
                Err(err) => {
                    let (valid, rest) = bytes.split_at(err.valid_up_to());
                    // `valid_up_to` guarantees this prefix is UTF-8.
                    write_escaped(f, core::str::from_utf8(valid).unwrap_or(""))?;
                    let invalid = err.error_len().unwrap_or(rest.len());
                    for &byte in &rest[..invalid] {
                        write!(f, r"\x{byte:02x}")?;
                    }
                    bytes = &rest[invalid..];
                }
            }
        }
    }
}

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

fn write_escaped(
    f: &mut core::fmt::Formatter,
    s: &str,
) -> core::fmt::Result {
    for ch in s.chars() {
        match ch {
            '\0' => f.write_str("\\0")?,
            '"' => f.write_str("\"")?,
            _ => write!(f, "{}", ch.escape_debug())?,
        }
    }
    Ok(())
}
