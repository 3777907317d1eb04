use core::fmt::{self, Write};

/// Prints bytes as an escaped byte string literal, `b"..."`.
///
/// Printable ASCII is kept as is, which suits views over text; everything
/// else uses the escapes of Rust byte literals.
pub(crate) fn debug_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("b\"")?;
    for &b in bytes {
        match b {
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            b'\t' => f.write_str("\\t")?,
            b'\0' => f.write_str("\\0")?,
            b'\\' | b'"' => {
                f.write_char('\\')?;
                f.write_char(b as char)?;
            }
            0x20..=0x7e => f.write_char(b as char)?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    f.write_char('"')
}

/// Prints bytes as text, replacing each invalid UTF-8 sequence with U+FFFD.
pub(crate) fn display_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut rest = bytes;
    loop {
        match core::str::from_utf8(rest) {
            Ok(text) => return f.write_str(text),
            Err(error) => {
                let (valid, invalid) = rest.split_at(error.valid_up_to());
                f.write_str(core::str::from_utf8(valid).map_err(|_| fmt::Error)?)?;
                f.write_char(char::REPLACEMENT_CHARACTER)?;
                let skip = error.error_len().unwrap_or(invalid.len());
                rest = &invalid[skip..];
            }
        }
    }
}

pub(crate) fn lower_hex(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    bytes.iter().try_for_each(|b| write!(f, "{b:02x}"))
}

pub(crate) fn upper_hex(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    bytes.iter().try_for_each(|b| write!(f, "{b:02X}"))
}
