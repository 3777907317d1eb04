//! Loading whole files into buffers that views can borrow from.

extern crate std;

use std::{fs, path::Path, vec::Vec};

use crate::error::LoadError;

/// Reads a whole file into a NUL-terminated buffer.
///
/// The text is normalized to end with a `\r\n` line break, so line-splitting
/// code never has to handle a missing final newline:
/// - content ending with `\r\n` is kept as is;
/// - content ending with a bare `\n` gets a `\r` inserted before it;
/// - anything else, empty files included, gets `\r\n` appended.
///
/// A single NUL byte is appended last, so [`View::from_buffer`] wraps exactly
/// the normalized text.
///
/// [`View::from_buffer`]: crate::View::from_buffer
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let mut buffer = fs::read(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} ({} bytes)", path.display(), buffer.len());
    normalize_line_ending(&mut buffer);
    buffer.push(0);
    Ok(buffer)
}

/// Makes `buffer` end with `\r\n`, returning how many bytes were added.
pub fn normalize_line_ending(buffer: &mut Vec<u8>) -> usize {
    if buffer.ends_with(b"\r\n") {
        return 0;
    }
    if buffer.ends_with(b"\n") {
        buffer.insert(buffer.len() - 1, b'\r');
        log::debug!("inserted carriage return before final line feed");
        return 1;
    }
    buffer.extend_from_slice(b"\r\n");
    log::debug!("appended missing final line break");
    2
}
