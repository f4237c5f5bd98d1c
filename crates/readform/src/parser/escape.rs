//! Single-byte string escapes.
//!
//! Only the table below is recognized. Note that `\\` is not an escape: a
//! literal backslash cannot be written inside a string.

/// Decodes the byte following a `\`, or `None` if it is not a known escape.
pub(crate) fn decode_escape(byte: u8) -> Option<u8> {
    let decoded = match byte {
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'f' => 0x0C,
        b'0' | b'z' => b'\0',
        b'"' => b'"',
        b'\'' => b'\'',
        _ => return None,
    };
    Some(decoded)
}
