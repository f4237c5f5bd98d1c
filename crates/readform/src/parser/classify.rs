//! Byte classes used by every frame handler.

/// Space, tab, newline, carriage return, NUL and comma.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\0' | b',')
}

/// Bytes that may appear in a bare token. Deliberately permissive.
#[inline]
pub(crate) fn is_symbol_char(b: u8) -> bool {
    matches!(
        b,
        b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b':'
            | b'<'..=b'@'
            | b'*'..=b'+'
            | b'-'..=b'/'
            | b'#'..=b'&'
            | b'_'
            | b'^'
            | b'!'
    )
}

#[inline]
pub(crate) fn is_opening(b: u8) -> bool {
    matches!(b, b'(' | b'[' | b'{')
}

#[inline]
pub(crate) fn is_closing(b: u8) -> bool {
    matches!(b, b')' | b']' | b'}')
}
