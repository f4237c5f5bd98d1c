//! Numeric literals.
//!
//! Grammar: `[sign] digits ['.' digits] [('e' | 'E') [sign] digits]`. Every
//! mantissa digit is optional, so `.`, `-.` and `e5` all read as zero. Only a
//! bare sign fails. There is no `inf` or `nan` spelling.

/// Reads `bytes` as a number. Returns `None` unless the entire slice matches
/// the grammar.
///
/// With `force_int` the point and exponent are rejected; this is how the
/// exponent itself is read.
pub(crate) fn read_number(bytes: &[u8], force_int: bool) -> Option<f64> {
    let (sign, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (-1.0, rest),
        Some((b'+', rest)) => (1.0, rest),
        _ => (1.0, bytes),
    };
    if digits.is_empty() {
        return None;
    }

    let mut accum = 0.0_f64;
    let mut place = 1.0_f64;
    let mut scale = 1.0_f64;
    let mut seen_point = false;

    for (i, &b) in digits.iter().enumerate() {
        match b {
            b'0'..=b'9' => {
                let digit = f64::from(b - b'0');
                if seen_point {
                    accum += digit * place;
                    place *= 0.1;
                } else {
                    accum = accum * 10.0 + digit;
                }
            }
            b'.' if !force_int && !seen_point => {
                seen_point = true;
                place = 0.1;
            }
            b'e' | b'E' if !force_int => {
                let exponent = read_number(&digits[i + 1..], true)?;
                #[allow(clippy::cast_possible_truncation)]
                let exponent = exponent as i32;
                scale = exp10(exponent);
                break;
            }
            _ => return None,
        }
    }

    Some(accum * sign * scale)
}

/// `10^power` by repeated squaring. Negative powers take the reciprocal.
pub(crate) fn exp10(power: i32) -> f64 {
    if power == 0 {
        return 1.0;
    }
    if power < 0 {
        return 1.0 / exp10(power.saturating_neg());
    }
    let mut result = 10.0_f64;
    let mut current = 1;
    while current <= power / 2 {
        result *= result;
        current *= 2;
    }
    result * exp10(power - current)
}
