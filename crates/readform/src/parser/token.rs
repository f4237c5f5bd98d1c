use super::{error::SyntaxError, numbers::read_number};
use crate::factory::ValueFactory;

/// Classifies a finished token: number, then the `nil`/`false`/`true`
/// keywords, then symbol.
pub(crate) fn build_token<F: ValueFactory>(
    factory: &mut F,
    token: &[u8],
) -> Result<F::Value, SyntaxError> {
    if let Some(n) = read_number(token, false) {
        return Ok(factory.new_number(n));
    }
    match token {
        b"nil" => Ok(factory.new_nil()),
        b"false" => Ok(factory.new_bool(false)),
        b"true" => Ok(factory.new_bool(true)),
        [first, ..] if first.is_ascii_digit() => Err(SyntaxError::LeadingDigitSymbol),
        _ => Ok(factory.new_string(token)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::build_token;
    use crate::{StdFactory, Value, parser::error::SyntaxError};

    #[rstest]
    #[case(b"12", Value::Number(12.0))]
    #[case(b"-3.5e2", Value::Number(-350.0))]
    #[case(b"nil", Value::Nil)]
    #[case(b"false", Value::Boolean(false))]
    #[case(b"true", Value::Boolean(true))]
    #[case(b"-", Value::from("-"))]
    #[case(b"+", Value::from("+"))]
    #[case(b"nil?", Value::from("nil?"))]
    #[case(b"True", Value::from("True"))]
    #[case(b"e5", Value::Number(0.0))]
    #[case(b".", Value::Number(0.0))]
    #[case(b"else", Value::from("else"))]
    #[case(b"...", Value::from("..."))]
    #[case(b"->", Value::from("->"))]
    fn classifies(#[case] token: &[u8], #[case] expected: Value) {
        assert_eq!(build_token(&mut StdFactory, token), Ok(expected));
    }

    #[rstest]
    #[case(b"1a")]
    #[case(b"9lives")]
    #[case(b"1.2.3")]
    #[case(b"0x10")]
    fn leading_digit(#[case] token: &[u8]) {
        assert_eq!(
            build_token(&mut StdFactory, token),
            Err(SyntaxError::LeadingDigitSymbol)
        );
    }
}
