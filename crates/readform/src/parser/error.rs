use thiserror::Error;

/// A reader error, positioned at the byte that caused it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{source} at {line}:{column}")]
pub struct ParserError {
    pub(crate) source: SyntaxError,
    pub(crate) index: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParserError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }

    /// Zero-based byte offset of the offending byte.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based line of the offending byte.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the offending byte.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Every way a parse can fail. All of them are terminal: the parser must be
/// reset before it accepts more input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// The frame stack was empty, or its top frame did not match the handler
    /// that was invoked. An internal invariant breach, not malformed input.
    #[error("parser stack underflow")]
    StackUnderflow,
    /// A closing delimiter with no matching open form.
    #[error("unexpected closing delimiter {:?}", as_char(.0))]
    UnexpectedClosingDelimiter(u8),
    /// A byte that cannot start any value.
    #[error("unexpected character {:?}", as_char(.0))]
    UnexpectedCharacter(u8),
    /// A byte inside a token that is neither a symbol byte nor a terminator.
    #[error("expected symbol character, found {:?}", as_char(.0))]
    ExpectedSymbolCharacter(u8),
    /// An unrecognized byte after `\` in a string literal.
    #[error("unknown string escape sequence '\\{}'", as_char(.0))]
    UnknownEscapeSequence(u8),
    /// A token that is not a number but starts with a digit.
    #[error("symbols cannot start with digits")]
    LeadingDigitSymbol,
    /// A value was completed while the top frame could not hold it.
    #[error("expected container type")]
    MalformedContainerAppend,
    /// A string reached the reserved unicode or hex escape state. Neither
    /// `\u` nor `\x` escapes are decoded.
    #[error("unsupported escape sequence")]
    UnsupportedEscape,
    /// The input was closed with a form or string still open.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}
