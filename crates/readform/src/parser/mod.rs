//! Streaming reader.
//!
//! Overview
//! - [`StreamingParser`] turns bytes into a single value. Input may arrive in
//!   any number of [`feed`](StreamingParser::feed) calls split at any byte;
//!   all state lives in the parser, so a parse can be suspended between calls
//!   and resumed later.
//! - Nesting is tracked with an explicit stack of frames (root, form, string,
//!   token) rather than call-stack recursion. Depth is bounded only by memory.
//!
//! Dispatch
//! - Each byte is offered to the handler of the top frame. A handler reports
//!   whether it consumed the byte. When it did not, the byte is offered again
//!   to whatever frame is now on top. This is how `)` in `(abc)` both ends the
//!   token `abc` and closes the form.
//! - A handler that declines a byte must have changed the stack: pushed a
//!   token frame (root/form seeing a symbol byte) or popped one (token seeing a
//!   closing delimiter). Debug builds assert this on every retry.
//!
//! Desugaring
//! - `[a b]` reads as `(array a b)` and `{a b}` as `(obj a b)`.
//! - A string literal `"s"` reads as `(quote "s")`.
//!
//! Lifecycle
//! - A parser is [`Pending`](Status::Pending) until one root value completes
//!   ([`Full`](Status::Full)) or input is rejected ([`Error`](Status::Error)).
//!   Either terminal status stops consumption; call
//!   [`reset`](StreamingParser::reset) or
//!   [`take_value`](StreamingParser::take_value) to read the next value.

mod classify;
mod error;
mod escape;
mod frame;
mod numbers;
mod options;
mod token;


use alloc::vec::Vec;
use core::fmt;

pub use error::{ParserError, SyntaxError};
pub use options::ParserOptions;

use self::{
    classify::{is_closing, is_opening, is_symbol_char, is_whitespace},
    escape::decode_escape,
    frame::{Frame, FrameKind, FrameStack, StringState, end_delimiter_for},
    token::build_token,
};
use crate::factory::{StdFactory, ValueFactory};

/// Parse progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Mid-parse, waiting for more bytes.
    #[default]
    Pending,
    /// A complete root value is available.
    Full,
    /// Input was rejected; see [`StreamingParser::error`].
    Error,
}

/// The streaming reader.
///
/// # Examples
///
/// ```rust
/// use readform::{ParserOptions, Status, StreamingParser, Value};
///
/// let mut parser = StreamingParser::new(ParserOptions::default());
/// assert_eq!(parser.feed("(+ 1 "), 5);
/// assert_eq!(parser.status(), Status::Pending);
///
/// assert_eq!(parser.feed("[2 3])"), 6);
/// assert_eq!(parser.status(), Status::Full);
/// assert_eq!(parser.value().unwrap().to_string(), "(+ 1 (array 2 3))");
/// ```
pub struct StreamingParser<F: ValueFactory = StdFactory> {
    factory: F,
    frames: FrameStack<F::Array>,
    status: Status,
    value: Option<F::Value>,
    error: Option<ParserError>,

    /// Bytes consumed so far.
    index: usize,
    line: usize,
    column: usize,

    buffer_capacity: usize,

    /// Panic on syntax errors instead of returning them
    #[cfg(any(test, feature = "fuzzing"))]
    panic_on_error: bool,
}

impl Default for StreamingParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl<F> fmt::Debug for StreamingParser<F>
where
    F: ValueFactory + fmt::Debug,
    F::Value: fmt::Debug,
    F::Array: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingParser")
            .field("factory", &self.factory)
            .field("frames", &self.frames)
            .field("status", &self.status)
            .field("value", &self.value)
            .field("error", &self.error)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl StreamingParser {
    /// Creates a parser that builds [`Value`](crate::Value)s.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self::with_factory(StdFactory, options)
    }
}

impl<F: ValueFactory> StreamingParser<F> {
    /// Creates a parser that builds values through `factory`.
    pub fn with_factory(factory: F, options: ParserOptions) -> Self {
        Self {
            factory,
            frames: FrameStack::new(options.stack_capacity),
            status: Status::Pending,
            value: None,
            error: None,
            index: 0,
            line: 1,
            column: 1,
            buffer_capacity: options.buffer_capacity,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: options.panic_on_error,
        }
    }

    /// Advances the parse with more input and returns how many bytes were
    /// consumed.
    ///
    /// Stops at the first byte that completes a value or causes an error;
    /// bytes after it are not consumed. A closing delimiter that ends a root
    /// level token (`abc)`) is not consumed either: it belongs to whatever
    /// reads next. Returns `0` unless the status is
    /// [`Pending`](Status::Pending).
    pub fn feed(&mut self, input: impl AsRef<[u8]>) -> usize {
        let mut consumed = 0;
        for &byte in input.as_ref() {
            if self.status != Status::Pending {
                break;
            }
            if !self.dispatch(byte) {
                break;
            }
            self.advance(byte);
            consumed += 1;
        }
        consumed
    }

    /// Signals that no more input will arrive.
    ///
    /// A token still being read is completed, so `42` alone reads as a
    /// number. A form or string that is still open is an error. With nothing
    /// started, the parser stays [`Pending`](Status::Pending).
    pub fn finish(&mut self) -> Status {
        if self.status != Status::Pending {
            return self.status;
        }
        if self.frames.last_kind() == Some(FrameKind::Token) {
            if let Err(err) = self.end_token() {
                self.fail(err);
                return self.status;
            }
        }
        if self.status == Status::Pending && self.frames.len() > 1 {
            self.fail(SyntaxError::UnexpectedEndOfInput);
        }
        self.status
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The completed value, when [`Full`](Status::Full).
    #[must_use]
    pub fn value(&self) -> Option<&F::Value> {
        match self.status {
            Status::Full => self.value.as_ref(),
            _ => None,
        }
    }

    /// The error, when [`Error`](Status::Error).
    #[must_use]
    pub fn error(&self) -> Option<&ParserError> {
        match self.status {
            Status::Error => self.error.as_ref(),
            _ => None,
        }
    }

    /// Bytes consumed since creation or the last reset.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based line of the next byte.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the next byte.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of frames on the stack; `1` when only the root is present.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Takes the completed value and resets the parser. Returns `None`, and
    /// leaves the parser untouched, unless the status is
    /// [`Full`](Status::Full).
    pub fn take_value(&mut self) -> Option<F::Value> {
        if self.status != Status::Full {
            return None;
        }
        let value = self.value.take();
        self.reset();
        value
    }

    /// Returns the parser to its initial state: a single root frame, no value,
    /// no error, position zero. The stack keeps its allocation.
    pub fn reset(&mut self) {
        self.frames.reset();
        self.status = Status::Pending;
        self.value = None;
        self.error = None;
        self.index = 0;
        self.line = 1;
        self.column = 1;
    }

    /// Finishes the parse and returns the value or the error.
    ///
    /// # Errors
    ///
    /// The parse error, or [`SyntaxError::UnexpectedEndOfInput`] when no
    /// value was started.
    pub fn into_value(mut self) -> Result<F::Value, ParserError> {
        match (self.finish(), self.value.take(), self.error.take()) {
            (Status::Full, Some(value), _) => Ok(value),
            (Status::Error, _, Some(error)) => Err(error),
            _ => Err(self.error_at(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------------------------------

    /// Offers `byte` to the top frame until some frame consumes it or the
    /// status leaves `Pending`. Returns whether the byte was consumed.
    fn dispatch(&mut self, byte: u8) -> bool {
        while self.status == Status::Pending {
            let Some(kind) = self.frames.last_kind() else {
                self.fail(SyntaxError::StackUnderflow);
                return true;
            };
            #[cfg(debug_assertions)]
            let before = (self.frames.len(), kind);

            let step = match kind {
                FrameKind::Root => self.root_state(byte),
                FrameKind::Form(end_delimiter) => self.form_state(end_delimiter, byte),
                FrameKind::String => self.string_state(byte),
                FrameKind::Token => self.token_state(byte),
            };

            match step {
                Ok(true) => return true,
                Ok(false) => {
                    #[cfg(debug_assertions)]
                    debug_assert_ne!(
                        before,
                        (self.frames.len(), self.frames.last_kind().unwrap_or(kind)),
                        "handler declined {:?} without changing the stack",
                        char::from(byte)
                    );
                    log::trace!(
                        "redispatch {:?} to {:?}",
                        char::from(byte),
                        self.frames.last_kind()
                    );
                }
                Err(err) => {
                    self.fail(err);
                    return true;
                }
            }
        }
        false
    }

    fn root_state(&mut self, byte: u8) -> Result<bool, SyntaxError> {
        if is_closing(byte) {
            return Err(SyntaxError::UnexpectedClosingDelimiter(byte));
        }
        if is_opening(byte) {
            self.push_form(byte);
            return Ok(true);
        }
        if byte == b'"' {
            self.push(Frame::String {
                buffer: Vec::with_capacity(self.buffer_capacity),
                state: StringState::Base,
            });
            return Ok(true);
        }
        if is_whitespace(byte) {
            return Ok(true);
        }
        if is_symbol_char(byte) {
            self.push(Frame::Token {
                buffer: Vec::with_capacity(self.buffer_capacity),
            });
            return Ok(false);
        }
        Err(SyntaxError::UnexpectedCharacter(byte))
    }

    fn form_state(&mut self, end_delimiter: u8, byte: u8) -> Result<bool, SyntaxError> {
        if byte != end_delimiter {
            return self.root_state(byte);
        }
        let Some(Frame::Form { elements, .. }) = self.pop() else {
            return Err(SyntaxError::StackUnderflow);
        };
        let value = self.factory.into_any_array(elements);
        self.append(value)?;
        Ok(true)
    }

    fn string_state(&mut self, byte: u8) -> Result<bool, SyntaxError> {
        let Some(Frame::String { buffer, state }) = self.frames.last_mut() else {
            return Err(SyntaxError::StackUnderflow);
        };
        match (*state, byte) {
            (StringState::Base, b'\\') => *state = StringState::Escape,
            (StringState::Base, b'"') => {
                let text = core::mem::take(buffer);
                self.pop();
                self.append_quoted(&text)?;
            }
            (StringState::Base, _) => buffer.push(byte),
            (StringState::Escape, _) => {
                let decoded =
                    decode_escape(byte).ok_or(SyntaxError::UnknownEscapeSequence(byte))?;
                buffer.push(decoded);
                *state = StringState::Base;
            }
            (StringState::EscapeUnicode | StringState::EscapeHex, _) => {
                return Err(SyntaxError::UnsupportedEscape);
            }
        }
        Ok(true)
    }

    fn token_state(&mut self, byte: u8) -> Result<bool, SyntaxError> {
        if is_whitespace(byte) || is_closing(byte) {
            self.end_token()?;
            return Ok(!is_closing(byte));
        }
        if !is_symbol_char(byte) {
            return Err(SyntaxError::ExpectedSymbolCharacter(byte));
        }
        let Some(Frame::Token { buffer }) = self.frames.last_mut() else {
            return Err(SyntaxError::StackUnderflow);
        };
        buffer.push(byte);
        Ok(true)
    }

    // ------------------------------------------------------------------------------------------------
    // Stack helpers
    // ------------------------------------------------------------------------------------------------

    fn push_form(&mut self, open: u8) {
        let mut elements = self.factory.new_array(self.buffer_capacity);
        let head: &[u8] = match open {
            b'[' => b"array",
            b'{' => b"obj",
            _ => b"",
        };
        if !head.is_empty() {
            let head = self.factory.new_string(head);
            self.factory.push_array(&mut elements, head);
        }
        self.push(Frame::Form {
            end_delimiter: end_delimiter_for(open),
            elements,
        });
    }

    fn push(&mut self, frame: Frame<F::Array>) {
        log::trace!("push {:?} at depth {}", frame.kind(), self.frames.len());
        self.frames.push(frame);
    }

    fn pop(&mut self) -> Option<Frame<F::Array>> {
        let frame = self.frames.pop();
        log::trace!(
            "pop {:?} to depth {}",
            frame.as_ref().map(Frame::kind),
            self.frames.len()
        );
        frame
    }

    /// Appends `(quote text)` for a finished string literal.
    fn append_quoted(&mut self, text: &[u8]) -> Result<(), SyntaxError> {
        let mut quoted = self.factory.new_array(2);
        let head = self.factory.new_string(b"quote");
        self.factory.push_array(&mut quoted, head);
        let text = self.factory.new_string(text);
        self.factory.push_array(&mut quoted, text);
        let value = self.factory.into_any_array(quoted);
        self.append(value)
    }

    /// Pops the top token frame and appends its classified value.
    fn end_token(&mut self) -> Result<(), SyntaxError> {
        let Some(Frame::Token { buffer }) = self.pop() else {
            return Err(SyntaxError::StackUnderflow);
        };
        let value = build_token(&mut self.factory, &buffer)?;
        self.append(value)
    }

    /// Appends a completed value to the top frame. On the root frame this
    /// completes the parse.
    fn append(&mut self, value: F::Value) -> Result<(), SyntaxError> {
        match self.frames.last_mut() {
            None => Err(SyntaxError::StackUnderflow),
            Some(Frame::Root) => {
                log::debug!("value complete at byte {}", self.index);
                self.value = Some(value);
                self.status = Status::Full;
                Ok(())
            }
            Some(Frame::Form { elements, .. }) => {
                self.factory.push_array(elements, value);
                Ok(())
            }
            Some(_) => Err(SyntaxError::MalformedContainerAppend),
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Position & errors
    // ------------------------------------------------------------------------------------------------

    fn advance(&mut self, byte: u8) {
        self.index += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn error_at(&self, source: SyntaxError) -> ParserError {
        ParserError {
            source,
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }

    /// Enters the error state. The stack is left as it is for inspection.
    fn fail(&mut self, source: SyntaxError) {
        let error = self.error_at(source);

        #[cfg(any(test, feature = "fuzzing"))]
        if self.panic_on_error {
            panic!("{error}");
        }

        log::debug!("parse error: {error} (depth {})", self.frames.len());
        self.error = Some(error);
        self.status = Status::Error;
    }
}

#[cfg(test)]
impl<F: ValueFactory> StreamingParser<F> {
    pub(crate) fn frames_mut(&mut self) -> &mut FrameStack<F::Array> {
        &mut self.frames
    }
}
