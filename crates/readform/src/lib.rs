//! A streaming, incremental reader for a Lisp-family textual syntax.
//!
//! Bytes go in through [`StreamingParser::feed`], in as many pieces as the
//! caller likes; one complete value comes out. Values are built through a
//! [`ValueFactory`], so a host runtime can have the reader produce its own
//! representation. The default [`StdFactory`] builds [`Value`]s.
//!
//! ```rust
//! use readform::{ParserOptions, Status, StreamingParser, Value, list};
//!
//! let mut parser = StreamingParser::new(ParserOptions::default());
//! parser.feed("{name \"ada\"");
//! parser.feed(" born 1815}");
//! assert_eq!(parser.status(), Status::Full);
//! assert_eq!(
//!     parser.value(),
//!     Some(&list!["obj", "name", list!["quote", "ada"], "born", 1815.0])
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod factory;
mod parser;
mod value;


pub use factory::{StdFactory, ValueFactory};
pub use parser::{ParserError, ParserOptions, Status, StreamingParser, SyntaxError};
pub use value::{Array, Value};

#[doc(hidden)]
pub use alloc::vec;

/// Reads the first value in `input`.
///
/// The input is treated as complete, so a trailing token needs no
/// terminator. Bytes after the first value are ignored.
///
/// # Errors
///
/// The first syntax error, or [`SyntaxError::UnexpectedEndOfInput`] when the
/// input ends inside a form or string or holds no value at all.
///
/// # Examples
///
/// ```rust
/// use readform::{Value, read_value};
///
/// assert_eq!(read_value("-3.5e2"), Ok(Value::Number(-350.0)));
/// assert!(read_value("(1]").is_err());
/// ```
pub fn read_value(input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
    let mut parser = StreamingParser::new(ParserOptions::default());
    parser.feed(input);
    parser.into_value()
}

/// Macro to build a [`Value::Array`] from a heterogeneous list of anything
/// convertible into a [`Value`].
///
/// ```rust
/// # use readform::{list, Value};
/// let v = list!["array", 1.0, true];
/// assert_eq!(
///     v,
///     Value::Array(vec![
///         Value::from("array"),
///         Value::Number(1.0),
///         Value::Boolean(true)
///     ])
/// );
/// ```
#[macro_export]
macro_rules! list {
    ( $( $elem:expr ),* $(,)? ) => {
        $crate::Value::Array($crate::vec![$($crate::Value::from($elem)),*])
    };
}
