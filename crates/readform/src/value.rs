//! Reader value types.
//!
//! This module defines the [`Value`] enum, the owned value model produced by
//! the default [`StdFactory`](crate::StdFactory). Symbols and string literals
//! share the [`Value::String`] variant; a string literal is distinguished by
//! the `(quote "...")` form the reader wraps it in.
use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, BString};

/// An ordered sequence of values.
pub type Array = Vec<Value>;

/// A value read from source text.
///
/// - Nil
/// - Boolean
/// - Number
/// - String (symbols and string literal contents, as raw bytes)
/// - Array (every delimited form)
///
/// # Examples
///
/// ```
/// use readform::Value;
///
/// let v = Value::Array(vec![Value::from("array"), Value::from(1.0)]);
/// assert_eq!(v.to_string(), "(array 1)");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The `nil` keyword.
    #[default]
    Nil,
    /// `true` or `false`.
    Boolean(bool),
    /// Any numeric literal; all numbers are double precision.
    Number(f64),
    /// A symbol, or the contents of a string literal.
    String(BString),
    /// A `(...)`, `[...]` or `{...}` form.
    Array(Array),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Nil`].
    ///
    /// [`Nil`]: Value::Nil
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns the number, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw bytes, if this is a [`String`](Value::String).
    ///
    /// # Examples
    ///
    /// ```
    /// use readform::Value;
    ///
    /// assert_eq!(Value::from("obj").as_bytes(), Some(&b"obj"[..]));
    /// assert_eq!(Value::Nil.as_bytes(), None);
    /// ```
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    /// Returns the elements, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            // Lossy: invalid UTF-8 is shown as U+FFFD.
            Value::String(s) => write!(f, "{}", BStr::new(s)),
            Value::Array(arr) => {
                f.write_str("(")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(" ")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::Value;

    #[test]
    fn display_nested() {
        let v = Value::Array(vec![
            Value::from("quote"),
            Value::Array(vec![Value::Nil, Value::from(true), Value::from(-350.0)]),
            Value::Array(vec![]),
        ]);
        assert_eq!(v.to_string(), "(quote (nil true -350) ())");
    }

    #[test]
    fn display_fraction() {
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn accessors() {
        let v = Value::Array(vec![Value::from(2.0)]);
        assert!(v.is_array());
        assert_eq!(v.as_array().and_then(|a| a[0].as_f64()), Some(2.0));
        assert!(Value::default().is_nil());
        assert!(!Value::from("x").is_number());
    }
}
