use alloc::vec::Vec;

use crate::value::Value;

/// Abstraction over value construction.
///
/// The reader never inspects the values it builds; it only creates them and
/// appends them to arrays. A host runtime implements this trait to have the
/// reader produce its own value representation directly.
#[allow(clippy::wrong_self_convention)]
pub trait ValueFactory {
    /// Any value the reader can produce.
    type Value;
    /// A growable sequence of values, accumulated while a form is open.
    type Array;

    /// The `nil` keyword.
    fn new_nil(&mut self) -> Self::Value;
    /// `true` or `false`.
    fn new_bool(&mut self, b: bool) -> Self::Value;
    /// A numeric literal.
    fn new_number(&mut self, n: f64) -> Self::Value;
    /// A symbol or string from raw bytes. Also used for the synthetic
    /// `array`, `obj` and `quote` head symbols.
    fn new_string(&mut self, bytes: &[u8]) -> Self::Value;
    /// An empty array with room for at least `capacity` elements.
    fn new_array(&mut self, capacity: usize) -> Self::Array;

    /// Append `val` to the end of `array`.
    fn push_array(&mut self, array: &mut Self::Array, val: Self::Value);

    /// Wrap a finished array as a value.
    fn into_any_array(&mut self, array: Self::Array) -> Self::Value;
}

/// Factory producing [`Value`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFactory;

impl ValueFactory for StdFactory {
    type Value = Value;
    type Array = Vec<Value>;

    #[inline]
    fn new_nil(&mut self) -> Self::Value {
        Value::Nil
    }

    #[inline]
    fn new_bool(&mut self, b: bool) -> Self::Value {
        Value::Boolean(b)
    }

    #[inline]
    fn new_number(&mut self, n: f64) -> Self::Value {
        Value::Number(n)
    }

    #[inline]
    fn new_string(&mut self, bytes: &[u8]) -> Self::Value {
        Value::String(bytes.into())
    }

    #[inline]
    fn new_array(&mut self, capacity: usize) -> Self::Array {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn push_array(&mut self, array: &mut Self::Array, val: Self::Value) {
        array.push(val);
    }

    #[inline]
    fn into_any_array(&mut self, array: Self::Array) -> Self::Value {
        Value::Array(array)
    }
}
