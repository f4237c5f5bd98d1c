/// Configuration options for the streaming reader.
///
/// These options size the reader's internal storage up front. They never
/// change what a given input parses to.
///
/// # Examples
///
/// ```rust
/// use readform::{ParserOptions, StreamingParser};
///
/// let parser = StreamingParser::new(ParserOptions {
///     stack_capacity: 64,
///     ..Default::default()
/// });
/// assert_eq!(parser.depth(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Initial capacity of the frame stack. The stack doubles whenever a
    /// push finds it full.
    ///
    /// # Default
    ///
    /// `10`
    pub stack_capacity: usize,

    /// Initial capacity of each token or string buffer and of each form's
    /// element array.
    ///
    /// # Default
    ///
    /// `10`
    pub buffer_capacity: usize,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            stack_capacity: 10,
            buffer_capacity: 10,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
