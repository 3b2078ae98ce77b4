/// Borrowed result of delimiter extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadView<'a> {
    /// Text between the delimiters, or the whole input when not delimited.
    pub payload: &'a str,
    /// True when two distinct delimiter occurrences bounded the payload.
    pub delimited: bool,
}

impl<'a> PayloadView<'a> {
    #[inline]
    pub const fn whole(sequence: &'a str) -> Self {
        Self { payload: sequence, delimited: false }
    }
}
