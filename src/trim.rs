use crate::View;

/// Returns `true` for space, tab, carriage return and line feed.
///
/// Other ASCII whitespace, such as form feed, is not included.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

impl View<'_> {
    /// Strips leading whitespace and returns how many bytes were removed.
    ///
    /// ```
    /// # use slice_view::View;
    /// let mut view = View::from(" \nasdf");
    /// assert_eq!(view.strip_leading_whitespace(), 2);
    /// assert_eq!(view, "asdf");
    /// ```
    pub fn strip_leading_whitespace(&mut self) -> usize {
        let count = self.count_leading_matching(is_whitespace);
        self.skip_first(count);
        count
    }

    /// Strips trailing whitespace and returns how many bytes were removed.
    pub fn strip_trailing_whitespace(&mut self) -> usize {
        let count = self.count_trailing_matching(is_whitespace);
        self.skip_last(count);
        count
    }

    /// Strips whitespace from both ends and returns how many bytes were removed.
    pub fn strip_whitespace(&mut self) -> usize {
        self.strip_leading_whitespace() + self.strip_trailing_whitespace()
    }
}
