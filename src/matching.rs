use crate::View;

impl View<'_> {
    /// Returns `true` if the view begins with `prefix`.
    ///
    /// An empty or null prefix always matches, even against an empty view.
    ///
    /// ```
    /// # use slice_view::View;
    /// let view = View::from("#include <stdio.h>");
    /// assert!(view.starts_with("#include"));
    /// assert!(view.starts_with(View::null()));
    /// ```
    #[inline]
    pub fn starts_with<'b>(&self, prefix: impl Into<View<'b>>) -> bool {
        let prefix = prefix.into();
        let bytes = self.as_bytes();
        prefix.len() <= bytes.len() && bytes[..prefix.len()] == *prefix.as_bytes()
    }

    /// Returns `true` if the view ends with `suffix`.
    ///
    /// An empty or null suffix always matches, even against an empty view.
    #[inline]
    pub fn ends_with<'b>(&self, suffix: impl Into<View<'b>>) -> bool {
        let suffix = suffix.into();
        let bytes = self.as_bytes();
        suffix.len() <= bytes.len() && bytes[bytes.len() - suffix.len()..] == *suffix.as_bytes()
    }

    /// Length of the longest prefix whose bytes all satisfy `predicate`.
    ///
    /// The predicate is called left to right and not after the first failure.
    #[inline]
    pub fn count_leading_matching(&self, predicate: impl Fn(u8) -> bool) -> usize {
        self.find_first_matching(|b| !predicate(b)).unwrap_or(self.len())
    }

    /// Length of the longest suffix whose bytes all satisfy `predicate`.
    ///
    /// The predicate is called right to left and not after the first failure.
    #[inline]
    pub fn count_trailing_matching(&self, predicate: impl Fn(u8) -> bool) -> usize {
        match self.find_last_matching(|b| !predicate(b)) {
            Some(i) => self.len() - i - 1,
            None => self.len(),
        }
    }
}
