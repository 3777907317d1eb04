use crate::View;

impl View<'_> {
    /// Index of the leftmost `byte`, scanning left to right.
    ///
    /// ```
    /// # use slice_view::View;
    /// let view = View::from("testing");
    /// assert_eq!(view.find_first(b't'), Some(0));
    /// assert_eq!(view.find_first(b'z'), None);
    /// ```
    #[inline]
    pub fn find_first(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == byte)
    }

    /// Index of the rightmost `byte`, scanning right to left.
    ///
    /// ```
    /// # use slice_view::View;
    /// let view = View::from("testing");
    /// assert_eq!(view.find_last(b't'), Some(3));
    /// ```
    #[inline]
    pub fn find_last(&self, byte: u8) -> Option<usize> {
        // `rposition` never decrements past index 0, empty views included
        self.as_bytes().iter().rposition(|&b| b == byte)
    }

    /// Index of the leftmost byte satisfying `predicate`.
    ///
    /// The predicate is called at most once per byte, in index order, and
    /// stops being called at the first match.
    #[inline]
    pub fn find_first_matching(&self, predicate: impl Fn(u8) -> bool) -> Option<usize> {
        self.as_bytes().iter().position(|&b| predicate(b))
    }

    /// Index of the rightmost byte satisfying `predicate`, scanning right to left.
    #[inline]
    pub fn find_last_matching(&self, predicate: impl Fn(u8) -> bool) -> Option<usize> {
        self.as_bytes().iter().rposition(|&b| predicate(b))
    }
}
