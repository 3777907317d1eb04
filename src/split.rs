//! Destructive splitting: each operation returns the extracted piece and
//! shrinks the view to the remainder. Pieces borrow the same buffer as the
//! view they were cut from.

use crate::View;

impl<'a> View<'a> {
    /// Splits off everything before the first `delim`.
    ///
    /// The delimiter itself is dropped and the view keeps everything after it.
    /// If `delim` does not occur, the whole view is returned as the piece and
    /// the view is left unchanged; loops over this method must therefore stop
    /// on their own condition, not on the view becoming empty.
    /// An empty view yields the null piece.
    ///
    /// ```
    /// # use slice_view::View;
    /// let mut view = View::from("key=value");
    /// assert_eq!(view.split_on_first(b'='), "key");
    /// assert_eq!(view, "value");
    /// ```
    #[must_use = "consider `View::find_first` if you only need the position"]
    pub fn split_on_first(&mut self, delim: u8) -> View<'a> {
        if self.is_empty() {
            return View::null();
        }
        match self.find_first(delim) {
            Some(n) => {
                let piece = self.piece(0, n);
                *self = self.piece(n + 1, self.len());
                piece
            }
            None => *self,
        }
    }

    /// Splits off everything after the last `delim`.
    ///
    /// The delimiter itself is dropped and the view keeps everything before it.
    /// Unlike [`split_on_first`](Self::split_on_first), a missing `delim`
    /// yields the null piece and leaves the view unchanged.
    ///
    /// ```
    /// # use slice_view::View;
    /// let mut view = View::from("archive.tar.gz");
    /// assert_eq!(view.split_on_last(b'.'), "gz");
    /// assert_eq!(view, "archive.tar");
    /// ```
    #[must_use = "consider `View::find_last` if you only need the position"]
    pub fn split_on_last(&mut self, delim: u8) -> View<'a> {
        if self.is_empty() {
            return View::null();
        }
        match self.find_last(delim) {
            Some(n) => {
                let piece = self.piece(n + 1, self.len());
                *self = self.piece(0, n);
                piece
            }
            None => View::null(),
        }
    }

    /// Removes up to `count` bytes from the front and returns them.
    ///
    /// A zero `count` or an empty view yields the null piece. A `count`
    /// reaching the view length consumes it whole, leaving the null view.
    #[must_use = "consider `View::skip_first` if you don't need the piece"]
    pub fn take_first(&mut self, count: usize) -> View<'a> {
        if count == 0 || self.is_empty() {
            return View::null();
        }
        if count >= self.len() {
            return core::mem::take(self);
        }
        let piece = self.piece(0, count);
        *self = self.piece(count, self.len());
        piece
    }

    /// Removes up to `count` bytes from the back and returns them.
    ///
    /// Same policy as [`take_first`](Self::take_first).
    #[must_use = "consider `View::skip_last` if you don't need the piece"]
    pub fn take_last(&mut self, count: usize) -> View<'a> {
        if count == 0 || self.is_empty() {
            return View::null();
        }
        if count >= self.len() {
            return core::mem::take(self);
        }
        let at = self.len() - count;
        let piece = self.piece(at, self.len());
        *self = self.piece(0, at);
        piece
    }

    /// Drops up to `count` bytes from the front.
    #[inline]
    pub fn skip_first(&mut self, count: usize) {
        let _ = self.take_first(count);
    }

    /// Drops up to `count` bytes from the back.
    #[inline]
    pub fn skip_last(&mut self, count: usize) {
        let _ = self.take_last(count);
    }
}
