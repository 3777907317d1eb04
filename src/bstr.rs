use bstr::{BStr, ByteSlice};

use crate::View;

impl<'a> View<'a> {
    /// The viewed bytes as a [`BStr`], for its byte string algorithms and
    /// formatting.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        self.as_bytes().as_bstr()
    }
}

impl<'a> From<View<'a>> for &'a BStr {
    #[inline]
    fn from(value: View<'a>) -> Self {
        value.as_bstr()
    }
}

impl<'a> From<&'a BStr> for View<'a> {
    #[inline]
    fn from(value: &'a BStr) -> Self {
        View::new(value)
    }
}

impl PartialEq<BStr> for View<'_> {
    fn eq(&self, other: &BStr) -> bool {
        self.as_bytes() == &**other
    }
}
