use core::{
    borrow::Borrow,
    cmp,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    ptr::NonNull,
    str::Utf8Error,
};

use crate::{
    error::OutOfRange,
    utils::{debug_bytes, display_bytes, lower_hex, upper_hex},
};

/// A borrowed, non-owning view over a contiguous range of bytes.
///
/// A view never allocates or copies; every piece split from it borrows the
/// same buffer with the same lifetime `'a`.
///
/// The null view (see [`View::null`]) carries no reference at all, while an
/// empty view references a zero-length range of a real buffer. Both are
/// equal to each other for every comparison, hashing and query operation;
/// only [`View::is_null`] tells them apart.
#[derive(Clone, Copy, Default)]
pub struct View<'a> {
    data: Option<&'a [u8]>,
}

impl<'a> View<'a> {
    /// Wraps a whole byte slice.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { data: Some(bytes) }
    }

    /// The null view: no backing reference, length 0.
    #[inline]
    pub const fn null() -> Self {
        Self { data: None }
    }

    /// Wraps a string literal, or any string, by its bytes.
    #[inline]
    pub const fn from_literal(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Wraps a NUL-terminated buffer, stopping before the first NUL.
    ///
    /// A buffer without any NUL is wrapped whole.
    #[inline]
    pub fn from_buffer(buffer: &'a [u8]) -> Self {
        let len = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Self::new(&buffer[..len])
    }

    /// Wraps a C string's bytes, without the terminating NUL.
    #[inline]
    pub fn from_cstr(cstr: &'a CStr) -> Self {
        Self::new(cstr.to_bytes())
    }

    /// Wraps the first `length` bytes of `buffer`.
    ///
    /// Returns [`OutOfRange`] if `length` exceeds the buffer.
    #[inline]
    pub fn from_range(buffer: &'a [u8], length: usize) -> Result<Self, OutOfRange> {
        match buffer.get(..length) {
            Some(bytes) => Ok(Self::new(bytes)),
            None => Err(OutOfRange {
                length,
                available: buffer.len(),
            }),
        }
    }

    /// Wraps `length` bytes starting at `ptr`; a null `ptr` yields the null view.
    ///
    /// # Safety
    ///
    /// When `ptr` is not null, it must be valid for reads of `length` bytes for
    /// the whole lifetime `'a`, and the bytes must not be mutated during it.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const u8, length: usize) -> Self {
        if ptr.is_null() {
            return Self::null();
        }
        Self::new(unsafe { core::slice::from_raw_parts(ptr, length) })
    }

    /// Number of bytes in the view; 0 for the null view.
    #[inline]
    pub const fn len(&self) -> usize {
        match self.data {
            Some(bytes) => bytes.len(),
            None => 0,
        }
    }

    /// Returns `true` for both the null view and empty views.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` only for the null view.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// The viewed bytes, borrowed from the buffer; empty for the null view.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        match self.data {
            Some(bytes) => bytes,
            None => &[],
        }
    }

    /// Pointer to the first byte; dangling (but never dereferenced) for the null view.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        match self.data {
            Some(bytes) => bytes.as_ptr(),
            None => NonNull::<u8>::dangling().as_ptr() as *const u8,
        }
    }

    /// The viewed bytes as UTF-8 text; the null view yields `Ok("")`.
    #[inline]
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Byte equality, with null and empty views equal to each other.
    #[inline]
    pub fn equals(&self, other: &View<'_>) -> bool {
        self.len() == other.len()
            && (core::ptr::eq(self.as_ptr(), other.as_ptr())
                || self.as_bytes() == other.as_bytes())
    }

    /// Piece covering `[start, end)` of this view, sharing its reference.
    ///
    /// Callers guarantee `start <= end <= self.len()`.
    #[inline]
    pub(crate) fn piece(&self, start: usize, end: usize) -> Self {
        Self::new(&self.as_bytes()[start..end])
    }
}

impl Deref for View<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for View<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Borrow<[u8]> for View<'_> {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self
    }
}

impl Hash for View<'_> {
    #[inline]
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_bytes(self, f)
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_bytes(self, f)
    }
}

impl fmt::LowerHex for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        lower_hex(self, f)
    }
}

impl fmt::UpperHex for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        upper_hex(self, f)
    }
}

impl<'b> PartialEq<View<'b>> for View<'_> {
    fn eq(&self, other: &View<'b>) -> bool {
        self.equals(other)
    }
}

impl Eq for View<'_> {}

impl<'b> PartialOrd<View<'b>> for View<'_> {
    fn partial_cmp(&self, other: &View<'b>) -> Option<cmp::Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl Ord for View<'_> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialEq<[u8]> for View<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<'b> PartialEq<&'b [u8]> for View<'_> {
    fn eq(&self, other: &&'b [u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for View<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<'b, const N: usize> PartialEq<&'b [u8; N]> for View<'_> {
    fn eq(&self, other: &&'b [u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for View<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<'b> PartialEq<&'b str> for View<'_> {
    fn eq(&self, other: &&'b str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<View<'_>> for [u8] {
    fn eq(&self, other: &View<'_>) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<View<'_>> for str {
    fn eq(&self, other: &View<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<'a> From<&'a [u8]> for View<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Self::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for View<'a> {
    #[inline]
    fn from(value: &'a [u8; N]) -> Self {
        Self::new(value)
    }
}

impl<'a> From<&'a str> for View<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::from_literal(value)
    }
}

impl<'a> From<&'a CStr> for View<'a> {
    #[inline]
    fn from(value: &'a CStr) -> Self {
        Self::from_cstr(value)
    }
}
