//! Zero-copy byte string views.
//!
//! A [`View`] borrows a range of an existing buffer and can be searched,
//! split, trimmed and compared without allocating. Splitting operations cut
//! a piece off a view in place, which makes tokenizing read as a loop:
//!
//! ```
//! use slice_view::View;
//!
//! let mut line = View::from("  name = slice-view  ");
//! line.strip_whitespace();
//! let mut key = line.split_on_first(b'=');
//! key.strip_trailing_whitespace();
//! line.strip_leading_whitespace();
//! assert_eq!(key, "name");
//! assert_eq!(line, "slice-view");
//! ```
#![no_std]

#[cfg(feature = "bstr")]
mod bstr;
#[cfg(feature = "bytes")]
mod bytes;
pub mod error;
mod find;
#[cfg(feature = "std")]
pub mod load;
mod macros;
mod matching;
#[cfg(feature = "serde")]
mod serde;
mod split;
mod trim;
mod utils;
mod view;

pub use crate::{trim::is_whitespace, view::View};
