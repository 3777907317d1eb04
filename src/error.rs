//! The errors.

use core::fmt;

/// A view was requested over more bytes than its buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested length.
    pub length: usize,
    /// The length of the buffer.
    pub available: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "view length {} exceeds buffer length {}",
            self.length, self.available
        )
    }
}

#[cfg(feature = "std")]
pub use load_error::LoadError;

#[cfg(feature = "std")]
mod load_error {
    extern crate std;

    use core::fmt;
    use std::{io, path::PathBuf};

    /// A file could not be loaded into a buffer.
    #[derive(Debug)]
    pub struct LoadError {
        /// The file that failed to load.
        pub path: PathBuf,
        /// The underlying I/O failure.
        pub source: io::Error,
    }

    impl fmt::Display for LoadError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "could not load {}: {}", self.path.display(), self.source)
        }
    }

    impl std::error::Error for LoadError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.source)
        }
    }
}

#[cfg(feature = "std")]
const _: () = {
    extern crate std;
    impl std::error::Error for OutOfRange {}
};
