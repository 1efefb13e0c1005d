//! Error types.

use core::fmt;

/// An error occurred when constructing a path or a set of URI components.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathError {
    /// A path segment was absent.
    NullSegment {
        /// The position of the absent segment in the input.
        index: usize,
    },
    /// An authority is present but the path is neither empty nor absolute.
    ///
    /// This forbids a URI such as `scheme://host` followed by a path
    /// that does not start with `'/'`.
    AuthorityRequiresAbsolutePath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullSegment { index } => {
                write!(f, "path contains a null segment at index {index}")
            }
            Self::AuthorityRequiresAbsolutePath => {
                f.write_str("URI with authority must have an empty or absolute path")
            }
        }
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for PathError {}
