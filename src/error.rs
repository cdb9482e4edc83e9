//! Errors returned by the checked tree operations.

/// Errors that can occur when operating on a [`Tree`](crate::Tree) whose values are only
/// partially ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Two values had no defined order (for example a NaN float). The operation was abandoned
    /// before the tree was modified.
    #[error("values have no defined order")]
    Incomparable,
}

/// Result alias for the checked tree operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
