//! Session error type.

use core::fmt;

/// Error produced while turning pages.
///
/// Boundary repair never surfaces as an error (malformed chunk edges are
/// recovered locally), and end-of-document is a normal
/// [`PageTurn`](crate::PageTurn), not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError<E> {
    /// The byte-range loader failed for an in-range read.
    Source(E),
    /// A non-empty chunk produced a zero-length fit at `offset`.
    ///
    /// Unreachable under the fitter contract (an empty page always fits);
    /// surfaced instead of silently corrupting the cursor so the defect can
    /// be diagnosed.
    Unfittable {
        /// Absolute document offset of the failed page load.
        offset: u64,
    },
}

impl<E: fmt::Display> fmt::Display for SessionError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Source(err) => write!(f, "byte-range source error: {}", err),
            SessionError::Unfittable { offset } => {
                write!(f, "non-empty page at offset {} failed to fit", offset)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for SessionError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Source(err) => Some(err),
            SessionError::Unfittable { .. } => None,
        }
    }
}
