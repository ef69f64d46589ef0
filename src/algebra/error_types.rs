use thiserror::Error;

/// Error type returned by vector, matrix and banded solver operations.
///
/// All checks are made before any argument is modified, so an operation
/// that returns an error leaves its inputs untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Dimensions are zero or incompatible between operands
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Bounds-checked access outside of the valid range
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// the offending index
        index: usize,
        /// the exclusive upper bound that was violated
        len: usize,
    },
}

impl LinalgError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), LinalgError> {
        if index < len {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange { index, len })
        }
    }
}
