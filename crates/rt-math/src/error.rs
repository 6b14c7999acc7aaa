//! Error types for kernel math operations.
//!
//! Only two things can fail in the kernel: combining matrices of mismatched
//! order, and inverting a singular matrix. Geometric queries (intersection,
//! hit selection, normals) are total and never return errors - a miss is a
//! value, not a failure.

use thiserror::Error;

/// Result type alias using [`MathError`] as the error type.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors produced by matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Matrix operands have incompatible orders.
    ///
    /// Returned by the checked multiply operations instead of reading
    /// elements out of bounds.
    #[error("matrix order mismatch: expected {expected}, got {got}")]
    InvalidDimension {
        /// Order required by the operation
        expected: usize,
        /// Order actually supplied
        got: usize,
    },

    /// The matrix has a zero determinant and cannot be inverted.
    ///
    /// The determinant is compared to zero **exactly**, not within epsilon;
    /// see [`Matrix::is_invertible`](crate::Matrix::is_invertible).
    #[error("matrix is not invertible (zero determinant)")]
    NotInvertible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MathError::InvalidDimension {
            expected: 4,
            got: 3,
        };
        assert!(err.to_string().contains("expected 4"));
        assert!(err.to_string().contains("got 3"));
        assert!(MathError::NotInvertible.to_string().contains("invertible"));
    }
}
