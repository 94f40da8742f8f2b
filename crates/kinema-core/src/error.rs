//! Error types for kinema operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the few failure modes a fixed-size linear
//! algebra library has:
//! - Inverting a singular matrix
//! - Checked element access outside the matrix bounds
//! - Building a view basis from parallel vectors
//! - Parsing numeric input (command-line front end)
//!
//! Degenerate division and near-zero normalization are *not* errors: the
//! vector types resolve them to the zero vector.
//!
//! # Usage
//!
//! ```rust
//! use kinema_core::{Error, Result};
//!
//! fn checked_row(row: usize) -> Result<usize> {
//!     if row >= 4 {
//!         return Err(Error::index_out_of_range(row, 0, 4));
//!     }
//!     Ok(row)
//! }
//!
//! assert!(checked_row(7).unwrap_err().is_bounds_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kinema operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Matrix determinant magnitude is below the singular threshold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_core::Error;
    ///
    /// let err = Error::singular(0.0);
    /// assert!(err.is_singular());
    /// assert!(err.to_string().contains("singular"));
    /// ```
    #[error("matrix is singular (determinant {determinant:e})")]
    SingularMatrix {
        /// Determinant that failed the threshold test
        determinant: f32,
    },

    /// Row or column index is outside `0..size`.
    #[error("element ({row}, {col}) out of range for {size}x{size} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix dimension
        size: usize,
    },

    /// A basis could not be built because its input vectors are degenerate.
    ///
    /// Raised when the up vector of a view matrix is parallel to the view
    /// direction, or the eye coincides with the target.
    #[error("degenerate basis: {what}")]
    DegenerateBasis {
        /// Which input collapsed
        what: String,
    },

    /// Numeric text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    ///
    /// # Arguments
    ///
    /// * `row` - Row that was accessed
    /// * `col` - Column that was accessed
    /// * `size` - Matrix dimension (3 or 4)
    #[inline]
    pub fn index_out_of_range(row: usize, col: usize, size: usize) -> Self {
        Self::IndexOutOfRange { row, col, size }
    }

    /// Creates an [`Error::DegenerateBasis`] error.
    #[inline]
    pub fn degenerate_basis(what: impl Into<String>) -> Self {
        Self::DegenerateBasis { what: what.into() }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
