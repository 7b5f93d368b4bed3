//! Error types for the reorder engine.
//!
//! The engine has very few failure modes on purpose: out-of-range geometry is
//! clamped, unknown geometry is treated as zero, and redundant gesture signals
//! are absorbed. What remains is a contract violation on the order store.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the host application
//!   - [`OrderError`] - Order store given an index outside `[0, len)` or a
//!     duplicated initial row
//!
//! # Recovery Strategy
//!
//! An [`OrderError`] means the controller computed an index it should never
//! produce. It is fatal: the host logs it, restores the terminal and exits.

use super::identifiers::RowId;
use thiserror::Error;

/// Top-level application error.
///
/// Domain errors convert into `AppError` via `From`, so host code can use `?`
/// without manual mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// The order store rejected a move.
    ///
    /// **Recovery**: none. This is a programming error in index computation.
    #[error("Order store contract violated: {0}")]
    Order(#[from] OrderError),
}

/// Errors raised by [`crate::model::order`] operations.
///
/// # Examples
///
/// ```
/// use rowdrag::model::error::OrderError;
///
/// let err = OrderError::IndexOutOfRange { index: 5, len: 3 };
/// assert!(err.to_string().contains("5"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// `from` or `to` was outside `[0, len)`.
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// The initial order contained the same row twice.
    #[error("Row {row} appears more than once in the initial order")]
    DuplicateRow {
        /// The repeated row id.
        row: RowId,
    },
}
