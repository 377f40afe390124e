//! Error types for CoordSpan
//!
//! The algebra is almost entirely total; the one defined failure is asking
//! for the union of two intervals that neither overlap nor touch.

use crate::core::interval::Interval;
use thiserror::Error;

/// Errors raised by interval operations
#[derive(Debug, Error)]
pub enum IntervalError {
    /// `union` called on operands with a gap between them
    #[error("cannot union non-overlapping, non-adjacent intervals {left} and {right}")]
    DisjointUnion { left: Interval, right: Interval },
}

/// Result type alias for interval operations
pub type IntervalResult<T> = std::result::Result<T, IntervalError>;
