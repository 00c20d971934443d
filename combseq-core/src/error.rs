//! Rejected-call errors
//!
//! Every error here is raised synchronously, before any lazy sequence
//! production begins. Empty results are never errors: `k > n` without
//! repetition and single-element analyzer input are well-defined empty
//! outcomes and are represented as such by the callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for sequence generation and analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SequenceError {
    /// An arithmetic progression needs a positive step to stay increasing.
    #[error("arithmetic step must be positive, got {0}")]
    NonPositiveStep(i64),

    /// A geometric progression needs an integer ratio of at least 2.
    #[error("geometric ratio must be at least 2, got {0}")]
    RatioTooSmall(i64),

    /// An analyzer input element could not be coerced to a 64-bit integer.
    #[error("element is not representable as a 64-bit integer")]
    Unrepresentable,
}
