//! Combseq Core - Fundamental types
//!
//! This crate provides the types shared by the combseq workspace:
//! - `Numeric`: coercion between element types and 64-bit integers
//! - `SequenceKind`: multi-label classification of numeric sequences
//! - `SequenceError`: rejected-call errors raised before lazy production

mod error;
mod kind;
mod numeric;

pub use error::SequenceError;
pub use kind::SequenceKind;
pub use numeric::Numeric;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Numeric, SequenceError, SequenceKind};
}
