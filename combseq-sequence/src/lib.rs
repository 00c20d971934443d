//! Combseq Sequence - bounded numeric generators and pattern analysis
//!
//! Five integer progression families, each produced lazily within an
//! inclusive `[min, max]` window, plus the analyzer that classifies a
//! finite sequence against those families.

mod analysis;
mod generators;

pub use analysis::find_sequence_kind;
pub use generators::{
    arithmetic, fibonacci, geometric, primes, triangular, Arithmetic, Fibonacci, Geometric,
    Primes, Triangular,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{arithmetic, fibonacci, find_sequence_kind, geometric, primes, triangular};
    pub use combseq_core::{Numeric, SequenceError, SequenceKind};
}
