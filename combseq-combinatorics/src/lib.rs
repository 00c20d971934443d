//! Combseq Combinatorics - lazy selection enumeration
//!
//! This crate enumerates selections from a finite source slice:
//! - `combine`: unordered k-selections in canonical source order
//! - `partial_permute`: ordered k-selections (order distinguishes tuples)
//! - `permute`: full orderings of the whole source
//!
//! Every operation returns a plain `Iterator` that does bounded work
//! per `next()` and stops producing the moment the consumer stops
//! pulling. Enumeration is driven by an explicit index or choice
//! stack rather than recursion, so deep inputs cannot exhaust the call
//! stack. All enumerators are `Clone`: a clone taken before iteration
//! replays the identical tuple stream.

mod combine;
mod permute;

pub use combine::{combine, Combinations};
pub use permute::{partial_permute, permute, PartialPermutations, Permutations};

use serde::{Deserialize, Serialize};

/// Whether an element may be selected more than once within one tuple.
///
/// The exclusion key differs per operation and is part of each
/// operation's contract:
/// - `combine` restricts by *position*: `Forbidden` admits only
///   strictly later positions at deeper slots, `Allowed` admits the
///   same position again.
/// - `partial_permute` restricts by *value*: `Forbidden` removes every
///   element equal to the chosen one from deeper slots.
/// - `permute` uses value exclusion under `Forbidden` and position
///   exclusion under `Allowed`; the two agree when all values are
///   distinct and differ only on duplicated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repetition {
    /// An element (or position) may recur across the selection slots.
    Allowed,
    /// Each element (or position) is used at most once per tuple.
    Forbidden,
}

/// Shared enumerator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// The first tuple has not been emitted yet.
    Fresh,
    /// At least one tuple was emitted; internal cursors point at it.
    Running,
    /// Enumeration is complete (possibly before producing anything).
    Done,
}
