//! Sequence pattern analysis
//!
//! Classification is a set of independent tests, not a decision tree:
//! the result is a bitset and several bits may be present at once.

use combseq_core::{Numeric, SequenceError, SequenceKind};

use crate::generators::{fibonacci, triangular};

/// Classify a finite sequence against the known pattern families.
///
/// Elements are coerced to `i64` through [`Numeric`] up front; a value
/// with no exact representation rejects the whole call with
/// [`SequenceError::Unrepresentable`] before any analysis happens.
/// Fewer than two elements can never witness a pattern and classify as
/// `SequenceKind::empty()`.
///
/// The reference windows for the Fibonacci and triangular tests come
/// from the first and last elements, not the extrema: the input is
/// trusted to be ordered in the pattern's growth direction, and a
/// misordered input simply fails those comparisons.
///
/// Known limitation, kept deliberately: the geometric test checks that
/// all successive moduli agree, which is only a proxy for a constant
/// ratio. It can set `GEOMETRIC` on sequences that are not geometric
/// (any constant-step run whose moduli stabilize, for instance).
/// Replacing it with a true ratio test would change classification
/// semantics, so the proxy stays.
pub fn find_sequence_kind<T: Numeric>(source: &[T]) -> Result<SequenceKind, SequenceError> {
    let mut values = Vec::with_capacity(source.len());
    for item in source {
        match item.to_i64() {
            Some(value) => values.push(value),
            None => return Err(SequenceError::Unrepresentable),
        }
    }

    let mut kind = SequenceKind::empty();
    if values.len() < 2 {
        return Ok(kind);
    }

    let min = values[0];
    let max = values[values.len() - 1];

    if fibonacci(min, max).eq(values.iter().copied()) {
        kind |= SequenceKind::FIBONACCI;
    }
    if triangular(min, max).eq(values.iter().copied()) {
        kind |= SequenceKind::TRIANGULAR;
    }

    // Differences widen to i128 so they cannot overflow; moduli stay in
    // i64 and a zero divisor disables that test for this input.
    let mut differences = Vec::with_capacity(values.len() - 1);
    let mut moduli = Some(Vec::with_capacity(values.len() - 1));
    for pair in values.windows(2) {
        differences.push(pair[1] as i128 - pair[0] as i128);
        if let Some(list) = moduli.as_mut() {
            match pair[1].checked_rem(pair[0]) {
                Some(m) => list.push(m),
                None => {
                    tracing::debug!(divisor = pair[0], "successive-modulo test disabled");
                    moduli = None;
                }
            }
        }
    }

    if differences.iter().all(|d| *d == differences[0]) {
        kind |= SequenceKind::ARITHMETIC;
    }
    if let Some(list) = moduli {
        if list.iter().all(|m| *m == list[0]) {
            kind |= SequenceKind::GEOMETRIC;
        }
    }

    Ok(kind)
}
