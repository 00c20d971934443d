//! k-combination enumeration
//!
//! A combination is an unordered selection reported in one canonical
//! form: its elements appear in source order. Enumeration therefore
//! works over position indices kept monotonic across the k slots,
//! which is exactly what prevents the same unordered selection from
//! being produced twice.

use crate::{Repetition, State};

/// Lazy enumerator of k-combinations in position-lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    repetition: Repetition,
    state: State,
}

/// Enumerate the k-combinations of `source` under `repetition`.
///
/// `k == 0` yields exactly one empty tuple regardless of policy.
/// `k > source.len()` under `Repetition::Forbidden` yields no tuples;
/// this is decided up front, never by exhaustive search. Output order
/// is deterministic: lexicographic over the selected position indices
/// (strictly increasing under `Forbidden`, non-decreasing under
/// `Allowed`).
pub fn combine<T: Clone>(source: &[T], k: usize, repetition: Repetition) -> Combinations<T> {
    let n = source.len();
    let impossible = match repetition {
        Repetition::Forbidden => k > n,
        Repetition::Allowed => k > 0 && n == 0,
    };
    let indices = match repetition {
        Repetition::Forbidden => (0..k).collect(),
        Repetition::Allowed => vec![0; k],
    };
    Combinations {
        pool: source.to_vec(),
        indices,
        repetition,
        state: if impossible { State::Done } else { State::Fresh },
    }
}

impl<T: Clone> Combinations<T> {
    /// Step the index vector to the next valid combination.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.indices.len();
        match self.repetition {
            Repetition::Forbidden => {
                // Rightmost index with headroom moves up; the tail is
                // reset to the consecutive run after it.
                let mut i = k;
                while i > 0 {
                    i -= 1;
                    if self.indices[i] < n - k + i {
                        self.indices[i] += 1;
                        for j in i + 1..k {
                            self.indices[j] = self.indices[j - 1] + 1;
                        }
                        return true;
                    }
                }
                false
            }
            Repetition::Allowed => {
                // Rightmost index below n-1 moves up; the tail is reset
                // to the same position, keeping indices non-decreasing.
                let mut i = k;
                while i > 0 {
                    i -= 1;
                    if self.indices[i] + 1 < n {
                        let next = self.indices[i] + 1;
                        for j in i..k {
                            self.indices[j] = next;
                        }
                        return true;
                    }
                }
                false
            }
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            State::Done => return None,
            State::Fresh => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(self.current())
    }
}
