//! Ordered selection enumeration
//!
//! Unlike combinations, selection order matters here: both orderings
//! of a pair are distinct tuples. The `Forbidden` policy restricts by
//! value, not position, so choosing an element removes every equal
//! element from the deeper slots. Enumeration runs on an explicit
//! stack of candidate pools, one frame per selection slot.

use crate::{Repetition, State};

/// One selection slot: the candidates still eligible at this depth and
/// the cursor of the currently chosen one.
#[derive(Debug, Clone)]
struct Frame<T> {
    pool: Vec<T>,
    cursor: usize,
}

/// Advance the pool stack until every frame cursor is valid and the
/// target depth is reached, backtracking through exhausted frames.
/// `target` of `None` means "descend until a single-element pool".
fn seek<T, F>(stack: &mut Vec<Frame<T>>, target: Option<usize>, child: F) -> bool
where
    T: Clone,
    F: Fn(&Frame<T>) -> Vec<T>,
{
    loop {
        let depth = stack.len();
        if depth == 0 {
            return false;
        }
        let top = &stack[depth - 1];
        if top.cursor >= top.pool.len() {
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.cursor += 1,
                None => return false,
            }
            continue;
        }
        let at_leaf = match target {
            Some(k) => depth == k,
            None => top.pool.len() == 1,
        };
        if at_leaf {
            return true;
        }
        let next_pool = child(top);
        stack.push(Frame {
            pool: next_pool,
            cursor: 0,
        });
    }
}

fn chosen_values<T: Clone>(stack: &[Frame<T>]) -> Vec<T> {
    stack.iter().map(|f| f.pool[f.cursor].clone()).collect()
}

/// Remove every element equal to the frame's chosen value.
fn without_value<T: Clone + PartialEq>(frame: &Frame<T>) -> Vec<T> {
    let chosen = &frame.pool[frame.cursor];
    frame
        .pool
        .iter()
        .filter(|e| *e != chosen)
        .cloned()
        .collect()
}

/// Remove only the chosen position, keeping equal values elsewhere.
fn without_position<T: Clone>(frame: &Frame<T>) -> Vec<T> {
    let mut rest = frame.pool.clone();
    rest.remove(frame.cursor);
    rest
}

// ============ PartialPermute ============

#[derive(Debug, Clone)]
enum PartialEngine<T> {
    /// `Repetition::Allowed`: every slot ranges over every position
    /// independently, stepped like an odometer.
    Odometer { indices: Vec<usize> },
    /// `Repetition::Forbidden`: per-slot candidate pools with the
    /// chosen value excluded below.
    Pools { stack: Vec<Frame<T>> },
}

/// Lazy enumerator of ordered k-selections.
#[derive(Debug, Clone)]
pub struct PartialPermutations<T> {
    pool: Vec<T>,
    k: usize,
    engine: PartialEngine<T>,
    state: State,
}

/// Enumerate the ordered k-selections of `source` under `repetition`.
///
/// `k == 0` yields exactly one empty tuple regardless of policy.
/// Under `Repetition::Forbidden`, `k > source.len()` yields no tuples,
/// decided up front so enumeration always terminates. Tuples appear in
/// lexicographic order of the positions chosen at each slot.
pub fn partial_permute<T: Clone + PartialEq>(
    source: &[T],
    k: usize,
    repetition: Repetition,
) -> PartialPermutations<T> {
    let n = source.len();
    let impossible = k > 0 && (n == 0 || (repetition == Repetition::Forbidden && k > n));
    let engine = if k == 0 {
        PartialEngine::Odometer { indices: Vec::new() }
    } else {
        match repetition {
            Repetition::Allowed => PartialEngine::Odometer { indices: vec![0; k] },
            Repetition::Forbidden => PartialEngine::Pools {
                stack: vec![Frame {
                    pool: source.to_vec(),
                    cursor: 0,
                }],
            },
        }
    };
    PartialPermutations {
        pool: source.to_vec(),
        k,
        engine,
        state: if impossible { State::Done } else { State::Fresh },
    }
}

fn advance_odometer(indices: &mut [usize], n: usize) -> bool {
    let mut i = indices.len();
    while i > 0 {
        i -= 1;
        if indices[i] + 1 < n {
            indices[i] += 1;
            for j in i + 1..indices.len() {
                indices[j] = 0;
            }
            return true;
        }
    }
    false
}

impl<T: Clone + PartialEq> PartialPermutations<T> {
    fn current(&self) -> Vec<T> {
        match &self.engine {
            PartialEngine::Odometer { indices } => {
                indices.iter().map(|&i| self.pool[i].clone()).collect()
            }
            PartialEngine::Pools { stack } => chosen_values(stack),
        }
    }
}

impl<T: Clone + PartialEq> Iterator for PartialPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                self.state = State::Running;
                if let PartialEngine::Pools { stack } = &mut self.engine {
                    if !seek(stack, Some(self.k), without_value) {
                        self.state = State::Done;
                        return None;
                    }
                }
            }
            State::Running => {
                let n = self.pool.len();
                let advanced = match &mut self.engine {
                    PartialEngine::Odometer { indices } => advance_odometer(indices, n),
                    PartialEngine::Pools { stack } => {
                        if let Some(top) = stack.last_mut() {
                            top.cursor += 1;
                        }
                        seek(stack, Some(self.k), without_value)
                    }
                };
                if !advanced {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(self.current())
    }
}

// ============ Permute ============

/// Lazy enumerator of full orderings of the source.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    repetition: Repetition,
    stack: Vec<Frame<T>>,
    state: State,
}

/// Enumerate the orderings of `source` under `repetition`.
///
/// A single-element source yields exactly one tuple; an empty source
/// yields none. `Repetition::Forbidden` excludes the chosen *value*
/// from deeper slots, so duplicated inputs collapse branches (and can
/// yield tuples shorter than the source, or none at all).
/// `Repetition::Allowed` excludes only the chosen *position*: it
/// matches `Forbidden` exactly when all values are distinct, and keeps
/// duplicate occurrences apart otherwise, always producing n! tuples.
pub fn permute<T: Clone + PartialEq>(source: &[T], repetition: Repetition) -> Permutations<T> {
    Permutations {
        repetition,
        stack: vec![Frame {
            pool: source.to_vec(),
            cursor: 0,
        }],
        state: State::Fresh,
    }
}

impl<T: Clone + PartialEq> Permutations<T> {
    fn seek(&mut self) -> bool {
        match self.repetition {
            Repetition::Forbidden => seek(&mut self.stack, None, without_value),
            Repetition::Allowed => seek(&mut self.stack, None, without_position),
        }
    }
}

impl<T: Clone + PartialEq> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                self.state = State::Running;
                if !self.seek() {
                    self.state = State::Done;
                    return None;
                }
            }
            State::Running => {
                if let Some(top) = self.stack.last_mut() {
                    top.cursor += 1;
                }
                if !self.seek() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(chosen_values(&self.stack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    mod partial_permute_tests {
        use super::*;

        #[test]
        fn test_ordered_pairs_without_repetition() {
            let result: Vec<Vec<i32>> =
                partial_permute(&[1, 2, 3], 2, Repetition::Forbidden).collect();
            assert_eq!(
                result,
                vec![
                    vec![1, 2],
                    vec![1, 3],
                    vec![2, 1],
                    vec![2, 3],
                    vec![3, 1],
                    vec![3, 2],
                ]
            );
        }

        #[test]
        fn test_count_matches_falling_factorial() {
            // P(4, 2) = 12, P(4, 4) = 24, P(4, 0) = 1.
            let source = [1, 2, 3, 4];
            assert_eq!(partial_permute(&source, 2, Repetition::Forbidden).count(), 12);
            assert_eq!(partial_permute(&source, 4, Repetition::Forbidden).count(), 24);
            assert_eq!(partial_permute(&source, 0, Repetition::Forbidden).count(), 1);
        }

        #[test]
        fn test_tuples_are_distinct_orderings() {
            let seen: HashSet<Vec<i32>> =
                partial_permute(&[1, 2, 3, 4], 3, Repetition::Forbidden).collect();
            assert_eq!(seen.len(), 24);
            for tuple in &seen {
                assert_eq!(tuple.len(), 3);
                let unique: HashSet<i32> = tuple.iter().copied().collect();
                assert_eq!(unique.len(), 3);
            }
        }

        #[test]
        fn test_with_repetition_is_full_odometer() {
            let result: Vec<Vec<i32>> = partial_permute(&[1, 2], 2, Repetition::Allowed).collect();
            assert_eq!(
                result,
                vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]
            );
            // n^k even when k exceeds n.
            assert_eq!(partial_permute(&[1, 2], 3, Repetition::Allowed).count(), 8);
        }

        #[test]
        fn test_k_zero_yields_one_empty_tuple() {
            for policy in [Repetition::Allowed, Repetition::Forbidden] {
                let result: Vec<Vec<i32>> = partial_permute(&[1, 2], 0, policy).collect();
                assert_eq!(result, vec![Vec::<i32>::new()]);
            }
        }

        #[test]
        fn test_k_beyond_source_is_empty() {
            assert_eq!(partial_permute(&[1, 2], 3, Repetition::Forbidden).count(), 0);
            assert_eq!(partial_permute::<i32>(&[], 1, Repetition::Allowed).count(), 0);
        }

        #[test]
        fn test_value_exclusion_collapses_duplicates() {
            // Choosing either 1 removes both 1s from the deeper slot.
            let result: Vec<Vec<i32>> =
                partial_permute(&[1, 1, 2], 2, Repetition::Forbidden).collect();
            assert_eq!(
                result,
                vec![vec![1, 2], vec![1, 2], vec![2, 1], vec![2, 1]]
            );
        }

        #[test]
        fn test_reiteration_is_identical() {
            let first = partial_permute(&[1, 2, 3], 2, Repetition::Forbidden);
            let second = first.clone();
            assert_eq!(first.collect::<Vec<_>>(), second.collect::<Vec<_>>());
        }
    }

    mod permute_tests {
        use super::*;

        #[test]
        fn test_all_orderings_of_three() {
            let result: Vec<Vec<i32>> = permute(&[1, 2, 3], Repetition::Forbidden).collect();
            assert_eq!(
                result,
                vec![
                    vec![1, 2, 3],
                    vec![1, 3, 2],
                    vec![2, 1, 3],
                    vec![2, 3, 1],
                    vec![3, 1, 2],
                    vec![3, 2, 1],
                ]
            );
        }

        #[test]
        fn test_distinct_source_counts_factorial() {
            let source = [1, 2, 3, 4];
            let seen: HashSet<Vec<i32>> = permute(&source, Repetition::Forbidden).collect();
            assert_eq!(seen.len(), 24);
            assert_eq!(permute(&source, Repetition::Allowed).count(), 24);
        }

        #[test]
        fn test_policies_agree_on_distinct_values() {
            let a: Vec<Vec<i32>> = permute(&[7, 8, 9], Repetition::Forbidden).collect();
            let b: Vec<Vec<i32>> = permute(&[7, 8, 9], Repetition::Allowed).collect();
            assert_eq!(a, b);
        }

        #[test]
        fn test_position_exclusion_keeps_duplicates_apart() {
            // Positions stay distinct, so n! tuples even with equal values.
            let result: Vec<Vec<i32>> = permute(&[1, 1, 2], Repetition::Allowed).collect();
            assert_eq!(result.len(), 6);
            assert!(result.iter().all(|t| t.len() == 3));
        }

        #[test]
        fn test_value_exclusion_collapses_duplicates() {
            // Choosing a 1 removes both 1s below, so branches shrink.
            let result: Vec<Vec<i32>> = permute(&[1, 1, 2], Repetition::Forbidden).collect();
            assert_eq!(result, vec![vec![1, 2], vec![1, 2]]);
            // An all-equal pair leaves an empty pool mid-descent.
            assert_eq!(permute(&[1, 1], Repetition::Forbidden).count(), 0);
        }

        #[test]
        fn test_single_and_empty_sources() {
            let single: Vec<Vec<i32>> = permute(&[5], Repetition::Forbidden).collect();
            assert_eq!(single, vec![vec![5]]);
            assert_eq!(permute::<i32>(&[], Repetition::Forbidden).count(), 0);
            assert_eq!(permute::<i32>(&[], Repetition::Allowed).count(), 0);
        }

        #[test]
        fn test_production_is_lazy() {
            // Pulling three tuples from a 10-element source must not
            // enumerate the full 10! stream.
            let mut iter = permute(&(0..10).collect::<Vec<_>>(), Repetition::Forbidden);
            assert_eq!(iter.next().unwrap(), (0..10).collect::<Vec<_>>());
            assert_eq!(
                iter.next().unwrap(),
                vec![0, 1, 2, 3, 4, 5, 6, 7, 9, 8]
            );
        }

        #[test]
        fn test_reiteration_is_identical() {
            let first = permute(&[1, 2, 3], Repetition::Allowed);
            let second = first.clone();
            assert_eq!(first.collect::<Vec<_>>(), second.collect::<Vec<_>>());
        }
    }
}
