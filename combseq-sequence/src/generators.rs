//! Bounded progression generators
//!
//! Each generator produces a strictly increasing stream of `i64`
//! candidates, skipping those below `min` and terminating at the first
//! candidate above `max`. The window is inclusive on both ends; an
//! inverted window (`min > max`) simply produces nothing, which is
//! what lets the analyzer instantiate references from arbitrary
//! endpoints. Overflow of the underlying recurrence terminates the
//! stream instead of wrapping.
//!
//! Four families can in principle run unbounded and only ever hold a
//! constant amount of state. Primes are the asymmetric fifth: a sieve
//! needs the full `max` bound up front and allocates proportional to
//! it, so an excessive `max` is the caller's resource contract.

use combseq_core::SequenceError;

// ============ Arithmetic ============

/// Constant-step progression starting at its `min` bound.
#[derive(Debug, Clone)]
pub struct Arithmetic {
    current: Option<i64>,
    step: i64,
    max: i64,
}

/// Arithmetic progression `min, min + step, min + 2*step, …` up to `max`.
///
/// The step must be positive to keep the stream increasing; zero or
/// negative steps are rejected before anything is produced.
pub fn arithmetic(step: i64, min: i64, max: i64) -> Result<Arithmetic, SequenceError> {
    if step <= 0 {
        return Err(SequenceError::NonPositiveStep(step));
    }
    Ok(Arithmetic {
        current: Some(min),
        step,
        max,
    })
}

impl Iterator for Arithmetic {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.current?;
        if value > self.max {
            self.current = None;
            return None;
        }
        self.current = value.checked_add(self.step);
        Some(value)
    }
}

// ============ Geometric ============

/// Constant-ratio progression over the powers of `ratio`.
#[derive(Debug, Clone)]
pub struct Geometric {
    current: Option<i64>,
    ratio: i64,
    min: i64,
    max: i64,
}

/// Geometric progression `1, ratio, ratio², …` clipped to `[min, max]`.
///
/// Candidates below `min` are skipped, not shifted: the stream always
/// grows from 1 by integer multiplication. A ratio below 2 cannot grow
/// and is rejected.
pub fn geometric(ratio: i64, min: i64, max: i64) -> Result<Geometric, SequenceError> {
    if ratio < 2 {
        return Err(SequenceError::RatioTooSmall(ratio));
    }
    Ok(Geometric {
        current: Some(1),
        ratio,
        min,
        max,
    })
}

impl Iterator for Geometric {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            let value = self.current?;
            if value > self.max {
                self.current = None;
                return None;
            }
            self.current = value.checked_mul(self.ratio);
            if value < self.min {
                continue;
            }
            return Some(value);
        }
    }
}

// ============ Fibonacci ============

/// Pairwise-sum progression seeded `(-1, 1)`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    prev: i64,
    next: i64,
    min: i64,
    max: i64,
    done: bool,
}

/// Fibonacci numbers within `[min, max]`.
///
/// The `(-1, 1)` seed makes the first candidate 0, so `min >= 1` gives
/// the classic `1, 1, 2, 3, 5, 8, …`. A sum that leaves the `i64`
/// range ends the series; it never wraps.
pub fn fibonacci(min: i64, max: i64) -> Fibonacci {
    Fibonacci {
        prev: -1,
        next: 1,
        min,
        max,
        done: false,
    }
}

impl Iterator for Fibonacci {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        loop {
            let sum = match self.prev.checked_add(self.next) {
                Some(sum) => sum,
                None => {
                    self.done = true;
                    return None;
                }
            };
            if sum > self.max {
                self.done = true;
                return None;
            }
            self.prev = self.next;
            self.next = sum;
            if sum < self.min {
                continue;
            }
            return Some(sum);
        }
    }
}

// ============ Triangular ============

/// Closed-form progression `i * (i + 1) / 2` for `i = 1, 2, …`.
#[derive(Debug, Clone)]
pub struct Triangular {
    index: i64,
    min: i64,
    max: i64,
}

/// Triangular numbers within `[min, max]`.
pub fn triangular(min: i64, max: i64) -> Triangular {
    Triangular { index: 0, min, max }
}

impl Iterator for Triangular {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            let n = self.index.checked_add(1)?;
            let value = n.checked_mul(n.checked_add(1)?)? / 2;
            if value > self.max {
                return None;
            }
            self.index = n;
            if value < self.min {
                continue;
            }
            return Some(value);
        }
    }
}

// ============ Primes ============

/// Sieve-backed prime progression.
#[derive(Debug, Clone)]
pub struct Primes {
    composite: Vec<bool>,
    cursor: usize,
}

/// Prime numbers within `[min, max]`, from a Sieve of Eratosthenes.
///
/// The sieve is allocated eagerly, one flag per candidate up to `max`.
/// Keeping `max` within a sane allocation size is the caller's
/// responsibility; it is a documented contract, not an enforced limit.
/// `max < 2` yields an empty stream.
pub fn primes(min: i64, max: i64) -> Primes {
    let limit = usize::try_from(max).unwrap_or(0);
    let mut composite = vec![false; limit.saturating_add(1)];
    let mut p = 2usize;
    while p.saturating_mul(p) <= limit {
        if !composite[p] {
            let mut multiple = p * p;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += p;
            }
        }
        p += 1;
    }
    let cursor = usize::try_from(min.max(2)).unwrap_or(usize::MAX);
    Primes { composite, cursor }
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        while self.cursor < self.composite.len() {
            let candidate = self.cursor;
            self.cursor += 1;
            if !self.composite[candidate] {
                return Some(candidate as i64);
            }
        }
        None
    }
}
