//! Sum of the integers 1..=n, three ways, guarded at the safe integer ceiling.

use std::str::FromStr;
use thiserror::Error;

/// Largest integer a double can hold without losing precision (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    #[error("sum exceeds max safe integer {ceiling}")]
    Overflow { ceiling: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sum strategy: {0}")]
pub struct UnknownStrategy(pub String);

fn overflow() -> SumError {
    SumError::Overflow {
        ceiling: MAX_SAFE_INTEGER,
    }
}

fn guarded_add(total: i64, term: i64) -> Result<i64, SumError> {
    match total.checked_add(term) {
        Some(next) if next <= MAX_SAFE_INTEGER => Ok(next),
        _ => Err(overflow()),
    }
}

/// Accumulates 1, 2, ..., n.
pub fn sum_to_n_ascending(n: i64) -> Result<i64, SumError> {
    if n <= 0 {
        return Ok(0);
    }
    let mut total = 0;
    for i in 1..=n {
        total = guarded_add(total, i)?;
    }
    Ok(total)
}

/// Accumulates n, n - 1, ..., 1.
pub fn sum_to_n_descending(n: i64) -> Result<i64, SumError> {
    let mut total = 0;
    let mut i = n;
    while i > 0 {
        total = guarded_add(total, i)?;
        i -= 1;
    }
    Ok(total)
}

/// Recursive sum over 1..=n, splitting the range in halves so the call depth
/// stays at O(log n).
///
/// The upper half is summed first. A range whose smallest possible sum
/// (`lo * len`) already passes the ceiling fails without descending further.
pub fn sum_to_n_recursive(n: i64) -> Result<i64, SumError> {
    fn go(lo: i64, hi: i64) -> Result<i64, SumError> {
        if lo > hi {
            return Ok(0);
        }
        if lo == hi {
            return guarded_add(0, lo);
        }
        match lo.checked_mul(hi - lo + 1) {
            Some(floor) if floor <= MAX_SAFE_INTEGER => {}
            _ => return Err(overflow()),
        }
        let mid = lo + (hi - lo) / 2;
        let upper = go(mid + 1, hi)?;
        let lower = go(lo, mid)?;
        guarded_add(upper, lower)
    }
    go(1, n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumStrategy {
    Ascending,
    Descending,
    Recursive,
}

impl SumStrategy {
    pub const ALL: [SumStrategy; 3] = [
        SumStrategy::Ascending,
        SumStrategy::Descending,
        SumStrategy::Recursive,
    ];

    pub fn sum_to_n(self, n: i64) -> Result<i64, SumError> {
        match self {
            SumStrategy::Ascending => sum_to_n_ascending(n),
            SumStrategy::Descending => sum_to_n_descending(n),
            SumStrategy::Recursive => sum_to_n_recursive(n),
        }
    }
}

impl FromStr for SumStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" => Ok(SumStrategy::Ascending),
            "descending" => Ok(SumStrategy::Descending),
            "recursive" => Ok(SumStrategy::Recursive),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}
