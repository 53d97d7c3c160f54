//! Threshold-based element counting
//!
//! Finds an element whose occurrence count is strictly greater than a caller
//! supplied threshold. This is a generic "count exceeds threshold" filter:
//! several elements may qualify, and a [`TieBreak`] decides which one wins.
//! [`strict_majority`] gives the classic majority-vote reading on top of it.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{non_negative, Error};

/// Rule for choosing among several qualifying elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lowest qualifying value (default)
    #[default]
    Smallest,
    /// Qualifying value whose first occurrence comes earliest in the input
    FirstSeen,
}

impl TieBreak {
    /// Parse tie-break string from config or env.
    /// Unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().replace('_', "-").as_str() {
            "smallest" => Self::Smallest,
            "first-seen" => Self::FirstSeen,
            _ => Self::default(),
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smallest => "smallest",
            Self::FirstSeen => "first-seen",
        }
    }
}

/// Count occurrences of each distinct value
pub fn frequencies(numbers: &[i64]) -> HashMap<i64, usize> {
    let mut counts = HashMap::with_capacity(numbers.len());
    for &n in numbers {
        *counts.entry(n).or_insert(0) += 1;
    }
    counts
}

/// Element occurring more than `threshold` times, lowest value first.
///
/// ```
/// use drills::majority::majority_element;
///
/// assert_eq!(majority_element(&[1, 1, 2], 1), Some(1));
/// assert_eq!(majority_element(&[1, 1, 2], 2), None);
/// assert_eq!(majority_element(&[], 0), None);
/// ```
pub fn majority_element(numbers: &[i64], threshold: usize) -> Option<i64> {
    majority_element_by(numbers, threshold, TieBreak::Smallest)
}

/// Element occurring more than `threshold` times, chosen by `tie_break`
pub fn majority_element_by(
    numbers: &[i64],
    threshold: usize,
    tie_break: TieBreak,
) -> Option<i64> {
    let counts = frequencies(numbers);
    let qualifies = |n: &i64| counts.get(n).is_some_and(|&c| c > threshold);

    let found = match tie_break {
        TieBreak::Smallest => counts.keys().copied().filter(qualifies).min(),
        TieBreak::FirstSeen => numbers.iter().copied().find(qualifies),
    };

    tracing::trace!(
        len = numbers.len(),
        distinct = counts.len(),
        threshold,
        tie_break = tie_break.as_str(),
        ?found,
        "majority scan"
    );

    found
}

/// Checked entry point for callers holding a signed threshold.
///
/// A negative threshold is rejected with [`Error::InvalidArgument`].
pub fn try_majority_element(
    numbers: &[i64],
    threshold: i64,
    tie_break: TieBreak,
) -> Result<Option<i64>, Error> {
    let threshold = non_negative("threshold", threshold)?;
    Ok(majority_element_by(numbers, threshold, tie_break))
}

/// Element occurring in more than half of `numbers`.
///
/// Uses `floor(len / 2)` as the threshold, so at most one element qualifies.
pub fn strict_majority(numbers: &[i64]) -> Option<i64> {
    majority_element(numbers, numbers.len() / 2)
}

/// Parse a comma-separated list of integers, e.g. `"1, 1,2"`.
///
/// Blank input is an empty list. Any token that is not an integer,
/// including an empty one between two commas, is an error.
pub fn parse_numbers(input: &str) -> Result<Vec<i64>, Error> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|_| Error::MalformedNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
