//! Word-aware message truncation
//!
//! Cuts a message down to at most `k` characters, preferring to stop at a word
//! boundary instead of splitting a word. A word boundary is a single space
//! character. Lengths are counted in Unicode scalar values.
//!
//! The rules, checked in order once the message is longer than `k`:
//! 1. The character just past the window is a space: keep the window.
//! 2. The last character inside the window is a space: keep the window,
//!    minus its trailing whitespace.
//! 3. Otherwise the cut lands mid-word: drop the partial last word.
//!
//! A window with no space in it therefore truncates to an empty string.

use serde::Serialize;

use crate::error::{non_negative, Error};
use crate::util::{char_len, split_at_char};

/// Which rule produced a truncation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cut {
    /// Message already fit the budget
    Untouched,
    /// Character after the window is a space
    WordBoundary,
    /// Window ended in a space, which was trimmed
    TrailingSpace,
    /// Cut fell inside a word, which was dropped
    DroppedPartialWord,
}

impl Cut {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Untouched => "untouched",
            Self::WordBoundary => "word_boundary",
            Self::TrailingSpace => "trailing_space",
            Self::DroppedPartialWord => "dropped_partial_word",
        }
    }
}

/// Truncated text together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncation {
    pub text: String,
    pub cut: Cut,
}

/// Truncate `message` to at most `k` characters, cutting on word boundaries.
///
/// ```
/// use drills::truncate::truncate_message;
///
/// assert_eq!(truncate_message("To crop or not to crop", 21), "To crop or not to");
/// assert_eq!(truncate_message("To crop", 7), "To crop");
/// assert_eq!(truncate_message("To crop", 0), "");
/// ```
pub fn truncate_message(message: &str, k: usize) -> String {
    truncate_with_outcome(message, k).text
}

/// Same as [`truncate_message`], also reporting which rule applied
pub fn truncate_with_outcome(message: &str, k: usize) -> Truncation {
    let Some((head, rest)) = split_at_char(message, k) else {
        return Truncation {
            text: message.to_string(),
            cut: Cut::Untouched,
        };
    };

    let (text, cut) = if rest.starts_with(' ') {
        // Runs of spaces can leave whitespace at the end of the window
        (head.trim_end().to_string(), Cut::WordBoundary)
    } else if head.ends_with(' ') {
        (head.trim_end().to_string(), Cut::TrailingSpace)
    } else {
        let mut words: Vec<&str> = head.split(' ').filter(|w| !w.is_empty()).collect();
        words.pop();
        (words.join(" ").trim_end().to_string(), Cut::DroppedPartialWord)
    };

    tracing::debug!(
        k,
        cut = cut.as_str(),
        kept_chars = char_len(&text),
        "truncated message"
    );

    Truncation { text, cut }
}

/// Checked entry point for callers holding a signed budget.
///
/// A negative `k` is rejected with [`Error::InvalidArgument`].
pub fn try_truncate_message(message: &str, k: i64) -> Result<String, Error> {
    let k = non_negative("k", k)?;
    Ok(truncate_message(message, k))
}
