//! Character-boundary helpers
//!
//! All lengths here are counted in Unicode scalar values (`char`), never bytes.
//! Returned offsets are always valid UTF-8 char boundaries, so slicing with them
//! cannot panic.

/// Byte offset where the character at index `n` starts.
///
/// Returns `None` when `s` has `n` characters or fewer, i.e. when there is no
/// character at index `n` and a `n`-character budget needs no cut.
///
/// # Examples
///
/// ```
/// use drills::util::nth_char_offset;
///
/// assert_eq!(nth_char_offset("hello world", 5), Some(5));
/// assert_eq!(nth_char_offset("hello", 5), None);
///
/// // "日" is 3 bytes, so the second character starts at byte 3
/// assert_eq!(nth_char_offset("日本語", 1), Some(3));
/// ```
pub fn nth_char_offset(s: &str, n: usize) -> Option<usize> {
    // Byte length is an upper bound on char count
    if s.len() <= n {
        return None;
    }
    s.char_indices().nth(n).map(|(offset, _)| offset)
}

/// Split `s` after its first `n` characters.
///
/// Returns `None` if `s` fits within `n` characters.
pub fn split_at_char(s: &str, n: usize) -> Option<(&str, &str)> {
    nth_char_offset(s, n).map(|offset| s.split_at(offset))
}

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
