//! Word-aware message truncation and threshold element counting.
//!
//! - [`truncate`]: cut a message to at most `k` characters on a word boundary
//! - [`majority`]: find an element occurring more than `n` times
//!
//! Both operations are pure functions over borrowed input. The [`config`] and
//! [`logging`] modules back the `drills` command-line tool.

pub mod config;
pub mod error;
pub mod logging;
pub mod majority;
pub mod truncate;
pub mod util;

pub use error::Error;
pub use majority::{majority_element, strict_majority, TieBreak};
pub use truncate::truncate_message;
