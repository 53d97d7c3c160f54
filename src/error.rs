//! Library error types
//!
//! Every variant is an "invalid argument" class failure: the caller handed
//! in something outside the valid input domain. Empty input is never an error.

use thiserror::Error;

/// Exit code used by the CLI for invalid arguments (matches clap's usage errors)
pub const INVALID_ARGUMENT_EXIT_CODE: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A budget or threshold was negative
    #[error("invalid argument: {name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    /// A token in a comma-separated number list is not an integer
    #[error("invalid argument: `{token}` is not an integer")]
    MalformedNumber { token: String },
}

impl Error {
    pub fn negative(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument { name, value }
    }

    /// Process exit code for this error when surfaced by the CLI
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument { .. } | Self::MalformedNumber { .. } => {
                INVALID_ARGUMENT_EXIT_CODE
            }
        }
    }
}

/// Convert a signed caller-supplied count into `usize`, rejecting negatives.
///
/// Negative values are never clamped to zero.
pub fn non_negative(name: &'static str, value: i64) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::negative(name, value))
}
