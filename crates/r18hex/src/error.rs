//! The error type shared by every crate in this workspace.

/// The ways in which an operation on the game state can fail.
///
/// Each variant identifies a distinct failure kind, so that callers can
/// map errors onto exit codes or user-facing messages without inspecting
/// the message text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attempted mutation violates the game rules.
    /// The state is left unchanged.
    #[error("rule violation: {0}")]
    Rule(String),
    /// A lookup used a key that is valid in shape but absent in the
    /// current state (e.g., a slot with no settlement).
    #[error("not found: {0}")]
    NotFound(String),
    /// An argument was outside the domain of the operation, including
    /// malformed input files.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An invariant of the game state was violated; this indicates a bug
    /// rather than a caller error.
    #[error("internal inconsistency: {0}")]
    Internal(String),
}

impl Error {
    pub fn rule<S: Into<String>>(msg: S) -> Self {
        Error::Rule(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Error::NotFound(msg.into())
    }

    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
