//! Construction faults for [`Log`](crate::Log) and [`LogOutput`](crate::LogOutput).
//!
//! Both are precondition violations detected when a node is built. Once a
//! node exists, append, rebase and rendering cannot fail.

/// Error returned by the validated constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The requested indent was negative.
    #[error("indent must be zero or greater, got {indent}")]
    IndentOutOfRange { indent: i64 },
    /// No message was supplied. An empty string is valid; an absent one is not.
    #[error("a log message is required (use an empty string for no text)")]
    MissingMessage,
}

pub(crate) fn check_indent(indent: i64) -> Result<usize, LogError> {
    usize::try_from(indent).map_err(|_| LogError::IndentOutOfRange { indent })
}

pub(crate) fn require_message(message: Option<String>) -> Result<String, LogError> {
    message.ok_or(LogError::MissingMessage)
}
