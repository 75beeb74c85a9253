//! Core types for scopelog-core.
//!
//! This module defines the small value types shared by the tree and the
//! renderers: the closed [`Severity`] enumeration and the [`CallerSite`]
//! provenance record.

use serde::{Deserialize, Serialize};

/// Severity of a log node.
///
/// `Context` is not a level in the usual sense: it marks a scope header whose
/// children render one indentation level deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Context,
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl Severity {
    /// Tag prepended to the message by the matching factory on [`crate::Log`].
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Context => "",
            Severity::Info => "INFO: ",
            Severity::Warn => "WARNING: ",
            Severity::Error => "ERROR: ",
        }
    }

    pub fn is_context(self) -> bool {
        self == Severity::Context
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Context => write!(f, "CONTEXT"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Returned by [`Severity::from_str`](std::str::FromStr) for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity {0:?} (expected context, info, warn, warning or error)")]
pub struct ParseSeverityError(pub String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "context" => Ok(Severity::Context),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Source location a log entry was produced at.
///
/// Always supplied by the caller; nothing in this crate inspects the call
/// stack. The default value is an unknown site (empty names, line 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerSite {
    /// Function or method name.
    #[serde(default)]
    pub member_name: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub line_number: u32,
}

impl CallerSite {
    pub fn new(
        member_name: impl Into<String>,
        file_path: impl Into<String>,
        line_number: u32,
    ) -> Self {
        Self {
            member_name: member_name.into(),
            file_path: file_path.into(),
            line_number,
        }
    }
}

impl std::fmt::Display for CallerSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:line {}", self.file_path, self.line_number)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
