//! [`LogOutput`] — a flattened, single-line view of one [`Log`](crate::Log) node.

use crate::error::{check_indent, require_message, LogError};
use crate::render::Renderer;
use crate::types::{CallerSite, Severity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The scalar fields of one log node, without children.
///
/// Produced by [`Log::outputs`](crate::Log::outputs) and
/// [`Log::to_output`](crate::Log::to_output), or built directly with
/// [`LogOutput::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogOutput {
    message: String,
    severity: Severity,
    indent: usize,
    timestamp: DateTime<Utc>,
    caller: CallerSite,
}

impl LogOutput {
    pub const DEFAULT_RESERVED_WIDTH: usize = crate::render::DEFAULT_RESERVED_WIDTH;

    /// Validated constructor. Fails on a negative `indent` or an absent `message`.
    pub fn new(
        message: Option<String>,
        severity: Severity,
        indent: i64,
        timestamp: DateTime<Utc>,
        caller: CallerSite,
    ) -> Result<Self, LogError> {
        let indent = check_indent(indent)?;
        let message = require_message(message)?;
        Ok(Self::from_parts(message, severity, indent, timestamp, caller))
    }

    pub(crate) fn from_parts(
        message: String,
        severity: Severity,
        indent: usize,
        timestamp: DateTime<Utc>,
        caller: CallerSite,
    ) -> Self {
        Self {
            message,
            severity,
            indent,
            timestamp,
            caller,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn caller(&self) -> &CallerSite {
        &self.caller
    }

    /// Tab-indented message.
    pub fn render(&self) -> String {
        Renderer::default().line(self)
    }

    /// `HH:MM:SS.mmm: ` + indented message padded to `reserved_width` +
    /// `<file>:line <n>`.
    pub fn render_verbose(&self, reserved_width: usize) -> String {
        Renderer::default()
            .with_reserved_width(reserved_width)
            .verbose_line(self)
    }
}

impl std::fmt::Display for LogOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
