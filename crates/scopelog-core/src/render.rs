//! Configurable text rendering for log trees and single output lines.
//!
//! [`Renderer::default`] reproduces the fixed format used by
//! [`Log::render`](crate::Log::render) and
//! [`LogOutput::render_verbose`](crate::LogOutput::render_verbose): one tab per
//! level, a 60-column reserved message width and `HH:MM:SS.mmm` timestamps.
//! Build one from a [`RenderConfig`] to change any of those.
//!
//! # Verbose layout
//!
//! ```text
//! 10:00:00.123: \tStep 1<padding>src/steps.rs:line 12
//! ```
//!
//! The padding fills the reserved width so the caller-location suffix lines up
//! in one column. It is never negative: a message wider than the reserved
//! width is followed directly by the suffix.

use crate::config::RenderConfig;
use crate::log::{Lines, Log};
use crate::output::LogOutput;
use crate::text::{indent_with, LINE_SEPARATOR, TAB};
use chrono::format::{Item, StrftimeItems};

/// Default column width reserved for the indented message in verbose lines.
pub const DEFAULT_RESERVED_WIDTH: usize = 60;

/// Default verbose timestamp format (`HH:MM:SS.mmm`).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Rejected renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid timestamp format {0:?}")]
    TimestampFormat(String),
}

/// Renders [`Log`] trees and [`LogOutput`] lines as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    indent_unit: String,
    reserved_width: usize,
    timestamp_format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            indent_unit: TAB.to_string(),
            reserved_width: DEFAULT_RESERVED_WIDTH,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Renderer {
    /// Build a renderer, rejecting timestamp formats chrono cannot parse.
    pub fn new(
        indent_unit: impl Into<String>,
        reserved_width: usize,
        timestamp_format: impl Into<String>,
    ) -> Result<Self, RenderError> {
        let timestamp_format = timestamp_format.into();
        validate_timestamp_format(&timestamp_format)?;
        Ok(Self {
            indent_unit: indent_unit.into(),
            reserved_width,
            timestamp_format,
        })
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        Self::new(
            config.indent_unit.clone(),
            config.reserved_width,
            config.timestamp_format.clone(),
        )
    }

    pub fn with_reserved_width(mut self, reserved_width: usize) -> Self {
        self.reserved_width = reserved_width;
        self
    }

    pub fn reserved_width(&self) -> usize {
        self.reserved_width
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    // -----------------------------------------------------------------------
    // Single lines
    // -----------------------------------------------------------------------

    /// Compact form: the indented message only.
    pub fn line(&self, output: &LogOutput) -> String {
        indent_with(&self.indent_unit, output.indent(), Some(output.message()))
    }

    /// Verbose form: timestamp, indented message, padding, caller location.
    pub fn verbose_line(&self, output: &LogOutput) -> String {
        let prefix_len = self.indent_unit.chars().count() * output.indent();
        let pad = padding(
            self.reserved_width,
            output.message().chars().count(),
            prefix_len,
        );
        format!(
            "{}: {}{}{}",
            output.timestamp().format(&self.timestamp_format),
            self.line(output),
            " ".repeat(pad),
            output.caller(),
        )
    }

    // -----------------------------------------------------------------------
    // Whole trees
    // -----------------------------------------------------------------------

    /// Compact lines of `log` in pre-order, skipping blank messages.
    pub fn lines<'a>(&'a self, log: &'a Log) -> Lines<'a> {
        Lines::with_unit(log, &self.indent_unit)
    }

    pub fn render(&self, log: &Log) -> String {
        self.lines(log).collect::<Vec<_>>().join(LINE_SEPARATOR)
    }

    pub fn render_verbose(&self, log: &Log) -> String {
        log.outputs()
            .map(|output| self.verbose_line(&output))
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }
}

/// Spaces needed after an indented message so the suffix starts at
/// `reserved_width`; zero once the message already reaches it.
pub fn padding(reserved_width: usize, message_len: usize, prefix_len: usize) -> usize {
    reserved_width.saturating_sub(message_len + prefix_len)
}

fn validate_timestamp_format(format: &str) -> Result<(), RenderError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::TimestampFormat(format.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
