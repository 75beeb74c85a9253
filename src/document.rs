//! Log documents — JSON scripts describing a log tree.
//!
//! A document lists entries in the order they were logged. Each entry names
//! its kind (`context`, `info`, `warning`/`warn`, `error`), its message, and
//! optionally a timestamp, a caller site and nested entries:
//!
//! ```json
//! {
//!   "timestamp": "2024-01-15T10:00:00Z",
//!   "entries": [
//!     { "kind": "context", "message": "Step 1", "children": [
//!       { "kind": "info", "message": "clicked button",
//!         "caller": { "member_name": "click", "file_path": "steps.rs", "line_number": 12 } }
//!     ] }
//!   ]
//! }
//! ```
//!
//! [`Document::build`] folds the entries bottom-up through the `Log`
//! factories and `+`, so indents come out of the core's own append rules
//! rather than from the document.

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use scopelog_core::{CallerSite, Log, Severity};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Top-level document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Timestamp for entries that carry none. Falls back to the `now` passed
    /// to [`Document::build`].
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One log entry and the entries nested beneath it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub kind: Severity,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub caller: Option<CallerSite>,
    #[serde(default)]
    pub children: Vec<Entry>,
}

impl Document {
    pub fn parse(src: &str) -> anyhow::Result<Self> {
        serde_json::from_str(src).context("parsing log document")
    }

    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("parsing log document")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening log document {}", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("reading {}", path.display()))
    }

    /// Build the tree under an empty context root (indent 0, blank message).
    pub fn build(&self, now: DateTime<Utc>) -> Log {
        let timestamp = self.timestamp.unwrap_or(now);
        tracing::debug!(entries = self.entries.len(), "building log tree");
        let root = Log::context("", timestamp, CallerSite::default());
        self.entries
            .iter()
            .fold(root, |root, entry| root + entry.build(timestamp))
    }
}

impl Entry {
    /// Build this entry's subtree; entries without a timestamp inherit `fallback`.
    pub fn build(&self, fallback: DateTime<Utc>) -> Log {
        let timestamp = self.timestamp.unwrap_or(fallback);
        let leaf = Log::entry(
            self.kind,
            &self.message,
            timestamp,
            self.caller.clone().unwrap_or_default(),
        );
        self.children
            .iter()
            .fold(leaf, |node, child| node + child.build(timestamp))
    }
}
