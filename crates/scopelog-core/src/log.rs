//! [`Log`] — the immutable, indentation-scoped log tree.
//!
//! Trees are built bottom-up. A leaf comes from one of the factories
//! ([`Log::context`], [`Log::info`], [`Log::warning`], [`Log::error`]) and
//! larger trees are formed with [`Log::append`] or the `+` operator. Nothing is
//! ever mutated: every append returns a new root and leaves the old one intact.
//!
//! # Indentation
//!
//! Each node stores its own indent; there are no parent pointers. Appending a
//! child rebases the child's whole subtree:
//!
//! - a [`Severity::Context`] child opens a new scope and lands at
//!   `parent.indent + 1`;
//! - any other child is an annotation of the current scope and lands at
//!   `parent.indent`.
//!
//! Descendants of the rebased child end up at `child.indent + depth`.
//!
//! ```
//! use chrono::Utc;
//! use scopelog_core::{CallerSite, Log};
//!
//! let now = Utc::now();
//! let site = CallerSite::default();
//! let step = Log::context("Step 1", now, site.clone())
//!     + Log::info("clicked button", now, site.clone());
//! let root = Log::context("", now, site) + step;
//! assert_eq!(root.render(), "\tStep 1\n\t\tINFO: clicked button");
//! ```

use crate::error::{check_indent, require_message, LogError};
use crate::output::LogOutput;
use crate::render::Renderer;
use crate::text::{indent_with, is_blank, LINE_SEPARATOR, TAB};
use crate::types::{CallerSite, Severity};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// One node of a log tree together with its (shared, immutable) children.
///
/// Every walk over the tree (rebase, depth, equality, drop) uses an explicit
/// worklist, so arbitrarily deep trees never exhaust the call stack.
#[derive(Debug, Clone, Serialize)]
pub struct Log {
    indent: usize,
    severity: Severity,
    message: String,
    children: Vec<Arc<Log>>,
    timestamp: DateTime<Utc>,
    caller: CallerSite,
}

impl Log {
    /// Validated constructor. Fails on a negative `indent` or an absent
    /// `message`. `children` are stored as given, without rebasing.
    pub fn new(
        indent: i64,
        severity: Severity,
        message: Option<String>,
        children: Vec<Log>,
        timestamp: DateTime<Utc>,
        caller: CallerSite,
    ) -> Result<Self, LogError> {
        let indent = check_indent(indent)?;
        let message = require_message(message)?;
        Ok(Self {
            indent,
            severity,
            message,
            children: children.into_iter().map(Arc::new).collect(),
            timestamp,
            caller,
        })
    }

    // -----------------------------------------------------------------------
    // Factories
    // -----------------------------------------------------------------------

    /// Scope header. The message is stored without a tag.
    pub fn context(message: &str, timestamp: DateTime<Utc>, caller: CallerSite) -> Self {
        Self::entry(Severity::Context, message, timestamp, caller)
    }

    /// `INFO: <message>`
    pub fn info(message: &str, timestamp: DateTime<Utc>, caller: CallerSite) -> Self {
        Self::entry(Severity::Info, message, timestamp, caller)
    }

    /// `WARNING: <message>`
    pub fn warning(message: &str, timestamp: DateTime<Utc>, caller: CallerSite) -> Self {
        Self::entry(Severity::Warn, message, timestamp, caller)
    }

    /// `ERROR: <message>`
    pub fn error(message: &str, timestamp: DateTime<Utc>, caller: CallerSite) -> Self {
        Self::entry(Severity::Error, message, timestamp, caller)
    }

    /// Leaf for `severity` with its tag applied; the factory the others share.
    pub fn entry(
        severity: Severity,
        message: &str,
        timestamp: DateTime<Utc>,
        caller: CallerSite,
    ) -> Self {
        Self {
            indent: 0,
            severity,
            message: format!("{}{}", severity.prefix(), message),
            children: Vec::new(),
            timestamp,
            caller,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn children(&self) -> &[Arc<Log>] {
        &self.children
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn caller(&self) -> &CallerSite {
        &self.caller
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Height of this subtree; 0 for a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child.as_ref(), depth + 1)));
        }
        deepest
    }

    // -----------------------------------------------------------------------
    // Structural update
    // -----------------------------------------------------------------------

    /// Append `child` under `self`.
    ///
    /// Returns the new root (a copy of `self` with one more child) and the
    /// rebased child, so callers can keep appending beneath it. `self` is
    /// left unchanged.
    pub fn append(&self, child: &Log) -> (Log, Log) {
        let target = if child.severity.is_context() {
            self.indent + 1
        } else {
            self.indent
        };
        tracing::trace!(
            parent_indent = self.indent,
            siblings = self.children.len(),
            child_severity = %child.severity,
            target,
            "appending log node"
        );

        let rebased = Arc::new(child.rebase(target));
        let mut children = Vec::with_capacity(self.children.len() + 1);
        children.extend(self.children.iter().cloned());
        children.push(Arc::clone(&rebased));

        (self.with_children(self.indent, children), Log::clone(&rebased))
    }

    /// Copy of this subtree with `self` at `indent` and every descendant at
    /// `indent + depth`.
    pub fn rebase(&self, indent: usize) -> Log {
        // Pre-order list of descendants with their new indents.
        let mut order = Vec::new();
        let mut pending: Vec<(&Log, usize)> = self
            .children
            .iter()
            .rev()
            .map(|child| (child.as_ref(), indent + 1))
            .collect();
        while let Some((node, node_indent)) = pending.pop() {
            order.push((node, node_indent));
            pending.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (child.as_ref(), node_indent + 1)),
            );
        }
        tracing::trace!(nodes = order.len() + 1, indent, "rebasing subtree");

        // Reverse pre-order: each node's rebuilt children sit on top of
        // `built`, first child last.
        let mut built: Vec<Arc<Log>> = Vec::with_capacity(order.len());
        for (node, node_indent) in order.into_iter().rev() {
            let start = built.len() - node.children.len();
            let children = built.drain(start..).rev().collect();
            built.push(Arc::new(node.with_children(node_indent, children)));
        }
        built.reverse();
        self.with_children(indent, built)
    }

    /// Copy of this node's scalar fields with a new indent and children.
    fn with_children(&self, indent: usize, children: Vec<Arc<Log>>) -> Log {
        Log {
            indent,
            severity: self.severity,
            message: self.message.clone(),
            children,
            timestamp: self.timestamp,
            caller: self.caller.clone(),
        }
    }

    fn same_fields(&self, other: &Log) -> bool {
        self.indent == other.indent
            && self.severity == other.severity
            && self.message == other.message
            && self.timestamp == other.timestamp
            && self.caller == other.caller
            && self.children.len() == other.children.len()
    }

    // -----------------------------------------------------------------------
    // Flattening
    // -----------------------------------------------------------------------

    /// Every node of the subtree in pre-order, blank ones included.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Tab-indented lines in pre-order. Nodes with a blank message produce no
    /// line; their children still do. Call again to restart.
    pub fn lines(&self) -> Lines<'_> {
        Lines::with_unit(self, TAB)
    }

    /// [`LogOutput`] records for the same nodes [`Log::lines`] yields.
    pub fn outputs(&self) -> Outputs<'_> {
        Outputs { nodes: self.iter() }
    }

    /// This node alone, without its children.
    pub fn to_output(&self) -> LogOutput {
        LogOutput::from_parts(
            self.message.clone(),
            self.severity,
            self.indent,
            self.timestamp,
            self.caller.clone(),
        )
    }

    /// [`Log::lines`] joined with the platform line separator.
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join(LINE_SEPARATOR)
    }

    /// Verbose lines (timestamp, message, aligned caller location) joined with
    /// the platform line separator.
    pub fn render_verbose(&self, reserved_width: usize) -> String {
        Renderer::default()
            .with_reserved_width(reserved_width)
            .render_verbose(self)
    }
}

impl PartialEq for Log {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if !left.same_fields(right) {
                return false;
            }
            pending.extend(
                left.children
                    .iter()
                    .zip(&right.children)
                    .filter(|(l, r)| !Arc::ptr_eq(l, r))
                    .map(|(l, r)| (l.as_ref(), r.as_ref())),
            );
        }
        true
    }
}

impl Drop for Log {
    fn drop(&mut self) {
        // Unwrap uniquely owned children into a worklist; shared ones only
        // lose a reference.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                pending.append(&mut node.children);
            }
        }
    }
}

impl std::fmt::Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

// ---------------------------------------------------------------------------
// Combine operator
// ---------------------------------------------------------------------------

impl std::ops::Add<Log> for Log {
    type Output = Log;

    /// [`Log::append`], keeping only the new root.
    fn add(self, child: Log) -> Log {
        self.append(&child).0
    }
}

impl std::ops::Add<&Log> for &Log {
    type Output = Log;

    fn add(self, child: &Log) -> Log {
        self.append(child).0
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Pre-order iterator over a subtree. See [`Log::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Log>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Log;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| child.as_ref()));
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Log {
    type Item = &'a Log;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Indented, non-blank lines of a subtree. See [`Log::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    nodes: Iter<'a>,
    unit: &'a str,
}

impl<'a> Lines<'a> {
    pub(crate) fn with_unit(log: &'a Log, unit: &'a str) -> Self {
        Self {
            nodes: log.iter(),
            unit,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.unit;
        self.nodes
            .find(|node| !is_blank(&node.message))
            .map(|node| indent_with(unit, node.indent, Some(node.message.as_str())))
    }
}

/// [`LogOutput`] records for the non-blank nodes of a subtree. See [`Log::outputs`].
#[derive(Debug, Clone)]
pub struct Outputs<'a> {
    nodes: Iter<'a>,
}

impl Iterator for Outputs<'_> {
    type Item = LogOutput;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .find(|node| !is_blank(&node.message))
            .map(Log::to_output)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
