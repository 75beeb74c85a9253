//! scopelog-core — immutable, indentation-scoped log trees.
//!
//! A [`Log`] is a persistent tree of contextual headers and info/warning/error
//! messages. Appending returns a new root and rebases the appended subtree so
//! every node carries the indent it renders at. Finished trees flatten to
//! compact tab-indented text or, through [`LogOutput`], to verbose lines with a
//! timestamp and an aligned caller location.
//!
//! # Layout
//!
//! ```text
//! types ──► log ──► output ──► render ◄── config
//!            │                   ▲
//!            └───────────────────┘
//! ```
//!
//! Timestamps and caller sites are always passed in by the caller; this crate
//! never reads a clock or inspects the call stack, and never writes output.

pub mod config;
pub mod error;
pub mod log;
pub mod output;
pub mod render;
pub mod text;
pub mod types;

pub use error::LogError;
pub use log::Log;
pub use output::LogOutput;
pub use render::Renderer;
pub use text::tabs;
pub use types::{CallerSite, Severity};
