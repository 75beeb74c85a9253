//! Test builders — deterministic provenance and small tree shapes.
//!
//! These helpers favour readability in assertions. They panic on invalid
//! input rather than returning `Result`.

use chrono::{DateTime, TimeZone, Utc};
use scopelog::{CallerSite, Log, Severity};

// ---------------------------------------------------------------------------
// Provenance
// ---------------------------------------------------------------------------

/// 2024-01-15 10:00:00.123 UTC.
pub fn fixed_ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap() + chrono::Duration::milliseconds(123)
}

/// `fixed_ts()` shifted by `millis`.
pub fn ts_plus(millis: i64) -> DateTime<Utc> {
    fixed_ts() + chrono::Duration::milliseconds(millis)
}

pub fn site(line: u32) -> CallerSite {
    CallerSite::new("run_step", "tests/steps.rs", line)
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// The empty root every tree starts from: a blank context at indent 0.
pub fn empty_root() -> Log {
    Log::context("", fixed_ts(), site(0))
}

pub fn context(message: &str) -> Log {
    Log::context(message, fixed_ts(), site(1))
}

pub fn info(message: &str) -> Log {
    Log::info(message, fixed_ts(), site(2))
}

pub fn warning(message: &str) -> Log {
    Log::warning(message, fixed_ts(), site(3))
}

pub fn error(message: &str) -> Log {
    Log::error(message, fixed_ts(), site(4))
}

/// Node at an explicit indent, bypassing the factories.
pub fn node_at(indent: i64, severity: Severity, message: &str) -> Log {
    Log::new(indent, severity, Some(message.to_string()), Vec::new(), fixed_ts(), site(5))
        .expect("test node must be valid")
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// A context chain `depth` levels deep under an empty root, each level with
/// one info child. For `depth == 2` the rendered lines are:
///
/// ```text
/// \tlevel 0
/// \t\tINFO: at 0
/// \t\tlevel 1
/// \t\t\tINFO: at 1
/// ```
pub fn nested_steps(depth: usize) -> Log {
    (0..depth).rev().fold(None::<Log>, |inner, level| {
        let scope = context(&format!("level {level}")) + info(&format!("at {level}"));
        Some(match inner {
            Some(inner) => scope + inner,
            None => scope,
        })
    })
    .map(|steps| empty_root() + steps)
    .unwrap_or_else(empty_root)
}

/// A root with `width` context children, each holding one warning.
pub fn wide_tree(width: usize) -> Log {
    (0..width).fold(empty_root(), |root, i| {
        root + (context(&format!("step {i}")) + warning(&format!("slow {i}")))
    })
}
