//! scopelog — render indentation-scoped log trees.
//!
//! The tree model and renderers live in [`scopelog_core`]; this crate adds the
//! JSON [`document`] format and the output selection used by the `scopelog`
//! binary, exposed as a library so integration tests can import them directly.
//!
//! # Pipeline
//!
//! ```text
//! document ──► Log tree ──► render (text | verbose | json) ──► stdout
//! ```

pub mod document;

pub use scopelog_core::config::{Config, RenderConfig};
pub use scopelog_core::{CallerSite, Log, LogError, LogOutput, Renderer, Severity};

/// Output encoding selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-indented text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// How a finished tree is turned into output text.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Verbose text lines, or a flat list of outputs in JSON.
    pub verbose: bool,
    /// Overrides the configured reserved width.
    pub width: Option<usize>,
}

/// Render `log` according to `options`, starting from `renderer`'s settings.
pub fn render(log: &Log, options: &RenderOptions, renderer: &Renderer) -> anyhow::Result<String> {
    let renderer = match options.width {
        Some(width) => renderer.clone().with_reserved_width(width),
        None => renderer.clone(),
    };

    let rendered = match (options.format, options.verbose) {
        (OutputFormat::Text, false) => renderer.render(log),
        (OutputFormat::Text, true) => renderer.render_verbose(log),
        (OutputFormat::Json, false) => serde_json::to_string_pretty(log)?,
        (OutputFormat::Json, true) => {
            serde_json::to_string_pretty(&log.outputs().collect::<Vec<_>>())?
        }
    };
    Ok(rendered)
}
