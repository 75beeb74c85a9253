//! Configuration types for scopelog.
//!
//! [`Config::load`] layers an optional TOML file and `SCOPELOG_*` environment
//! variables over the embedded defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use crate::render::{Renderer, DEFAULT_RESERVED_WIDTH, DEFAULT_TIMESTAMP_FORMAT};
use anyhow::Context as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[render]
indent_unit      = "\t"
reserved_width   = 60
timestamp_format = "%H:%M:%S%.3f"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/scopelog/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// `[render]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// String repeated once per indentation level.
    #[serde(default = "default_indent_unit")]
    pub indent_unit: String,
    /// Column width reserved for the indented message in verbose output.
    #[serde(default = "default_reserved_width")]
    pub reserved_width: usize,
    /// chrono `strftime` format for verbose timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_indent_unit() -> String { "\t".to_string() }
fn default_reserved_width() -> usize { DEFAULT_RESERVED_WIDTH }
fn default_timestamp_format() -> String { DEFAULT_TIMESTAMP_FORMAT.to_string() }

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: default_indent_unit(),
            reserved_width: default_reserved_width(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl RenderConfig {
    /// Build the [`Renderer`] described by this section.
    pub fn renderer(&self) -> anyhow::Result<Renderer> {
        Renderer::from_config(self).context("invalid [render] configuration")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the per-user config file when `None`) on top of the
    /// built-in defaults, then apply `SCOPELOG_RENDER__*` environment
    /// overrides. A missing file is not an error and is never created.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        tracing::debug!(path = %path.display(), "loading config");

        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix("SCOPELOG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading config from {}", path.display()))?
            .try_deserialize()?;

        // Surface bad timestamp formats at load time rather than at render.
        config.render.renderer()?;
        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("scopelog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
