//! Runtime configuration.
//!
//! Example:
//! ```toml
//! [pattern]
//! size_limit = 10485760
//! nest_limit = 250
//!
//! [console]
//! stream = "stderr"   # keep stdout free for program data
//! ```

use crate::error::RuntimeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for the runtime helpers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub pattern: PatternConfig,
    pub console: ConsoleConfig,
}

impl RuntimeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, RuntimeError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a TOML file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, RuntimeError> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded runtime config");
        Ok(config)
    }
}

/// Limits applied when compiling regular-expression literals.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Approximate upper bound, in bytes, on a compiled pattern.
    pub size_limit: usize,
    /// Maximum nesting depth of groups and repetitions.
    pub nest_limit: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            size_limit: 10 * (1 << 20),
            nest_limit: 250,
        }
    }
}

/// Where `console.log` output goes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub stream: OutputStream,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStream {
    #[default]
    Stdout,
    Stderr,
}
