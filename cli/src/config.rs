//! Optional `counterkit.toml` configuration.
//!
//! ```toml
//! [call]
//! max_number = 10
//! debug_enable = true
//!
//! [log]
//! level = "info"
//! format = "text"
//! ```
//!
//! Call values are loose host values, so `max_number = 10.5` goes through
//! the same coercion as any other caller.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use value::Value;

pub const DEFAULT_FILE: &str = "counterkit.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub call: CallConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallConfig {
    pub max_number: Value,
    pub debug_enable: Value,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            max_number: Value::Int(10),
            debug_enable: Value::Bool(true),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("In {}", path.display()))
    }

    /// An explicit path must exist; otherwise `./counterkit.toml` is used
    /// when present, and built-in defaults when not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_FILE);
                if fallback.is_file() {
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
