use anyhow::{bail, Result};
use std::env;
use std::fmt;

use crate::config::LogConfig;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" | "verbose" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LogLevel,
    /// `RUST_LOG` directives. Used in place of `level` until the command
    /// line names a level.
    pub filter: Option<String>,
}

impl LogOptions {
    pub const DEFAULT: Self = Self {
        format: LogFormat::Text,
        level: LogLevel::Warn,
        filter: None,
    };

    /// Layer file < env < command line on top of the defaults.
    pub fn resolve(file: &LogConfig, cli_level: Option<&str>, cli_format: Option<&str>) -> Result<Self> {
        let from_file = Self::DEFAULT.with_config(file)?;
        let env_format = env::var("COUNTERKIT_LOG_FORMAT").ok();
        let env_level = env::var("COUNTERKIT_LOG_LEVEL").ok();
        let env_filter = env::var("RUST_LOG").ok();
        let from_env = apply_env_overrides(
            from_file,
            env_format.as_deref(),
            env_level.as_deref(),
            env_filter.as_deref(),
        );
        from_env.with_cli(cli_level, cli_format)
    }

    fn with_config(self, file: &LogConfig) -> Result<Self> {
        self.with_strict(file.level.as_deref(), file.format.as_deref(), "config")
    }

    fn with_cli(mut self, level: Option<&str>, format: Option<&str>) -> Result<Self> {
        if level.is_some() {
            self.filter = None;
        }
        self.with_strict(level, format, "command line")
    }

    fn with_strict(mut self, level: Option<&str>, format: Option<&str>, origin: &str) -> Result<Self> {
        if let Some(spec) = level {
            match LogLevel::parse(spec) {
                Some(level) => self.level = level,
                None => bail!("Unknown log level '{spec}' in {origin}"),
            }
        }
        if let Some(spec) = format {
            match LogFormat::parse(spec) {
                Some(format) => self.format = format,
                None => bail!("Unknown log format '{spec}' in {origin}"),
            }
        }
        Ok(self)
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Environment values that do not parse are ignored rather than fatal.
fn apply_env_overrides(
    mut options: LogOptions,
    format: Option<&str>,
    level: Option<&str>,
    filter: Option<&str>,
) -> LogOptions {
    if let Some(spec) = format.and_then(LogFormat::parse) {
        options.format = spec;
    }
    if let Some(spec) = level.and_then(LogLevel::parse) {
        options.level = spec;
    }
    if let Some(directives) = filter.filter(|d| !d.trim().is_empty()) {
        options.filter = Some(directives.to_string());
    }
    options
}

/// Install the global subscriber. Logs go to stderr so stdout stays the
/// caller's report.
pub fn init_logging(options: &LogOptions) {
    use std::io::IsTerminal;
    use std::sync::OnceLock;
    use tracing_subscriber::{fmt, EnvFilter};

    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let level = options.level.to_string();
        let filter = options
            .filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(level));
        let builder = fmt::fmt()
            .with_env_filter(filter)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(true);

        match options.format {
            LogFormat::Json => {
                let _ = tracing::subscriber::set_global_default(builder.json().finish());
            }
            LogFormat::Text => {
                let _ = tracing::subscriber::set_global_default(builder.compact().finish());
            }
        }
    });
}
