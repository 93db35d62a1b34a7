//! Diagnostic logging setup
//!
//! The engine only emits `debug`/`trace` events, so nothing is printed unless
//! a level is requested through [`LoggingConfig`] or the `WHICH_LOG` variable.
//! Output always goes to stderr to keep stdout reserved for results.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{WhichError, WhichResult};

static LOGGER_INSTANCE: OnceCell<LoggingConfig> = OnceCell::new();

/// Variable holding the log filter directive.
pub const LOG_ENV_VARIABLE: &str = "WHICH_LOG";

const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `debug` or `which_core=trace`.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Compact,
    Pretty,
    #[cfg(feature = "logging-json")]
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var(LOG_ENV_VARIABLE).unwrap_or_else(|_| DEFAULT_LEVEL.to_string()),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Level implied by a repeated `-v` flag; `None` keeps the configured one.
    pub fn level_for_verbosity(verbosity: u8) -> Option<&'static str> {
        match verbosity {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: LoggingConfig) -> WhichResult<()> {
    LOGGER_INSTANCE.get_or_try_init(|| -> WhichResult<LoggingConfig> {
        setup_tracing_subscriber(&config)?;
        Ok(config)
    })?;

    tracing::debug!("logging initialized");
    Ok(())
}

/// The configuration of the installed subscriber, if any.
pub fn current() -> Option<&'static LoggingConfig> {
    LOGGER_INSTANCE.get()
}

fn setup_tracing_subscriber(config: &LoggingConfig) -> WhichResult<()> {
    let filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .map_err(|e| WhichError::Logging(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Plain => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        #[cfg(feature = "logging-json")]
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| WhichError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LoggingConfig::level_for_verbosity(0), None);
        assert_eq!(LoggingConfig::level_for_verbosity(1), Some("info"));
        assert_eq!(LoggingConfig::level_for_verbosity(2), Some("debug"));
        assert_eq!(LoggingConfig::level_for_verbosity(7), Some("trace"));
    }

    #[test]
    #[serial]
    fn test_default_level_reads_environment() {
        let saved = std::env::var_os(LOG_ENV_VARIABLE);

        std::env::set_var(LOG_ENV_VARIABLE, "which_core=trace");
        let configured = LoggingConfig::default();
        std::env::remove_var(LOG_ENV_VARIABLE);
        let fallback = LoggingConfig::default();

        if let Some(value) = saved {
            std::env::set_var(LOG_ENV_VARIABLE, value);
        }

        assert_eq!(configured.level, "which_core=trace");
        assert_eq!(fallback.level, "warn");
    }

    #[test]
    #[serial]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default()
            .with_level("not a valid directive ===")
            .with_format(LogFormat::Plain);
        init(config).expect("First initialization must succeed");
        init(LoggingConfig::default().with_level("trace")).expect("Second call is a no-op");

        let installed = current().expect("Subscriber must be recorded");
        assert_eq!(installed.format, LogFormat::Plain);
    }
}
