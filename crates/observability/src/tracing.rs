//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter directive variable; `RUST_LOG` is used when it is unset.
pub const LOG_ENV: &str = "LARDER_LOG";
/// Output format variable: `json` (default) or `pretty`.
pub const LOG_FORMAT_ENV: &str = "LARDER_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Logging configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when `LARDER_LOG_FORMAT` held something unrecognized.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_ENV).or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.filter = filter;
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "json" => config.format = LogFormat::Json,
                "pretty" | "text" => config.format = LogFormat::Pretty,
                _ => config.rejected_format = Some(raw),
            }
        }

        config
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init()
            .is_ok(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok(),
    };

    if installed {
        if let Some(raw) = &config.rejected_format {
            ::tracing::warn!(value = %raw, "unknown {} value; using json", LOG_FORMAT_ENV);
        }
    }
}
