//! Kitchen configuration.

/// Environment variable toggling the event journal.
pub const RECORD_EVENTS_ENV: &str = "LARDER_RECORD_EVENTS";

/// Tunables for a [`crate::Kitchen`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KitchenConfig {
    /// Append cook/purge events to the kitchen's journal.
    pub record_events: bool,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            record_events: true,
        }
    }
}

impl KitchenConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; malformed values fall back to
    /// the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(RECORD_EVENTS_ENV) {
            match parse_flag(&raw) {
                Some(flag) => config.record_events = flag,
                None => tracing::warn!(
                    value = %raw,
                    "{} is not a boolean; keeping default",
                    RECORD_EVENTS_ENV
                ),
            }
        }
        config
    }

    pub fn with_record_events(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
