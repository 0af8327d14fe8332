use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_LOG_FILTER: &str = "info,tolka=debug,tower_http=debug";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    /// JSON output is chosen by settings, by `LOG_FORMAT=json`, or by
    /// running in production.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_format = logging.json
            || environment.is_production()
            || std::env::var(LOG_FORMAT_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        Self {
            environment,
            json_format,
            filter: logging
                .level
                .clone()
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
