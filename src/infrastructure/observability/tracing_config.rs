use crate::presentation::config::{Environment, LoggingSettings};

/// Subscriber options resolved at startup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of the settings file.
    pub fn new(environment: Environment, logging: &LoggingSettings) -> Self {
        let forced_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment,
            json_format: logging.json || forced_json,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new(Environment::Local, &LoggingSettings::default())
    }
}
