//! Application configuration loaded from environment variables.
//!
//! Every field has a default, so an empty environment resolves fine. A `.env`
//! file in the working directory seeds variables first; real environment
//! variables always win because dotenvy never overwrites an existing one.
//! Resolution is fail-fast: a single malformed value fails the whole load.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer};
use strum::{Display, EnumString};

use crate::error::AppError;

/// Log severity vocabulary accepted by `LOG_LEVEL` (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    // === Application ===
    /// Display name reported by the `info` command.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Configured version string (distinct from the compiled crate version).
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Debug mode: forces the log filter down to `debug`.
    #[serde(default, deserialize_with = "de_bool")]
    pub debug: bool,

    // === Server ===
    /// Host to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether an external watcher is expected to restart the server on change.
    #[serde(default, deserialize_with = "de_bool")]
    pub reload: bool,

    // === Logging ===
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR).
    #[serde(default, deserialize_with = "de_log_level")]
    pub log_level: LogLevel,
}

fn default_app_name() -> String {
    "service-template".to_string()
}

fn default_app_version() -> String {
    "0.0.0".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Parse a conventional truthy/falsy vocabulary into a bool.
///
/// Accepts true/false, 1/0, yes/no and on/off, case-insensitive. Anything
/// else is a type error that fails the whole resolution.
fn de_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(serde::de::Error::custom(format!(
            "invalid boolean {value:?} (expected true/false, 1/0, yes/no or on/off)"
        ))),
    }
}

fn de_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(|_| {
        serde::de::Error::custom(format!(
            "invalid log level {value:?} (expected TRACE, DEBUG, INFO, WARN or ERROR)"
        ))
    })
}

/// Process-wide cache: at most one successful resolution per process.
static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Load configuration from environment, reading a `.env` file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Return the cached configuration, resolving it on first call.
    ///
    /// Every subsequent call returns the identical instance without touching
    /// the environment again. Concurrent first calls converge on a single
    /// resolved instance. A failed resolution is not cached, so the error
    /// propagates to whichever consumer triggers it.
    pub fn get() -> crate::Result<&'static Config> {
        CONFIG.get_or_try_init(|| {
            let config = Self::load()?;
            config.validate().map_err(AppError::InvalidConfig)?;
            Ok(config)
        })
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.app_name.trim().is_empty() {
            return Err("APP_NAME must not be empty".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("HOST must not be empty".to_string());
        }

        Ok(())
    }

    /// Tracing filter directive derived from the settings.
    pub fn log_filter(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(vars: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = resolve(&[]).unwrap();

        assert_eq!(config.app_name, "service-template");
        assert_eq!(config.app_version, "0.0.0");
        assert!(!config.debug);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(!config.reload);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn overrides_are_honored_and_rest_defaults() {
        let config = resolve(&[
            ("APP_NAME", "custom-app"),
            ("DEBUG", "true"),
            ("PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(config.app_name, "custom-app");
        assert!(config.debug);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn resolution_is_deterministic() {
        let vars = [("APP_NAME", "twice"), ("PORT", "8081")];
        assert_eq!(resolve(&vars).unwrap(), resolve(&vars).unwrap());
    }

    #[test]
    fn variable_names_are_case_insensitive() {
        let config = resolve(&[("PoRt", "9001"), ("host", "127.0.0.1")]).unwrap();

        assert_eq!(config.port, 9001);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn unknown_variables_are_ignored() {
        let config = resolve(&[("SOME_OTHER_TOOL", "whatever")]).unwrap();

        assert_eq!(config.port, 8000);
    }

    #[test]
    fn malformed_port_fails_resolution() {
        assert!(resolve(&[("PORT", "not-a-number")]).is_err());
    }

    #[test]
    fn out_of_range_port_fails_resolution() {
        assert!(resolve(&[("PORT", "70000")]).is_err());
        assert!(resolve(&[("PORT", "-1")]).is_err());
    }

    #[test]
    fn boolean_vocabulary() {
        for truthy in ["true", "TRUE", "1", "yes", "on", "On"] {
            let config = resolve(&[("DEBUG", truthy)]).unwrap();
            assert!(config.debug, "expected {truthy:?} to parse as true");
        }

        for falsy in ["false", "0", "no", "off", "OFF"] {
            let config = resolve(&[("RELOAD", falsy)]).unwrap();
            assert!(!config.reload, "expected {falsy:?} to parse as false");
        }

        assert!(resolve(&[("DEBUG", "maybe")]).is_err());
    }

    #[test]
    fn log_level_is_parsed_case_insensitively() {
        let config = resolve(&[("LOG_LEVEL", "debug")]).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_level.to_string(), "DEBUG");

        assert!(resolve(&[("LOG_LEVEL", "verbose")]).is_err());
    }

    #[test]
    fn validate_rejects_empty_app_name() {
        let mut config = resolve(&[]).unwrap();
        config.app_name = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_host() {
        let mut config = resolve(&[]).unwrap();
        config.host = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn log_filter_prefers_debug_flag() {
        let mut config = resolve(&[("LOG_LEVEL", "warn")]).unwrap();
        assert_eq!(config.log_filter(), "WARN");

        config.debug = true;
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn cached_instance_is_shared() {
        let first = Config::get().unwrap();
        let second = Config::get().unwrap();

        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn concurrent_first_access_converges_on_one_instance() {
        let barrier = std::sync::Arc::new(std::sync::Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = barrier.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    Config::get().unwrap() as *const Config as usize
                })
            })
            .collect();

        let pointers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(pointers.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
