// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Runtime configuration for both tools
#[derive(Debug, Clone)]
pub struct Config {
    // Input limits
    pub max_password_length: usize,
    pub max_message_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Input limits
            max_password_length: 99,
            max_message_length: 999,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to the
    /// defaults for anything missing or unparseable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Input limits
        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(len) if len > 0 => config.max_password_length = len,
                _ => log::warn!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("MAX_MESSAGE_LENGTH") {
            match val.parse::<usize>() {
                Ok(len) if len > 0 => config.max_message_length = len,
                _ => log::warn!("Ignoring invalid MAX_MESSAGE_LENGTH '{}'", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_buffer_limits() {
        let config = config_from(&[]);
        assert_eq!(config.max_password_length, 99);
        assert_eq!(config.max_message_length, 999);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("MAX_PASSWORD_LENGTH", "20"),
            ("MAX_MESSAGE_LENGTH", "50"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/cyberkit.log"),
        ]);
        assert_eq!(config.max_password_length, 20);
        assert_eq!(config.max_message_length, 50);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/cyberkit.log")));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("MAX_PASSWORD_LENGTH", "0"),
            ("MAX_MESSAGE_LENGTH", "lots"),
            ("LOG_LEVEL", "loud"),
            ("LOG_FILE", "  "),
        ]);
        assert_eq!(config.max_password_length, 99);
        assert_eq!(config.max_message_length, 999);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
    }
}
