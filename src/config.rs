use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::ErrorMode;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub normalizer: NormalizerSettings,
    #[serde(default)]
    pub response: ResponseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerSettings {
    #[serde(default = "default_normalizer_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            endpoint: default_normalizer_endpoint(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

fn default_normalizer_endpoint() -> String { "http://127.0.0.1:3000/normalize".to_string() }

impl NormalizerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSettings {
    /// Report "no match" and normalizer faults alike as 500
    #[serde(default = "default_legacy_errors")]
    pub legacy_errors: bool,
}

impl Default for ResponseSettings {
    fn default() -> Self {
        Self {
            legacy_errors: default_legacy_errors(),
        }
    }
}

fn default_legacy_errors() -> bool { true }

impl ResponseSettings {
    pub fn error_mode(&self) -> ErrorMode {
        ErrorMode::from_legacy_flag(self.legacy_errors)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GEOCODE__)
    /// 5. The bare `PORT` variable honoured by the legacy service
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        Self::finish(builder)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // e.g., GEOCODE__SERVER__PORT -> server.port
        let mut builder = builder.add_source(
            Environment::with_prefix("GEOCODE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = legacy_port(std::env::var("PORT").ok()) {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }
}

/// `PORT` as the legacy service read it: an empty value counts as unset
fn legacy_port(raw: Option<String>) -> Option<String> {
    raw.filter(|port| !port.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.normalizer.timeout(), Duration::from_secs(30));
        assert_eq!(settings.response.error_mode(), ErrorMode::Legacy);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "simple-geocode-compat-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
[server]
workers = 2

[normalizer]
endpoint = "http://normalizer.internal/normalize"
timeout_secs = 5

[response]
legacy_errors = false
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.workers, Some(2));
        assert_eq!(settings.normalizer.endpoint, "http://normalizer.internal/normalize");
        assert_eq!(settings.normalizer.timeout(), Duration::from_secs(5));
        assert_eq!(settings.response.error_mode(), ErrorMode::Split);
    }

    #[test]
    fn test_empty_port_is_unset() {
        assert_eq!(legacy_port(None), None);
        assert_eq!(legacy_port(Some(String::new())), None);
        assert_eq!(legacy_port(Some("  ".to_string())), None);
        assert_eq!(legacy_port(Some("8080".to_string())), Some("8080".to_string()));
    }
}
