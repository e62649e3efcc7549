use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub oracle: OracleSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OracleSettings {
    #[serde(default = "default_oracle_enabled")]
    pub enabled: bool,
    #[serde(default = "default_oracle_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_oracle_model")]
    pub model: String,
    #[serde(default = "default_oracle_timeout_ms")]
    pub timeout_ms: u64,
}

impl OracleSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            enabled: default_oracle_enabled(),
            endpoint: default_oracle_endpoint(),
            api_key: String::new(),
            model: default_oracle_model(),
            timeout_ms: default_oracle_timeout_ms(),
        }
    }
}

fn default_oracle_enabled() -> bool { true }
fn default_oracle_endpoint() -> String { "https://api.openai.com/v1".to_string() }
fn default_oracle_model() -> String { "gpt-4o-mini".to_string() }
fn default_oracle_timeout_ms() -> u64 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_length: default_min_query_length(),
            session_ttl_secs: default_session_ttl_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_min_query_length() -> usize { 2 }
fn default_session_ttl_secs() -> u64 { 1800 }
fn default_max_sessions() -> u64 { 10_000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    /// TOML file of `[[members]]`; the built-in roster is used when unset
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_mock_user_id")]
    pub mock_user_id: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            mock_user_id: default_mock_user_id(),
        }
    }
}

fn default_mock_user_id() -> String { "kanishk-k".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LGC__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LGC__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_secret_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_secret_overrides(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LGC")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// The oracle key may also come from a bare ORACLE_API_KEY, which wins
fn apply_secret_overrides(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("ORACLE_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("oracle.api_key", api_key)?
            .build(),
        _ => Ok(settings),
    }
}
