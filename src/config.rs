//! Optional HTTP client settings, loadable from a TOML file.
//!
//! Nothing here is read implicitly: callers that want a config file pass its
//! path to [`FetchConfig::load`]. A missing file yields `FetchConfig::default()`.
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::feed::DEFAULT_MAX_BODY_BYTES;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// HTTP settings used to build the fetch client.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// The defaults reproduce a plain `reqwest::Client`: no timeouts and the
/// library's default User-Agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds. 0 = no timeout.
    pub timeout_secs: u64,

    /// Connection timeout in seconds. 0 = no timeout.
    pub connect_timeout_secs: u64,

    /// Custom User-Agent header.
    pub user_agent: Option<String>,

    /// Maximum accepted response body size in bytes. 0 = no limit.
    pub max_body_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 0,
            connect_timeout_secs: 0,
            user_agent: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl FetchConfig {
    /// SEC-014: Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 4] = [
        "timeout_secs",
        "connect_timeout_secs",
        "user_agent",
        "max_body_bytes",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(FetchConfig::default())`
    /// - Empty file → `Ok(FetchConfig::default())`
    /// - Larger than 1 MB → `Err(ConfigError::TooLarge)`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No fetch config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        // SEC-014: size is taken from the open handle and the read is capped,
        // so a file that grows after the check still cannot exhaust memory.
        let size = file.metadata()?.len();
        if size > Self::MAX_FILE_SIZE {
            return Err(ConfigError::TooLarge(format!(
                "{} is {} bytes (max {} bytes)",
                path.display(),
                size,
                Self::MAX_FILE_SIZE
            )));
        }
        let mut content = String::new();
        file.take(Self::MAX_FILE_SIZE).read_to_string(&mut content)?;

        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            timeout_secs = config.timeout_secs,
            connect_timeout_secs = config.connect_timeout_secs,
            user_agent = config.user_agent.as_deref().unwrap_or("<default>"),
            max_body_bytes = config.max_body_bytes,
            "Loaded fetch configuration"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text. Blank input yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let table: toml::Table = content.parse()?;
        table
            .keys()
            .filter(|key| !Self::KNOWN_KEYS.contains(&key.as_str()))
            .for_each(|key| tracing::warn!(key = %key, "Unknown fetch config key, ignoring"));

        Ok(toml::from_str(content)?)
    }

    /// Builds a `reqwest::Client` honouring these settings.
    pub fn build_client(&self) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if self.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(self.timeout_secs));
        }
        if self.connect_timeout_secs > 0 {
            builder = builder.connect_timeout(Duration::from_secs(self.connect_timeout_secs));
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        Ok(builder.build()?)
    }
}

// ============================================================================
// Tests
// ============================================================================
