//! Server configuration.

use serde::{Deserialize, Serialize};

use fracbond_pricing::pricing::DEFAULT_FRACTIONS;

/// Port of the pricing service.
pub const PRICING_PORT: u16 = 5012;

/// Port of the recommendation service.
pub const RECOMMENDATION_PORT: u16 = 5010;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fractions per bond when a pricing request does not say
    #[serde(default = "default_fractions")]
    pub default_fractions: u32,

    /// Allow cross-origin requests
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    PRICING_PORT
}

fn default_fractions() -> u32 {
    DEFAULT_FRACTIONS
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_fractions: default_fractions(),
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Defaults for the pricing service.
    pub fn pricing_default() -> Self {
        Self::default()
    }

    /// Defaults for the recommendation service.
    pub fn recommendation_default() -> Self {
        Self {
            port: RECOMMENDATION_PORT,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Load `path` if it exists, otherwise use `fallback`.
    pub fn load_or(path: &str, fallback: Self) -> Result<Self, std::io::Error> {
        if std::path::Path::new(path).exists() {
            tracing::info!("Loading configuration from {}", path);
            Self::from_file(path)
        } else {
            tracing::info!("Using default configuration");
            Ok(fallback)
        }
    }
}
