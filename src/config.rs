use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the `MOODTUNE_` prefix.
/// For example: `MOODTUNE_SERVER__PORT=5001`, `MOODTUNE_MUSIC_SERVICE__ENABLED=true`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Live music service configuration
    #[serde(default)]
    pub music_service: MusicServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MusicServiceConfig {
    /// Query the live service for recommendations (falls back to the catalog on failure)
    #[serde(default)]
    pub enabled: bool,

    /// OAuth client ID
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Client-credentials token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Web API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

impl Default for MusicServiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            client_id: None,
            client_secret: None,
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
            timeout_s: default_timeout_s(),
        }
    }
}

fn default_token_url() -> String {
    "https://accounts.spotify.com/api/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.spotify.com/v1".to_string()
}

fn default_timeout_s() -> u64 {
    10
}

impl MusicServiceConfig {
    /// Fill unset credentials from the conventional `SPOTIFY_CLIENT_ID` and
    /// `SPOTIFY_CLIENT_SECRET` variables
    fn with_fallback_credentials(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.client_id.is_none() {
            self.client_id = lookup("SPOTIFY_CLIENT_ID");
        }
        if self.client_secret.is_none() {
            self.client_secret = lookup("SPOTIFY_CLIENT_SECRET");
        }
        self
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `MOODTUNE_` and use
    /// double underscores for nested values:
    /// - `MOODTUNE_SERVER__HOST` -> server.host
    /// - `MOODTUNE_SERVER__PORT` -> server.port
    /// - `MOODTUNE_MUSIC_SERVICE__CLIENT_ID` -> music_service.client_id
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOODTUNE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app: AppConfig = config.try_deserialize()?;
        app.music_service = app
            .music_service
            .with_fallback_credentials(|key| std::env::var(key).ok());
        Ok(app)
    }
}
