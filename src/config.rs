//! Server configuration loaded from environment variables.

use std::path::PathBuf;

use crate::dataset::default_data_path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Launch CSV to load at startup (from LAUNCHDECK_DATA)
    pub data_path: PathBuf,
    /// Bind address (from LAUNCHDECK_HOST)
    pub host: String,
    /// Bind port (from LAUNCHDECK_PORT)
    pub port: u16,
    /// Allowed CORS origins (from LAUNCHDECK_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let data_path = std::env::var("LAUNCHDECK_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_path());

        let host = std::env::var("LAUNCHDECK_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = std::env::var("LAUNCHDECK_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = std::env::var("LAUNCHDECK_CORS_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|origins| !origins.is_empty());

        Self {
            data_path,
            host,
            port,
            cors_origins,
        }
    }

    /// Local defaults with an explicit dataset path (for testing).
    pub fn local(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: None,
        }
    }

    /// Restrict CORS to the given origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
