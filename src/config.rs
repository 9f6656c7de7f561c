//! Server-side configuration and startup errors.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `RUST_LOG`-style directive
    pub log_filter: String,
    /// Plain (non-ANSI) log output when set
    pub production: bool,
}

impl ServerConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self {
            log_filter: DEFAULT_LOG_FILTER.into(),
            production: false,
        };
        for (key, value) in vars {
            match key.as_ref() {
                "RUST_LOG" => {
                    let value: String = value.into();
                    if !value.trim().is_empty() {
                        config.log_filter = value;
                    }
                }
                "PRODUCTION" => config.production = true,
                _ => {}
            }
        }
        config
    }

    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(!self.production)
            .init();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Failed to load Leptos configuration: {0}")]
    Config(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() {
        let config = ServerConfig::from_vars(Vec::<(String, String)>::new());
        assert_eq!(config.log_filter, "info");
        assert!(!config.production);
    }

    #[test]
    fn reads_log_filter_and_production() {
        let config = ServerConfig::from_vars([
            ("RUST_LOG", "studio_arch=debug,tower_http=info"),
            ("PRODUCTION", "1"),
            ("HOME", "/root"),
        ]);
        assert_eq!(config.log_filter, "studio_arch=debug,tower_http=info");
        assert!(config.production);
    }

    #[test]
    fn blank_log_filter_keeps_default() {
        let config = ServerConfig::from_vars([("RUST_LOG", "  ")]);
        assert_eq!(config.log_filter, "info");
    }
}
