//! Service settings read from the environment (after an optional `.env`).

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "account_service=info,tower_http=info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base for absolute `Location` headers, e.g. `https://accounts.example.com`.
    /// When unset the request `Host` header is used.
    pub public_url: Option<String>,
    pub body_limit: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
            body_limit: DEFAULT_BODY_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read `ACCOUNT_SERVICE_*` and `RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(host) = lookup("ACCOUNT_SERVICE_HOST").filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("ACCOUNT_SERVICE_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ACCOUNT_SERVICE_PORT",
                value: port,
            })?;
        }
        if let Some(url) = lookup("ACCOUNT_SERVICE_PUBLIC_URL").filter(|u| !u.is_empty()) {
            config.public_url = Some(url.trim_end_matches('/').to_string());
        }
        if let Some(limit) = lookup("ACCOUNT_SERVICE_BODY_LIMIT") {
            config.body_limit = match limit.parse() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "ACCOUNT_SERVICE_BODY_LIMIT",
                        value: limit,
                    })
                }
            };
        }
        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.is_empty()) {
            config.log_filter = filter;
        }
        Ok(config)
    }

    /// `host:port`, resolved by the listener so host names are accepted.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
