//! API server configuration.

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// Maximum accepted request body size in bytes. `None` keeps axum's
    /// default limit (2 MB).
    pub body_limit: Option<usize>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            body_limit: None,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable              | Default                 |
    /// |-----------------------|-------------------------|
    /// | `ECHOCHAT_BIND_ADDR`  | `127.0.0.1:3000`        |
    /// | `ECHOCHAT_BODY_LIMIT` | unset (axum's 2 MB)     |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("ECHOCHAT_BIND_ADDR").unwrap_or(defaults.bind_addr),
            body_limit: lookup("ECHOCHAT_BODY_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .or(defaults.body_limit),
        }
    }
}
