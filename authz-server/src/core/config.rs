/// Server configuration
///
/// # Environment variables
///
/// Every option can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | REQUEST_TIMEOUT_MS | 30000 | request timeout in milliseconds |
/// | SEED_BUILTIN | true | seed the built-in permission/role catalog on startup |
///
/// `LOG_LEVEL` and `LOG_DIR` are consumed earlier, when
/// [`crate::setup_environment`] initializes logging.
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SEED_BUILTIN=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Whether to seed the built-in catalog at startup
    pub seed_builtin: bool,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            seed_builtin: std::env::var("SEED_BUILTIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            request_timeout_ms: 30000,
            seed_builtin: true,
        }
    }
}
