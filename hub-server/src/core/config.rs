/// Server configuration for the franchise hub
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing filter level |
/// | LOG_DIR | (unset) | daily-rolling log file directory |
/// | SEED_DEMO_DATA | true outside production | load the demo dataset at startup |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 ENVIRONMENT=production cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// tracing filter level (trace | debug | info | warn | error)
    pub log_level: String,
    /// Directory for daily-rolling log files, stdout only when unset
    pub log_dir: Option<String>,
    /// Load the demo dataset into the in-memory stores at startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(environment != "production");

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            seed_demo_data,
        }
    }

    /// Override the port, used by tests binding to an ephemeral port.
    pub fn with_overrides(http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
