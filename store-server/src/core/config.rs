//! Server configuration
//!
//! Every setting can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | ./store-data | database and log files |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | DELIVERY_FEE | 8 | flat checkout delivery fee (dinars) |
//! | ADMIN_EMAIL | admin@store.local | first-run console account |
//! | ADMIN_PASSWORD | change-me | first-run console password |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_LEVEL | info | tracing level |
//! | LOG_DIR | (unset) | daily-rolling log files when set |

use crate::auth::JwtConfig;
use crate::cart::DEFAULT_DELIVERY_FEE;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded database and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Flat delivery fee added to every order
    pub delivery_fee: f64,
    /// JWT settings for the admin console
    pub jwt: JwtConfig,
    /// Seed credentials for the first admin account
    pub admin_email: String,
    pub admin_password: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./store-data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            delivery_fee: std::env::var("DELIVERY_FEE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_DELIVERY_FEE),
            jwt: JwtConfig::from_env(),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@store.local".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the bits tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
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
