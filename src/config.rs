//! Process-wide settings
//!
//! Loaded from the environment once at startup and injected into the
//! server state. Nothing reads these globals after boot.

use std::env;
use std::path::PathBuf;

/// Default port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory holding pipeline configuration files
pub const DEFAULT_ETL_DIR: &str = "data/etl";

/// Default admin tenant accepted by the authorization layer
pub const DEFAULT_ADMIN_TENANT: &str = "admin123";

/// Runtime settings for the service
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port the HTTP server binds to
    pub port: u16,

    /// Directory containing pipeline JSON files
    pub etl_dir: PathBuf,

    /// Tenant id accepted by the `tenant` request header
    pub admin_tenant: String,

    /// CORS origin to allow; any origin when unset
    pub cors_origin: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            etl_dir: PathBuf::from(DEFAULT_ETL_DIR),
            admin_tenant: DEFAULT_ADMIN_TENANT.to_string(),
            cors_origin: None,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults.
    ///
    /// Reads `PORT`, `ETL_DIR`, `ADMIN_TENANT`, and `CORS_ORIGIN`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            etl_dir: env::var("ETL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.etl_dir),
            admin_tenant: env::var("ADMIN_TENANT").unwrap_or(defaults.admin_tenant),
            cors_origin: env::var("CORS_ORIGIN").ok(),
        }
    }
}
