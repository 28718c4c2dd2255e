//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present. `GCP_PROJECT_ID` is required; when the
    /// Firestore emulator is in use (`FIRESTORE_EMULATOR_HOST` set), any
    /// project id works.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
