//! Shared configuration and display types for vidpulse.

pub mod app_config;
pub mod categories;
pub mod config;
pub mod videos;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{Category, CategoryMap};
pub use config::{load_app_config, load_app_config_from_env};
pub use videos::{VideoRecord, NO_COMMENTS_TEXT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
