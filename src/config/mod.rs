// ABOUTME: Environment-only runtime configuration for the surfcast crate
// ABOUTME: Reads SURFCAST_* variables with documented defaults, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Runtime configuration from environment variables.
//!
//! Configuration is environment-only; there is no config file layer. Every
//! variable has a default suitable for local development:
//!
//! | Variable               | Default                       |
//! |------------------------|-------------------------------|
//! | `SURFCAST_DATABASE_URL`| `sqlite:./data/surfcast.db`   |
//! | `SURFCAST_LOG_LEVEL`   | `info` (falls back to `RUST_LOG`) |
//! | `SURFCAST_LOG_FORMAT`  | `pretty`                      |

use std::env;

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/surfcast.db";

/// Top-level runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Logging level and format
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is set but not valid unicode.
    pub fn from_env() -> AppResult<Self> {
        let database_url = match env::var("SURFCAST_DATABASE_URL") {
            Ok(url) => url,
            Err(env::VarError::NotPresent) => DEFAULT_DATABASE_URL.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(AppError::config(
                    "SURFCAST_DATABASE_URL is not valid unicode",
                ))
            }
        };
        Ok(Self {
            database_url,
            logging: LoggingConfig::from_env(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            logging: LoggingConfig::default(),
        }
    }
}
