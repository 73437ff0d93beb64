//! Server configuration
//!
//! All configuration is read from the environment exactly once at startup
//! into `Settings`, then injected explicitly into the services that need it.
//! Nothing reads ambient process state afterwards.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret has no safe default; refusing to start beats
    /// issuing tokens signed with a placeholder.
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,

    #[error("{name} is not valid: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime settings for the server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl Settings {
    /// Load settings from the environment. Call after `dotenv`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            Err(_) => 5000,
        };

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:shelfmark.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(value) => {
                let cost = value.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                    name: "BCRYPT_COST",
                    value: value.clone(),
                })?;
                // bcrypt only accepts costs in this window.
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::InvalidValue {
                        name: "BCRYPT_COST",
                        value,
                    });
                }
                cost
            }
            Err(_) => 10,
        };

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            bcrypt_cost,
        })
    }
}
