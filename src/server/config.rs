use chrono_tz::Tz;
use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "public/uploads";
const DEFAULT_REFERENCE_TIMEZONE: &str = "Europe/Berlin";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Root directory holding uploaded attraction images.
    pub upload_dir: PathBuf,

    /// Timezone whose calendar day defines "today" for current reservations.
    pub reference_timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let timezone_name = std::env::var("REFERENCE_TIMEZONE")
            .unwrap_or_else(|_| DEFAULT_REFERENCE_TIMEZONE.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            reference_timezone: parse_timezone(&timezone_name)?,
        })
    }
}

fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
}
