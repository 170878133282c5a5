use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    /// Log every SQL statement issued through sqlx.
    pub database_log: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_log = match std::env::var("DATABASE_LOG") {
            Ok(value) => parse_bool("DATABASE_LOG", value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            database_log,
        })
    }
}

fn parse_bool(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
