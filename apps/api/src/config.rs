use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,
    pub cloudinary_folder: String,
    pub admin_token: String,
    /// Year shown by `/api/v1/wall` when none is given.
    pub default_year: i32,
    pub layout_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            cloudinary_cloud_name: require_env("CLOUDINARY_CLOUD_NAME")?,
            cloudinary_api_key: require_env("CLOUDINARY_API_KEY")?,
            cloudinary_api_secret: require_env("CLOUDINARY_API_SECRET")?,
            cloudinary_folder: std::env::var("CLOUDINARY_FOLDER")
                .unwrap_or_else(|_| "t111cw".to_string()),
            admin_token: require_env("ADMIN_TOKEN")?,
            default_year: match std::env::var("DEFAULT_YEAR") {
                Ok(v) => v
                    .parse::<i32>()
                    .context("DEFAULT_YEAR must be a year number")?,
                Err(_) => Utc::now().year(),
            },
            layout_seed: std::env::var("LAYOUT_SEED")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("LAYOUT_SEED must be an unsigned integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/sponsorwall_test".to_string(),
            cloudinary_cloud_name: "test".to_string(),
            cloudinary_api_key: "key".to_string(),
            cloudinary_api_secret: "secret".to_string(),
            cloudinary_folder: "t111cw".to_string(),
            admin_token: "test-admin-token".to_string(),
            default_year: 2024,
            layout_seed: Some(7),
            port: 8080,
            rust_log: "debug".to_string(),
        }
    }
}
