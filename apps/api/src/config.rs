use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a demo-friendly default, so a bare `cargo run` works.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Inbox that receives the new-submission alert after every analysis.
    pub hr_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            hr_email: std::env::var("HR_EMAIL")
                .unwrap_or_else(|_| "hr@example.com".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            hr_email: "hr@example.com".to_string(),
        }
    }
}
