use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `students.csv` and `institutions.csv`.
    pub data_dir: PathBuf,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            session_ttl_minutes: parse_ttl(&env_or("SESSION_TTL_MINUTES", "480"))?,
        })
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join("students.csv")
    }

    pub fn institutions_path(&self) -> PathBuf {
        self.data_dir.join("institutions.csv")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_ttl(raw: &str) -> Result<i64> {
    let minutes = raw
        .trim()
        .parse::<i64>()
        .context("SESSION_TTL_MINUTES must be a whole number of minutes")?;
    anyhow::ensure!(minutes > 0, "SESSION_TTL_MINUTES must be positive, got {minutes}");
    let ttl = Duration::try_minutes(minutes)
        .with_context(|| format!("SESSION_TTL_MINUTES={minutes} is too large"))?;
    anyhow::ensure!(
        Utc::now().checked_add_signed(ttl).is_some(),
        "SESSION_TTL_MINUTES={minutes} puts session expiry beyond the supported date range"
    );
    Ok(minutes)
}
