use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// How listing endpoints treat several filter parameters given together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every given filter applies (logical AND).
    #[default]
    Combined,
    /// Only the highest-priority filter applies:
    /// `featured` > `category` > `phase` for resources, `phase` > `week` for the checklist.
    Precedence,
}

impl FromStr for FilterMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(FilterMode::Combined),
            "precedence" => Ok(FilterMode::Precedence),
            other => bail!("unknown filter mode '{other}' (expected 'combined' or 'precedence')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub filter_mode: FilterMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            filter_mode: FilterMode::Combined,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            filter_mode: match std::env::var("LISTING_FILTER_MODE") {
                Ok(raw) => raw
                    .parse::<FilterMode>()
                    .context("LISTING_FILTER_MODE is invalid")?,
                Err(_) => defaults.filter_mode,
            },
        })
    }
}
