use serde::Deserialize;
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid entry {value:?}")]
    Invalid { var: &'static str, value: String },
}

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub auditorium: AuditoriumConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Seat layout: one width per row
#[derive(Debug, Clone, Deserialize)]
pub struct AuditoriumConfig {
    pub widths: Vec<usize>,
}

// Party sizes the demo binary seats, in order
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub parties: Vec<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            app: AppConfig {
                environment: var("APP_ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "seat_inventory=debug"),
            },
            auditorium: AuditoriumConfig {
                widths: parse_list("AUDITORIUM_ROWS", &var("AUDITORIUM_ROWS", "5,5,5"))?,
            },
            demo: DemoConfig {
                parties: parse_list("DEMO_PARTIES", &var("DEMO_PARTIES", "2,3,4"))?,
            },
        })
    }
}

// Comma separated list of non-negative integers; blank entries are skipped.
fn parse_list(var: &'static str, raw: &str) -> Result<Vec<usize>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse().map_err(|_| ConfigError::Invalid {
                var,
                value: entry.to_string(),
            })
        })
        .collect()
}
