use std::env;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Names added to the roster at startup
    pub players: Vec<String>,
    /// Ask before resetting; when off, reset goes through immediately
    pub confirm_reset: bool,
    /// Print the round overview after every committed round
    pub show_history: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            players: parse_players(&env::var("BOERENBRIDGE_PLAYERS").unwrap_or_default()),
            confirm_reset: parse_bool(
                &env::var("BOERENBRIDGE_CONFIRM_RESET").unwrap_or_else(|_| "true".to_string()),
            )
            .context("Invalid BOERENBRIDGE_CONFIRM_RESET")?,
            show_history: parse_bool(
                &env::var("BOERENBRIDGE_SHOW_HISTORY").unwrap_or_else(|_| "true".to_string()),
            )
            .context("Invalid BOERENBRIDGE_SHOW_HISTORY")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            confirm_reset: true,
            show_history: true,
        }
    }
}

/// Comma separated names; blanks are dropped
pub fn parse_players(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "ja" => Ok(true),
        "0" | "false" | "no" | "off" | "nee" => Ok(false),
        other => bail!("expected true or false, got '{other}'"),
    }
}
