//! Environment-driven bot configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Session store capacity and TTL settings
//! - 1.0.0: Token, guild, log level, style sets path and page size

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::features::styles::DEFAULT_STYLES_PER_PAGE;

/// Discord select menus hold at most 25 options
pub const MAX_STYLES_PER_PAGE: usize = 25;
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_guild_id: Option<String>,
    pub log_level: String,
    /// External style-set document; the embedded catalog is used when unset
    pub style_sets_path: Option<String>,
    pub styles_per_page: usize,
    pub session_capacity: usize,
    pub session_ttl: Duration,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::vars().collect())
    }

    /// Build configuration from an explicit variable map
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let discord_token = get("DISCORD_TOKEN")
            .ok_or_else(|| anyhow!("DISCORD_TOKEN must be set (environment or .env file)"))?;

        let styles_per_page = match get("STYLES_PER_PAGE") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("STYLES_PER_PAGE is not a number: {raw}"))?,
            None => DEFAULT_STYLES_PER_PAGE,
        };
        if styles_per_page == 0 || styles_per_page > MAX_STYLES_PER_PAGE {
            return Err(anyhow!(
                "STYLES_PER_PAGE must be between 1 and {MAX_STYLES_PER_PAGE}, got {styles_per_page}"
            ));
        }

        let session_capacity = match get("SESSION_CAPACITY") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("SESSION_CAPACITY is not a number: {raw}"))?,
            None => DEFAULT_SESSION_CAPACITY,
        };
        if session_capacity == 0 {
            return Err(anyhow!("SESSION_CAPACITY must be at least 1"));
        }

        let session_ttl_secs = match get("SESSION_TTL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("SESSION_TTL_SECS is not a number: {raw}"))?,
            None => DEFAULT_SESSION_TTL_SECS,
        };
        if session_ttl_secs == 0 {
            return Err(anyhow!("SESSION_TTL_SECS must be at least 1"));
        }

        Ok(Config {
            discord_token,
            discord_guild_id: get("DISCORD_GUILD_ID"),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            style_sets_path: get("STYLE_SETS_PATH"),
            styles_per_page,
            session_capacity,
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }
}
