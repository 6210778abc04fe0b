use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Profile under which sample items are loaded at startup
pub const LOCAL_PROFILE: &str = "local";

/// Which repository variant backs the service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sql,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sql" => Ok(StoreKind::Sql),
            other => Err(AppError::InvalidInput(format!(
                "unknown store kind '{}', expected 'memory' or 'sql'",
                other
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::Sql => write!(f, "sql"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub store: StoreKind,
    pub profile: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("ITEM_STORE") {
            Some(raw) => raw
                .parse::<StoreKind>()
                .map_err(|e: AppError| AppError::Config(format!("ITEM_STORE: {}", e)))?,
            None => StoreKind::Sql,
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            store,
            profile: lookup("APP_PROFILE").unwrap_or_else(|| LOCAL_PROFILE.to_string()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }

    pub fn seeds_sample_data(&self) -> bool {
        self.profile == LOCAL_PROFILE
    }
}
