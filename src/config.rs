use std::path::PathBuf;

use crate::errors::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STORAGE_DIR: &str = "data/storage";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SEED_PASSWORD: &str = "admin123";

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// PostgreSQL URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub storage_dir: PathBuf,
    pub session_key: Option<String>,
    pub max_upload_bytes: usize,
    pub seed_demo: bool,
    pub seed_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_url: None,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            session_key: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            seed_demo: false,
            seed_password: DEFAULT_SEED_PASSWORD.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Config::default();

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::Internal(format!("MAX_UPLOAD_BYTES must be a positive integer, got '{raw}'"))
            })?,
            None => defaults.max_upload_bytes,
        };
        let seed_demo = match get("SEED_DEMO").as_deref() {
            None => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(AppError::Internal(format!("SEED_DEMO must be true or false, got '{other}'")));
            }
        };

        Ok(Config {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: get("DATABASE_URL"),
            storage_dir: get("STORAGE_DIR").map(PathBuf::from).unwrap_or(defaults.storage_dir),
            session_key: get("SESSION_KEY"),
            max_upload_bytes,
            seed_demo,
            seed_password: get("SEED_PASSWORD").unwrap_or(defaults.seed_password),
        })
    }
}
