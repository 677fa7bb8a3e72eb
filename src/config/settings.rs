//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DATA_DIR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::domain::{IdAssignment, IdStrategy};

/// Where records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One pretty-printed JSON array per entity type, rewritten on every mutation
    #[default]
    File,
    /// Relational database through SeaORM
    Database,
}

impl StorageBackend {
    /// The database variant takes ids from the client, the file variant
    /// always assigns them itself.
    pub fn id_assignment(self) -> IdAssignment {
        match self {
            StorageBackend::File => IdAssignment::Server,
            StorageBackend::Database => IdAssignment::Client,
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "json" => Ok(StorageBackend::File),
            "database" | "db" => Ok(StorageBackend::Database),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Database => write!(f, "database"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub database_url: String,
    pub id_strategy: IdStrategy,
    /// Accept the bypass password at login. Off unless explicitly enabled.
    pub insecure_demo_mode: bool,
    pub server_host: String,
    pub server_port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("storage_backend", &self.storage_backend)
            .field("data_dir", &self.data_dir)
            .field("database_url", &"[REDACTED]")
            .field("id_strategy", &self.id_strategy)
            .field("insecure_demo_mode", &self.insecure_demo_mode)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            id_strategy: IdStrategy::default(),
            insecure_demo_mode: false,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let insecure_demo_mode = parse_var("INSECURE_DEMO_MODE", defaults.insecure_demo_mode);
        if insecure_demo_mode {
            tracing::warn!("INSECURE_DEMO_MODE is enabled: the bypass password logs into any account");
        }

        Self {
            storage_backend: parse_var("STORAGE_BACKEND", defaults.storage_backend),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            id_strategy: parse_var("ID_STRATEGY", defaults.id_strategy),
            insecure_demo_mode,
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
        }
    }

    /// How ids are assigned for the configured backend.
    pub fn id_assignment(&self) -> IdAssignment {
        self.storage_backend.id_assignment()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Read and parse an environment variable, keeping `default` when it is
/// unset or invalid.
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
            default
        }),
        Err(_) => default,
    }
}
