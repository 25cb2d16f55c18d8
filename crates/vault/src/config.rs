//! Vault configuration.
//!
//! Loaded from an optional JSON file; every field has a default so a config
//! file only needs the keys it changes.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use helixvault_codec::{ChecksumRule, Codec, MappingStrategy, RedundancyLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigError, StoreError};
use crate::store::{JsonLogStore, MemoryStore, RecordStore, SqliteStore};

/// Default log file for the JSON backend.
pub const DEFAULT_JSON_PATH: &str = "helixvault.json";
/// Default database file for the SQLite backend.
pub const DEFAULT_SQLITE_PATH: &str = "helixvault.db";

/// Record log backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Sqlite,
    Memory,
}

impl Backend {
    pub fn default_path(&self) -> PathBuf {
        match self {
            Self::Json => PathBuf::from(DEFAULT_JSON_PATH),
            Self::Sqlite => PathBuf::from(DEFAULT_SQLITE_PATH),
            Self::Memory => PathBuf::new(),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            _ => Err(format!("Unknown backend: {s}. Available: json, sqlite, memory")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub backend: Backend,
    /// Falls back to the backend's default path when unset.
    pub store_path: Option<PathBuf>,
    pub default_level: RedundancyLevel,
    pub checksum_rule: ChecksumRule,
    pub strategy: MappingStrategy,
}

impl VaultConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn codec(&self) -> Codec {
        Codec::new(self.strategy, self.checksum_rule)
    }

    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| self.backend.default_path())
    }

    /// Open the configured record log.
    pub fn open_store(&self) -> Result<Box<dyn RecordStore>, StoreError> {
        let path = self.resolved_store_path();
        debug!(backend = %self.backend, path = %path.display(), "opening record store");
        Ok(match self.backend {
            Backend::Json => Box::new(JsonLogStore::open(path)?),
            Backend::Sqlite => Box::new(SqliteStore::open(path)?),
            Backend::Memory => Box::new(MemoryStore::new()),
        })
    }
}
