/**
 * Durable Token Storage
 *
 * The client keeps exactly one value between runs: the bearer token, in a
 * slot named `token`. `FileTokenStorage` keeps it as a file under the
 * platform data directory; `MemoryTokenStorage` keeps it in process for
 * tests and short-lived clients.
 */

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::shared::ConfigError;

/// Name of the storage slot holding the bearer token
pub const TOKEN_SLOT: &str = "token";

/// Application directory under the platform data directory
const APP_DIR: &str = "shopsmart";

/// Single-slot durable storage for the bearer token
///
/// Operations are synchronous so that logout completes before it returns.
pub trait TokenStorage: Send + Sync {
    /// Read the stored token; `Ok(None)` when the slot is empty
    fn load(&self) -> Result<Option<String>, ClientError>;

    /// Replace the stored token
    fn save(&self, token: &str) -> Result<(), ClientError>;

    /// Empty the slot; clearing an empty slot succeeds
    fn clear(&self) -> Result<(), ClientError>;
}

/// File-backed token storage
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Store the token slot inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_SLOT),
        }
    }

    /// Store the token slot under the platform data directory
    ///
    /// # Errors
    ///
    /// `ClientError::Config` when the platform has no data directory.
    pub fn in_data_dir() -> Result<Self, ClientError> {
        let base = dirs::data_dir().ok_or(ConfigError::MissingValue("platform data directory"))?;
        Ok(Self::new(base.join(APP_DIR)))
    }

    /// Use the configured storage directory, or the platform data directory
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        match config.storage_dir() {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::in_data_dir(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>, ClientError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token storage
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already in the slot
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.slot() = None;
        Ok(())
    }
}
