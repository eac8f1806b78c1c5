//! Key-value persistence used to remember whether a session is active across
//! reloads. The session store only ever touches the marker keys defined here;
//! everything else in the backing store belongs to the view layer.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Persisted Session Marker. Its presence alone means "a session existed".
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Written and removed together with the access marker, never read on restore.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid storage contents: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Durable string key-value store, modeled after browser local storage.
pub trait SessionStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
