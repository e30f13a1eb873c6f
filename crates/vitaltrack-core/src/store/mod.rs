//! Durable key-value storage for vitaltrack.
//!
//! Persisted state lives behind the [`KeyValueStore`] port: one JSON
//! document per fixed key. Reads fail open, so a missing or malformed value
//! is reported as absent and logged rather than surfaced as an error.

mod memory;
mod schema;
mod sqlite;

pub use memory::*;
pub use schema::*;
pub use sqlite::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Key holding the JSON-encoded medical profile.
pub const MEDICAL_DETAILS_KEY: &str = "medicalDetails";

/// Key holding the JSON-encoded adherence mapping.
pub const FOOD_ADHERENCE_KEY: &str = "foodAdherence";

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lock poisoned: {0}")]
    Poisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StoreError::Poisoned(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// String key-value persistence port.
///
/// Writes are last-writer-wins; no versioning or merge is applied.
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Returns whether a value was present.
    fn remove(&self, key: &str) -> StoreResult<bool>;
}

/// Read and decode the JSON document under `key`.
///
/// Returns `None` when the key is absent, unreadable, or does not decode.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored value");
            return None;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "storage read failed; treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed stored value; treating as absent");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)?;
    tracing::debug!(key, bytes = json.len(), "stored value");
    Ok(())
}
