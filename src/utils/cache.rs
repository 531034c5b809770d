//! Caching utilities for CMS requests.
//!
//! Provides sessionStorage-based caching for the current browser session.
//! Cache is automatically cleared when the tab/window is closed, so editors'
//! changes show up on the next visit while in-session navigation between
//! pages stays instant.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone)]
pub enum CacheError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota exceeded, private mode).
    WriteFailed,
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}
