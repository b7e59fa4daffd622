//! Helpers shared by the JSON file adapters.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::error::StorageError;
use crate::domain::foundation::UserId;

/// File name holding a user's records.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced so a user id can never
/// escape the data directory.
pub(crate) fn user_file_name(user_id: &UserId) -> String {
    let safe: String = user_id
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.json", safe)
}

/// Reads a JSON array from `path`. A missing file reads as empty.
pub(crate) async fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::io(path, e)),
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|e| StorageError::deserialization(path, e))
}

/// Writes `items` as a pretty-printed JSON array, creating parent dirs.
///
/// The content goes to a sibling temp file first and is renamed into place.
pub(crate) async fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(items).map_err(|e| StorageError::serialization(path, e))?;

    let tmp = temp_path(path);
    fs::write(&tmp, json)
        .await
        .map_err(|e| StorageError::io(&tmp, e))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| StorageError::io(path, e))
}

/// Removes `path`, ignoring a missing file.
pub(crate) async fn remove_file(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::io(path, e)),
    }
}

/// Lists the `.json` files directly under `dir`. A missing dir lists nothing.
pub(crate) async fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::io(dir, e)),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StorageError::io(dir, e))?
    {
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
