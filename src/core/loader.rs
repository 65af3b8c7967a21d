//! Collection file utilities
//!
//! Each collection lives in one pretty-printed JSON array. Loading never
//! fails: a missing or unparsable file yields an empty collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::error::{AerocodeError, Result};

/// Load every record of a collection file
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "collection file absent, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read collection file");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not parse collection file");
            Vec::new()
        }
    }
}

/// Overwrite a collection file with the given records
pub fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items).map_err(|source| AerocodeError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| AerocodeError::Storage {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), records = items.len(), "collection saved");
    Ok(())
}

/// Create the data directory if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| AerocodeError::Storage {
        path: dir.to_path_buf(),
        source,
    })
}
