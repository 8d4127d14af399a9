// Store backend - loads, validates and persists glossary files
// Stateless: every function works on the path or document it is given

use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::document::GlossaryDocument;
use crate::error::GlossaryError;

/// Top-level keys of a glossary file, no more and no fewer
pub const TOP_LEVEL_KEYS: [&str; 5] =
    ["title", "author", "description", "revision_date", "contents"];

/// Keys of every entry under `contents`
pub const ENTRY_KEYS: [&str; 2] = ["definitions", "references"];

/// Date format used for `revision_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TIME_FORMAT: &str = "%H:%M:%S";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Indentation used when writing glossary files
const INDENT: &[u8] = b"    ";

/// Build an empty glossary dated today
pub fn materialize_blank(title: &str, author: &str, description: &str) -> GlossaryDocument {
    GlossaryDocument {
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        revision_date: current_date(),
        contents: Default::default(),
    }
}

/// Check that `content` is an object whose key set is exactly [`TOP_LEVEL_KEYS`]
pub fn validate_shape(content: &Value) -> bool {
    has_exact_keys(content, &TOP_LEVEL_KEYS)
}

/// Check that `entry` is an object with exactly [`ENTRY_KEYS`], each an array of strings
pub fn validate_entry_shape(entry: &Value) -> bool {
    has_exact_keys(entry, &ENTRY_KEYS)
        && ENTRY_KEYS.iter().all(|key| {
            entry[*key]
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string))
        })
}

fn has_exact_keys(content: &Value, keys: &[&str]) -> bool {
    match content.as_object() {
        Some(map) => map.len() == keys.len() && keys.iter().all(|key| map.contains_key(*key)),
        None => false,
    }
}

/// Read and validate the glossary file at `path`
pub fn load(path: &Path) -> Result<GlossaryDocument, GlossaryError> {
    if !path.exists() {
        return Err(GlossaryError::ResourceNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(GlossaryError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| GlossaryError::PersistenceError(e.to_string()))?;

    let content: Value =
        serde_json::from_slice(&bytes).map_err(|e| GlossaryError::MalformedContent {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    check_structure(&content).map_err(|reason| GlossaryError::NotAGlossary {
        path: path.to_path_buf(),
        reason,
    })?;

    serde_json::from_value(content).map_err(|e| GlossaryError::NotAGlossary {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Full structural check of a parsed file, describing the first violation
fn check_structure(content: &Value) -> Result<(), String> {
    if !validate_shape(content) {
        let found: Vec<&str> = content
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        return Err(format!(
            "expected top-level keys {:?}, found {:?}",
            TOP_LEVEL_KEYS, found
        ));
    }

    // Metadata must be strings and contents a mapping
    for key in TOP_LEVEL_KEYS {
        let value = &content[key];
        let ok = if key == "contents" {
            value.is_object()
        } else {
            value.is_string()
        };
        if !ok {
            return Err(format!("'{}' has the wrong type", key));
        }
    }

    if let Some(contents) = content["contents"].as_object() {
        for (keyword, entry) in contents {
            if keyword.trim().is_empty() {
                return Err("contents holds an empty keyword".to_string());
            }
            if !validate_entry_shape(entry) {
                return Err(format!(
                    "entry '{}' must have exactly {:?} as string lists",
                    keyword, ENTRY_KEYS
                ));
            }
        }
    }

    Ok(())
}

/// Serialize `content` with sorted keys and fixed indentation
pub fn to_canonical_json(content: &GlossaryDocument) -> Result<Vec<u8>, GlossaryError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    content
        .serialize(&mut serializer)
        .map_err(|e| GlossaryError::PersistenceError(e.to_string()))?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Overwrite the file at `path` with the full document
///
/// Writes a sibling temp file, syncs it, then renames it over `path`.
pub fn persist(content: &GlossaryDocument, path: &Path) -> Result<(), GlossaryError> {
    let bytes = to_canonical_json(content)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GlossaryError::PersistenceError(e.to_string()))?;
    }

    let temp_path = temp_path(path);

    let result = write_synced(&temp_path, &bytes).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| GlossaryError::PersistenceError(format!("Failed to rename: {}", e)))
    });
    if result.is_err() {
        // Never leave a partial temp file behind
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), GlossaryError> {
    let mut file = File::create(path).map_err(|e| {
        GlossaryError::PersistenceError(format!("Failed to create temp file: {}", e))
    })?;
    file.write_all(bytes)
        .map_err(|e| GlossaryError::PersistenceError(format!("Failed to write: {}", e)))?;
    file.sync_all()
        .map_err(|e| GlossaryError::PersistenceError(format!("Failed to sync: {}", e)))
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "glossary".to_string());
    path.with_file_name(format!("{}.tmp", file_name))
}

/// Today's date as `YYYY-MM-DD`
pub fn current_date() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// The time of day as `HH:MM:SS`
pub fn current_time() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Date and time as `YYYY-MM-DD HH:MM:SS`
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
