use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn load_document(path: &Path) -> AppResult<Value> {
    let raw = fs::read_to_string(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => AppError::NotFound(format!("No document at {}", path.display())),
        _ => AppError::Io(error.to_string()),
    })?;
    serde_json::from_str(&raw).map_err(|error| AppError::Validation(error.to_string()))
}

/// Serialization of a value we already hold cannot fail under normal
/// operation; if it does, that is a bug and surfaces as `Internal`.
pub fn save_document(path: &Path, value: &Value) -> AppResult<()> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|error| AppError::Internal(error.to_string()))?;
    write_text_atomic(path, &rendered)
}

/// Writes to a temporary sibling and renames it over the destination, so a
/// concurrent reader observes either the old content or the new, never a
/// truncated prefix.
pub fn write_text_atomic(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| AppError::Io(error.to_string()))?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, content).map_err(|error| AppError::Io(error.to_string()))?;
    fs::rename(&tmp_path, path).map_err(|error| AppError::Io(error.to_string()))?;
    Ok(())
}
