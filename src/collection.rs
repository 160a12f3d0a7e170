use crate::errors::{AppError, AppResult};
use crate::store;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// How a collection is laid out on disk. Per-file collections with a
/// `json` extension validate submissions as JSON before committing;
/// extension-free collections (help templates) accept any text and key
/// records by full file name instead of stem.
#[derive(Debug, Clone)]
pub enum StorageMode {
    PerFile {
        dir: PathBuf,
        extension: Option<String>,
        reserved: Vec<String>,
    },
    SingleArrayFile {
        file: PathBuf,
        array_field: String,
        key_field: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Saved,
    /// The array held no record whose key field matched the submitted
    /// one; the edit was dropped without inserting. Renaming a record by
    /// editing its key field lands here.
    NoMatch { submitted_key: Option<String> },
}

#[derive(Debug, Clone)]
pub struct RecordCollection {
    mode: StorageMode,
}

impl RecordCollection {
    pub fn new(mode: StorageMode) -> Self {
        Self { mode }
    }

    pub fn per_file_json(dir: PathBuf, reserved: &[&str]) -> Self {
        Self::new(StorageMode::PerFile {
            dir,
            extension: Some("json".to_string()),
            reserved: reserved.iter().map(ToString::to_string).collect(),
        })
    }

    pub fn per_file_any(dir: PathBuf) -> Self {
        Self::new(StorageMode::PerFile {
            dir,
            extension: None,
            reserved: Vec::new(),
        })
    }

    pub fn single_array_file(file: PathBuf, array_field: &str, key_field: &str) -> Self {
        Self::new(StorageMode::SingleArrayFile {
            file,
            array_field: array_field.to_string(),
            key_field: key_field.to_string(),
        })
    }

    pub fn list(&self) -> AppResult<Vec<String>> {
        match &self.mode {
            StorageMode::PerFile {
                dir,
                extension,
                reserved,
            } => list_directory(dir, extension.as_deref(), reserved),
            StorageMode::SingleArrayFile {
                file,
                array_field,
                key_field,
            } => list_array(file, array_field, key_field),
        }
    }

    pub fn read(&self, key: &str) -> AppResult<String> {
        match &self.mode {
            StorageMode::PerFile { dir, extension, .. } => {
                let path = record_path(dir, extension.as_deref(), key);
                fs::read_to_string(&path).map_err(|error| match error.kind() {
                    ErrorKind::NotFound => {
                        AppError::NotFound(format!("No record named '{}'", key))
                    }
                    _ => AppError::Io(error.to_string()),
                })
            }
            StorageMode::SingleArrayFile {
                file,
                array_field,
                key_field,
            } => {
                let records = load_array(file, array_field)?;
                let record = records
                    .iter()
                    .find(|record| record_key(record, key_field).as_deref() == Some(key))
                    .ok_or_else(|| AppError::NotFound(format!("No record named '{}'", key)))?;
                serde_json::to_string_pretty(record)
                    .map_err(|error| AppError::Internal(error.to_string()))
            }
        }
    }

    pub fn write(&self, key: &str, raw: &str) -> AppResult<WriteOutcome> {
        match &self.mode {
            StorageMode::PerFile { dir, extension, .. } => {
                if extension.as_deref() == Some("json") {
                    serde_json::from_str::<Value>(raw)
                        .map_err(|error| AppError::Validation(error.to_string()))?;
                }
                store::write_text_atomic(&record_path(dir, extension.as_deref(), key), raw)?;
                Ok(WriteOutcome::Saved)
            }
            StorageMode::SingleArrayFile {
                file,
                array_field,
                key_field,
            } => {
                let submitted: Value = serde_json::from_str(raw)
                    .map_err(|error| AppError::Validation(error.to_string()))?;
                write_array_record(file, array_field, key_field, submitted)
            }
        }
    }

    pub fn delete(&self, key: &str) -> AppResult<()> {
        match &self.mode {
            StorageMode::PerFile { dir, extension, .. } => {
                let path = record_path(dir, extension.as_deref(), key);
                fs::remove_file(&path).map_err(|error| match error.kind() {
                    ErrorKind::NotFound => {
                        AppError::NotFound(format!("No record named '{}'", key))
                    }
                    _ => AppError::Io(error.to_string()),
                })
            }
            StorageMode::SingleArrayFile { file, .. } => Err(AppError::Internal(format!(
                "delete is not supported for array-backed collection {}",
                file.display()
            ))),
        }
    }
}

fn record_path(dir: &Path, extension: Option<&str>, key: &str) -> PathBuf {
    match extension {
        Some(ext) => dir.join(format!("{}.{}", key, ext)),
        None => dir.join(key),
    }
}

fn list_directory(dir: &Path, extension: Option<&str>, reserved: &[String]) -> AppResult<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut keys = Vec::new();
    for entry in fs::read_dir(dir).map_err(|error| AppError::Io(error.to_string()))? {
        let entry = entry.map_err(|error| AppError::Io(error.to_string()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(key) = entry_key(&path, extension) else {
            continue;
        };
        if reserved.iter().any(|name| name == &key) {
            continue;
        }
        keys.push(key);
    }
    keys.sort();
    Ok(keys)
}

fn entry_key(path: &Path, extension: Option<&str>) -> Option<String> {
    match extension {
        Some(ext) => {
            if path.extension().and_then(|value| value.to_str()) != Some(ext) {
                return None;
            }
            path.file_stem()
                .and_then(|value| value.to_str())
                .map(str::to_string)
        }
        None => path
            .file_name()
            .and_then(|value| value.to_str())
            .map(str::to_string),
    }
}

fn list_array(file: &Path, array_field: &str, key_field: &str) -> AppResult<Vec<String>> {
    let records = match load_array(file, array_field) {
        Ok(records) => records,
        Err(AppError::NotFound(_)) => return Ok(Vec::new()),
        Err(error) => {
            tracing::warn!(path = %file.display(), error = %error, "listing malformed array file as empty");
            return Ok(Vec::new());
        }
    };
    let mut keys: Vec<String> = records
        .iter()
        .filter_map(|record| record_key(record, key_field))
        .collect();
    keys.sort_by_key(|key| key.to_lowercase());
    Ok(keys)
}

fn load_array(file: &Path, array_field: &str) -> AppResult<Vec<Value>> {
    let document = store::load_document(file)?;
    let Some(records) = document.get(array_field).and_then(Value::as_array) else {
        return Ok(Vec::new());
    };
    Ok(records.clone())
}

fn write_array_record(
    file: &Path,
    array_field: &str,
    key_field: &str,
    submitted: Value,
) -> AppResult<WriteOutcome> {
    let submitted_key = record_key(&submitted, key_field);
    let mut document = store::load_document(file)?;

    let outcome = match document.get_mut(array_field).and_then(Value::as_array_mut) {
        Some(records) => {
            let matched = submitted_key.as_deref().and_then(|key| {
                records
                    .iter()
                    .position(|record| record_key(record, key_field).as_deref() == Some(key))
            });
            match matched {
                Some(index) => {
                    records[index] = submitted;
                    WriteOutcome::Saved
                }
                None => WriteOutcome::NoMatch { submitted_key },
            }
        }
        None => WriteOutcome::NoMatch { submitted_key },
    };

    // The document is rewritten even on a miss; the content is unchanged
    // but the on-disk formatting is normalized, matching the original tool.
    store::save_document(file, &document)?;
    Ok(outcome)
}

fn record_key(record: &Value, key_field: &str) -> Option<String> {
    record
        .get(key_field)
        .and_then(Value::as_str)
        .map(str::to_string)
}
