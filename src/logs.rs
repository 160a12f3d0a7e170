use crate::errors::{AppError, AppResult};
use crate::store;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Well-known log files, in discovery preference order.
pub const KNOWN_LOGS: &[&str] = &["alien_armor.log", "craftbot_debug.log", "trade_logs.txt"];

const LOG_EXTENSIONS: &[&str] = &["log", "txt"];

/// Free-form text files under the logs root. No structure is assumed and
/// writes are unvalidated overwrites.
pub struct LogArchive {
    logs_dir: PathBuf,
}

impl LogArchive {
    pub fn new(logs_dir: PathBuf) -> Self {
        Self { logs_dir }
    }

    /// Known filenames decide membership and initial position only; the
    /// final order is modification time, newest first, so a known file can
    /// land anywhere in the listing.
    pub fn list(&self) -> AppResult<Vec<String>> {
        if !self.logs_dir.is_dir() {
            return Ok(vec![format!(
                "Logs path not found: {}",
                self.logs_dir.display()
            )]);
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for name in KNOWN_LOGS {
            let path = self.logs_dir.join(name);
            if path.is_file() {
                files.push(path);
            }
        }

        let mut others: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&self.logs_dir).map_err(|error| AppError::Io(error.to_string()))? {
            let entry = entry.map_err(|error| AppError::Io(error.to_string()))?;
            let path = entry.path();
            if !path.is_file() || files.contains(&path) {
                continue;
            }
            let qualifies = path
                .extension()
                .and_then(|value| value.to_str())
                .is_some_and(|ext| LOG_EXTENSIONS.contains(&ext));
            if qualifies {
                others.push(path);
            }
        }
        others.sort();
        files.extend(others);

        files.sort_by_key(|path| std::cmp::Reverse(modified_at(path)));
        Ok(files
            .iter()
            .filter_map(|path| path.file_name().and_then(|value| value.to_str()))
            .map(str::to_string)
            .collect())
    }

    pub fn read(&self, name: &str) -> AppResult<String> {
        fs::read_to_string(self.logs_dir.join(name)).map_err(|error| match error.kind() {
            ErrorKind::NotFound => AppError::NotFound(format!("No log file named '{}'", name)),
            _ => AppError::Io(error.to_string()),
        })
    }

    pub fn write(&self, name: &str, text: &str) -> AppResult<()> {
        store::write_text_atomic(&self.logs_dir.join(name), text)
    }
}

fn modified_at(path: &Path) -> DateTime<Utc> {
    path.metadata()
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::UNIX_EPOCH)
}
