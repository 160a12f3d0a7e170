use crate::collection::{RecordCollection, WriteOutcome};
use crate::errors::AppResult;
use std::path::PathBuf;

pub const COMMANDS_ARRAY_FIELD: &str = "Commands";
pub const COMMAND_KEY_FIELD: &str = "Name";

/// Chat commands live as one array inside `commands.json`, keyed by each
/// record's `Name`. Listing order is alphabetical and case-insensitive,
/// decoupled from storage order. There is no delete; commands are edited
/// in place only.
pub struct CommandCatalog {
    records: RecordCollection,
}

impl CommandCatalog {
    pub fn new(commands_file: PathBuf) -> Self {
        Self {
            records: RecordCollection::single_array_file(
                commands_file,
                COMMANDS_ARRAY_FIELD,
                COMMAND_KEY_FIELD,
            ),
        }
    }

    pub fn list(&self) -> AppResult<Vec<String>> {
        self.records.list()
    }

    pub fn read(&self, name: &str) -> AppResult<String> {
        self.records.read(name)
    }

    /// Matching happens on the submitted record's `Name`, not the original
    /// selection; an edit that changes `Name` therefore targets a
    /// different key and is dropped when nothing matches it.
    pub fn write(&self, name: &str, raw: &str) -> AppResult<WriteOutcome> {
        self.records.write(name, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn seeded_catalog(root: &std::path::Path) -> CommandCatalog {
        fs::write(
            root.join("commands.json"),
            json!({"Commands": [{"Name": "trade", "Cooldown": 30}, {"Name": "Recipes"}]}).to_string(),
        )
        .expect("seed commands file");
        CommandCatalog::new(root.join("commands.json"))
    }

    #[test]
    fn listing_is_case_insensitive_alphabetical() {
        let root = tempfile::tempdir().expect("temp root");
        let catalog = seeded_catalog(root.path());
        assert_eq!(
            catalog.list().expect("list"),
            vec!["Recipes".to_string(), "trade".to_string()]
        );
    }

    #[test]
    fn read_returns_pretty_printed_single_record() {
        let root = tempfile::tempdir().expect("temp root");
        let catalog = seeded_catalog(root.path());
        let text = catalog.read("trade").expect("read command");
        assert!(text.starts_with('{'));
        assert!(text.contains("\"Name\": \"trade\""));
        assert!(text.contains("\"Cooldown\": 30"));
        assert!(!text.contains("Recipes"));
    }

    #[test]
    fn missing_catalog_file_lists_empty() {
        let root = tempfile::tempdir().expect("temp root");
        let catalog = CommandCatalog::new(root.path().join("commands.json"));
        assert!(catalog.list().expect("list").is_empty());
    }

    #[test]
    fn write_preserves_position_of_edited_record() {
        let root = tempfile::tempdir().expect("temp root");
        let catalog = seeded_catalog(root.path());
        catalog
            .write("trade", "{\"Name\": \"trade\", \"Cooldown\": 60}")
            .expect("write command");

        let raw = fs::read_to_string(root.path().join("commands.json")).expect("read file");
        let document: serde_json::Value = serde_json::from_str(&raw).expect("parse file");
        let names: Vec<&str> = document["Commands"]
            .as_array()
            .expect("array")
            .iter()
            .map(|record| record["Name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, vec!["trade", "Recipes"]);
        assert_eq!(document["Commands"][0]["Cooldown"], 60);
    }
}
