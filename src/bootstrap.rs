use crate::errors::{AppError, AppResult};
use crate::models::Roster;
use crate::paths::StoragePaths;
use crate::store;
use std::fs;

/// Ranks seeded on first run.
pub const DEFAULT_RANKS: &[&str] = &["Admin", "Moderator", "VIP", "User"];

/// One-shot seeding of the storage tree: ensures the record directories
/// exist, then creates any missing default rank roster with an empty
/// player list. Existing files are never touched, so a second run is a
/// no-op. Invoked once by the composing entry point, never as a side
/// effect of constructing unrelated objects.
pub fn apply(paths: &StoragePaths) -> AppResult<()> {
    for dir in [&paths.ranks_dir, &paths.help_templates_dir] {
        fs::create_dir_all(dir).map_err(|error| AppError::Io(error.to_string()))?;
    }
    for rank in DEFAULT_RANKS {
        let path = paths.ranks_dir.join(format!("{}.json", rank));
        if path.exists() {
            continue;
        }
        let value = serde_json::to_value(Roster::empty(rank))
            .map_err(|error| AppError::Internal(error.to_string()))?;
        store::save_document(&path, &value)?;
        tracing::debug!(rank = %rank, "created default rank roster");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::Path;

    fn snapshot(ranks_dir: &Path) -> BTreeMap<String, String> {
        fs::read_dir(ranks_dir)
            .expect("read ranks dir")
            .map(|entry| {
                let path = entry.expect("dir entry").path();
                let name = path.file_name().unwrap().to_str().unwrap().to_string();
                let content = fs::read_to_string(&path).expect("read roster");
                (name, content)
            })
            .collect()
    }

    #[test]
    fn empty_tree_gains_exactly_the_default_rosters() {
        let root = tempfile::tempdir().expect("temp root");
        let paths = StoragePaths::from_control_panel(root.path());
        apply(&paths).expect("bootstrap");

        let files = snapshot(&paths.ranks_dir);
        assert_eq!(
            files.keys().cloned().collect::<Vec<_>>(),
            vec!["Admin.json", "Moderator.json", "User.json", "VIP.json"]
        );
        for (name, content) in &files {
            let roster: Roster = serde_json::from_str(content).expect("parse roster");
            assert_eq!(format!("{}.json", roster.rank), *name);
            assert!(roster.players.is_empty());
        }
        assert!(paths.help_templates_dir.is_dir());
    }

    #[test]
    fn second_run_changes_nothing() {
        let root = tempfile::tempdir().expect("temp root");
        let paths = StoragePaths::from_control_panel(root.path());
        apply(&paths).expect("first bootstrap");
        let before = snapshot(&paths.ranks_dir);
        apply(&paths).expect("second bootstrap");
        assert_eq!(snapshot(&paths.ranks_dir), before);
    }

    #[test]
    fn existing_roster_is_never_overwritten() {
        let root = tempfile::tempdir().expect("temp root");
        let paths = StoragePaths::from_control_panel(root.path());
        fs::create_dir_all(&paths.ranks_dir).expect("create ranks dir");
        let populated = "{\"rank\": \"Admin\", \"players\": [\"Sredna\"]}";
        fs::write(paths.ranks_dir.join("Admin.json"), populated).expect("seed Admin");

        apply(&paths).expect("bootstrap");
        assert_eq!(
            fs::read_to_string(paths.ranks_dir.join("Admin.json")).expect("read Admin"),
            populated
        );
    }
}
