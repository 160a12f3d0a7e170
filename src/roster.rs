use crate::collection::RecordCollection;
use crate::errors::{AppError, AppResult};
use crate::models::Roster;
use crate::store;
use std::path::PathBuf;

/// Rank membership over a directory of `ranks/<rank>.json` roster files.
/// Nothing is cached; every operation re-reads the backing file, so edits
/// made by a companion process show up on the next call.
pub struct RosterManager {
    ranks_dir: PathBuf,
    records: RecordCollection,
}

impl RosterManager {
    pub fn new(ranks_dir: PathBuf) -> Self {
        let records = RecordCollection::per_file_json(ranks_dir.clone(), &[]);
        Self { ranks_dir, records }
    }

    pub fn list_ranks(&self) -> AppResult<Vec<String>> {
        self.records.list()
    }

    pub fn list_players(&self, rank: &str) -> AppResult<Vec<String>> {
        Ok(self.load(rank)?.players)
    }

    pub fn add_player(&self, rank: &str, player: &str) -> AppResult<()> {
        let mut roster = self.load(rank)?;
        if roster.players.iter().any(|existing| existing == player) {
            return Err(AppError::AlreadyMember(format!(
                "{} is already in {}",
                player, rank
            )));
        }
        roster.players.push(player.to_string());
        self.persist(&roster)
    }

    pub fn remove_player(&self, rank: &str, player: &str) -> AppResult<()> {
        let mut roster = self.load(rank)?;
        let Some(index) = roster.players.iter().position(|existing| existing == player) else {
            return Err(AppError::NotMember(format!("{} is not in {}", player, rank)));
        };
        roster.players.remove(index);
        self.persist(&roster)
    }

    pub fn create_rank(&self, name: &str) -> AppResult<()> {
        if self.rank_path(name).exists() {
            return Err(AppError::AlreadyExists(format!(
                "Rank '{}' already exists",
                name
            )));
        }
        self.persist(&Roster::empty(name))
    }

    /// Destructive and irreversible; callers obtain confirmation through
    /// the prompter before invoking.
    pub fn delete_rank(&self, name: &str) -> AppResult<()> {
        self.records.delete(name)
    }

    fn load(&self, rank: &str) -> AppResult<Roster> {
        let raw = self.records.read(rank)?;
        serde_json::from_str(&raw).map_err(|error| AppError::Validation(error.to_string()))
    }

    fn persist(&self, roster: &Roster) -> AppResult<()> {
        let value =
            serde_json::to_value(roster).map_err(|error| AppError::Internal(error.to_string()))?;
        store::save_document(&self.rank_path(&roster.rank), &value)
    }

    fn rank_path(&self, name: &str) -> PathBuf {
        self.ranks_dir.join(format!("{}.json", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (tempfile::TempDir, RosterManager) {
        let root = tempfile::tempdir().expect("temp ranks root");
        let manager = RosterManager::new(root.path().join("ranks"));
        (root, manager)
    }

    #[test]
    fn rank_listing_stays_sorted_through_churn() {
        let (_root, manager) = manager();
        for name in ["VIP", "Admin", "Moderator"] {
            manager.create_rank(name).expect("create rank");
        }
        manager.delete_rank("Moderator").expect("delete rank");
        manager.create_rank("Builder").expect("create rank");

        let ranks = manager.list_ranks().expect("list ranks");
        assert_eq!(ranks, vec!["Admin", "Builder", "VIP"]);
        let mut deduped = ranks.clone();
        deduped.dedup();
        assert_eq!(deduped, ranks);
    }

    #[test]
    fn create_existing_rank_is_rejected() {
        let (_root, manager) = manager();
        manager.create_rank("Admin").expect("create rank");
        let error = manager.create_rank("Admin").expect_err("must reject");
        assert!(matches!(error, AppError::AlreadyExists(_)));
    }

    #[test]
    fn delete_missing_rank_is_not_found() {
        let (_root, manager) = manager();
        let error = manager.delete_rank("Ghost").expect_err("must fail");
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[test]
    fn duplicate_add_is_reported_and_list_grows_once() {
        let (_root, manager) = manager();
        manager.create_rank("VIP").expect("create rank");
        manager.add_player("VIP", "Sredna").expect("first add");
        let error = manager
            .add_player("VIP", "Sredna")
            .expect_err("second add must fail");
        assert!(matches!(error, AppError::AlreadyMember(_)));
        assert_eq!(manager.list_players("VIP").expect("players").len(), 1);
    }

    #[test]
    fn remove_preserves_order_of_remaining_players() {
        let (_root, manager) = manager();
        manager.create_rank("Admin").expect("create rank");
        for player in ["alpha", "bravo", "charlie"] {
            manager.add_player("Admin", player).expect("add player");
        }
        manager.remove_player("Admin", "bravo").expect("remove player");
        assert_eq!(
            manager.list_players("Admin").expect("players"),
            vec!["alpha", "charlie"]
        );
    }

    #[test]
    fn remove_of_non_member_leaves_roster_unchanged() {
        let (_root, manager) = manager();
        manager.create_rank("Admin").expect("create rank");
        manager.add_player("Admin", "alpha").expect("add player");
        let error = manager
            .remove_player("Admin", "bravo")
            .expect_err("must fail");
        assert!(matches!(error, AppError::NotMember(_)));
        assert_eq!(manager.list_players("Admin").expect("players"), vec!["alpha"]);
    }

    #[test]
    fn membership_of_missing_rank_is_not_found() {
        let (_root, manager) = manager();
        let error = manager.add_player("Ghost", "alpha").expect_err("must fail");
        assert!(matches!(error, AppError::NotFound(_)));
    }
}
