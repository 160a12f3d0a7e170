use crate::bootstrap;
use crate::catalog::CommandCatalog;
use crate::collection::{RecordCollection, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::logs::LogArchive;
use crate::paths::StoragePaths;
use crate::prompter::{NoticeLevel, Prompter};
use crate::roster::RosterManager;
use std::sync::Arc;

/// Reserved recipe name; excluded from listings but kept on disk as the
/// blank starting point for new recipes.
pub const RECIPE_TEMPLATE: &str = "_template";

/// Operation boundary between the presentation layer and the collections.
/// Every failure is caught here and reported through the prompter; nothing
/// escapes to terminate the session, and nothing is retried automatically.
pub struct ManagementConsole {
    paths: StoragePaths,
    recipes: RecordCollection,
    help_templates: RecordCollection,
    commands: CommandCatalog,
    ranks: RosterManager,
    logs: LogArchive,
    prompter: Arc<dyn Prompter>,
}

impl ManagementConsole {
    pub fn new(paths: StoragePaths, prompter: Arc<dyn Prompter>) -> Self {
        let recipes = RecordCollection::per_file_json(paths.recipes_dir.clone(), &[RECIPE_TEMPLATE]);
        let help_templates = RecordCollection::per_file_any(paths.help_templates_dir.clone());
        let commands = CommandCatalog::new(paths.commands_file.clone());
        let ranks = RosterManager::new(paths.ranks_dir.clone());
        let logs = LogArchive::new(paths.logs_dir.clone());
        Self {
            paths,
            recipes,
            help_templates,
            commands,
            ranks,
            logs,
            prompter,
        }
    }

    /// Seeds required directories and default rank rosters. Called once at
    /// startup, before the first listing.
    pub fn bootstrap(&self) -> bool {
        match bootstrap::apply(&self.paths) {
            Ok(()) => true,
            Err(error) => self.report(error),
        }
    }

    pub fn list_recipes(&self) -> Vec<String> {
        self.listing(self.recipes.list())
    }

    pub fn load_recipe(&self, name: &str) -> Option<String> {
        self.loaded(self.recipes.read(name))
    }

    pub fn save_recipe(&self, name: &str, raw: &str) -> bool {
        match self.recipes.write(name, raw) {
            Ok(_) => self.saved(&format!("Recipe '{}' saved successfully!", name)),
            Err(error) => self.report(error),
        }
    }

    pub fn list_help_templates(&self) -> Vec<String> {
        self.listing(self.help_templates.list())
    }

    pub fn load_help_template(&self, name: &str) -> Option<String> {
        self.loaded(self.help_templates.read(name))
    }

    pub fn save_help_template(&self, name: &str, raw: &str) -> bool {
        match self.help_templates.write(name, raw) {
            Ok(_) => self.saved(&format!("Template '{}' saved successfully!", name)),
            Err(error) => self.report(error),
        }
    }

    pub fn list_commands(&self) -> Vec<String> {
        self.listing(self.commands.list())
    }

    pub fn load_command(&self, name: &str) -> Option<String> {
        self.loaded(self.commands.read(name))
    }

    pub fn save_command(&self, name: &str, raw: &str) -> bool {
        match self.commands.write(name, raw) {
            Ok(WriteOutcome::Saved) => self.saved("Command saved successfully!"),
            Ok(WriteOutcome::NoMatch { submitted_key }) => {
                let shown = submitted_key.as_deref().unwrap_or(name);
                self.prompter.notify(
                    NoticeLevel::Warning,
                    &format!(
                        "No command named '{}' was found; the edit was not applied",
                        shown
                    ),
                );
                false
            }
            Err(error) => self.report(error),
        }
    }

    pub fn list_ranks(&self) -> Vec<String> {
        self.listing(self.ranks.list_ranks())
    }

    pub fn list_players(&self, rank: &str) -> Vec<String> {
        self.listing(self.ranks.list_players(rank))
    }

    pub fn add_player(&self, rank: &str, player: &str) -> bool {
        match self.ranks.add_player(rank, player) {
            Ok(()) => self.saved(&format!("Added {} to {}", player, rank)),
            Err(error) => self.report(error),
        }
    }

    pub fn remove_player(&self, rank: &str, player: &str) -> bool {
        match self.ranks.remove_player(rank, player) {
            Ok(()) => self.saved(&format!("Removed {} from {}", player, rank)),
            Err(error) => self.report(error),
        }
    }

    pub fn create_rank(&self, name: &str) -> bool {
        match self.ranks.create_rank(name) {
            Ok(()) => self.saved(&format!("Rank '{}' created", name)),
            Err(error) => self.report(error),
        }
    }

    /// Asks for confirmation first; declining leaves the roster on disk.
    pub fn remove_rank(&self, name: &str) -> bool {
        if !self.prompter.confirm(&format!("Remove rank '{}'?", name)) {
            return false;
        }
        match self.ranks.delete_rank(name) {
            Ok(()) => self.saved(&format!("Rank '{}' removed", name)),
            Err(error) => self.report(error),
        }
    }

    pub fn list_logs(&self) -> Vec<String> {
        self.listing(self.logs.list())
    }

    pub fn load_log(&self, name: &str) -> Option<String> {
        self.loaded(self.logs.read(name))
    }

    pub fn save_log(&self, name: &str, text: &str) -> bool {
        match self.logs.write(name, text) {
            Ok(()) => self.saved(&format!("Log file '{}' saved successfully!", name)),
            Err(error) => self.report(error),
        }
    }

    fn listing(&self, result: AppResult<Vec<String>>) -> Vec<String> {
        match result {
            Ok(keys) => keys,
            Err(error) => {
                self.report(error);
                Vec::new()
            }
        }
    }

    fn loaded(&self, result: AppResult<String>) -> Option<String> {
        match result {
            Ok(text) => Some(text),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    fn saved(&self, message: &str) -> bool {
        self.prompter.notify(NoticeLevel::Info, message);
        true
    }

    fn report(&self, error: AppError) -> bool {
        let level = match error {
            AppError::NotFound(_)
            | AppError::AlreadyExists(_)
            | AppError::AlreadyMember(_)
            | AppError::NotMember(_) => NoticeLevel::Warning,
            AppError::Validation(_) | AppError::Io(_) | AppError::Internal(_) => NoticeLevel::Error,
        };
        self.prompter.notify(level, &error.to_string());
        false
    }
}
