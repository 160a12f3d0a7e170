use std::path::{Path, PathBuf};

/// Resolved storage roots, constructed once by the embedding process and
/// injected into every component. Nothing in the core discovers paths on
/// its own.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub recipes_dir: PathBuf,
    pub commands_file: PathBuf,
    pub ranks_dir: PathBuf,
    pub help_templates_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl StoragePaths {
    /// Standard layout under a resolved Control Panel root. Locating that
    /// root is the launcher's problem, not ours.
    pub fn from_control_panel(root: &Path) -> Self {
        let config = root.join("config");
        Self {
            recipes_dir: config.join("recipes"),
            commands_file: config.join("commands.json"),
            ranks_dir: config.join("ranks"),
            help_templates_dir: config.join("help-templates"),
            logs_dir: root.join("logs"),
        }
    }
}
