pub mod bootstrap;
pub mod catalog;
pub mod collection;
pub mod console;
pub mod errors;
pub mod logs;
pub mod models;
pub mod paths;
pub mod prompter;
pub mod roster;
pub mod store;
pub mod telemetry;

pub use catalog::CommandCatalog;
pub use collection::{RecordCollection, StorageMode, WriteOutcome};
pub use console::ManagementConsole;
pub use errors::{AppError, AppResult};
pub use logs::LogArchive;
pub use models::Roster;
pub use paths::StoragePaths;
pub use prompter::{NoticeLevel, Prompter};
pub use roster::RosterManager;
