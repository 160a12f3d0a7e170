use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Interactive surface supplied by the embedding presentation layer.
/// The core only reaches for it on destructive confirmations and to
/// report operation outcomes; it never blocks on input otherwise.
pub trait Prompter: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
    fn ask_text(&self, prompt: &str) -> Option<String>;
    fn notify(&self, level: NoticeLevel, message: &str);
}
