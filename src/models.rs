use serde::{Deserialize, Serialize};

/// Membership record for one rank, stored as `ranks/<rank>.json`.
/// Player order is insertion order; duplicates are rejected at the
/// manager level, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub rank: String,
    pub players: Vec<String>,
}

impl Roster {
    pub fn empty(rank: &str) -> Self {
        Self {
            rank: rank.to_string(),
            players: Vec::new(),
        }
    }
}
