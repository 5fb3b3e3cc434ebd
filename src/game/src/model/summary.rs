use common::model::messages::Id;
use serde::{Deserialize, Serialize};

/// Final result of a match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    #[serde(default)]
    pub id: Id,
    pub players: (String, String),
    pub wins: (u32, u32),
    pub ties: u32,
    pub rounds_played: u32,
}

impl MatchSummary {
    pub fn winner(&self) -> Option<&str> {
        if self.wins.0 > self.wins.1 {
            Some(&self.players.0)
        } else if self.wins.1 > self.wins.0 {
            Some(&self.players.1)
        } else {
            None
        }
    }
}
