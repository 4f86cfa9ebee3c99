use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type PlayerId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
}

impl Player {
    /// Create a player with a fresh identifier and a zero score.
    /// The name is stored trimmed; callers reject empty names before this point.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            score: 0,
        }
    }
}

/// Derived per-player totals, recomputed from the roster and round history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub name: String,
    pub score: i32,
    pub total_bids: u32,
    pub rounds_achieved: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_trims_name() {
        let player = Player::new("  Alice \t");
        assert_eq!(player.name, "Alice");
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_new_players_get_distinct_ids() {
        let a = Player::new("Alice");
        let b = Player::new("Alice");
        assert_ne!(a.id, b.id);
    }
}
