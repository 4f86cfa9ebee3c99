use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Player, PlayerId, PlayerStanding};

/// One player's line in a round. Editable while the round is open,
/// frozen once the round is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub bid: u32,
    pub actual_tricks: u32,
    pub achieved: bool,
    pub points: i32, // 0 until the round is scored
}

impl RoundEntry {
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id,
            player_name: player.name.clone(),
            bid: 0,
            actual_tricks: 0,
            achieved: true, // 0 == 0
            points: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Round {
    pub number: u32,
    pub entries: Vec<RoundEntry>,
}

impl Round {
    pub fn entry_for(&self, player_id: PlayerId) -> Option<&RoundEntry> {
        self.entries.iter().find(|e| e.player_id == player_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GamePhase {
    Setup,                             // Roster still editable
    RoundInProgress { number: u32 },   // Bids and tricks being entered
    BetweenRounds { completed: u32 },  // Last round committed, next not opened
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Leaderboard {
    pub by_score: Vec<PlayerStanding>,
    pub by_bids: Vec<PlayerStanding>,
    pub biedpan: Option<PlayerStanding>,   // Fewest total bids
    pub puntenpan: Option<PlayerStanding>, // Fewest points
}

/// Read-only view of a whole session for hosts, rebuilt on every request
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub active_round: Option<Round>,
    pub active_total_bids: u32,
    pub history: Vec<Round>,
    pub leaderboard: Leaderboard,
}
