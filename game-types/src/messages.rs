use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

/// Every action a host can send to the scorekeeper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Command {
    AddPlayer { name: String },
    RemovePlayer { player_id: PlayerId },
    StartGame,
    AdjustBid { player_id: PlayerId, delta: i32 },
    AdjustActual { player_id: PlayerId, delta: i32 },
    CommitRound,
    StartNewRound,
    ResetGame { confirmed: bool },
}

impl Command {
    /// Short name used in logs and rejection events
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPlayer { .. } => "add_player",
            Command::RemovePlayer { .. } => "remove_player",
            Command::StartGame => "start_game",
            Command::AdjustBid { .. } => "adjust_bid",
            Command::AdjustActual { .. } => "adjust_actual",
            Command::CommitRound => "commit_round",
            Command::StartNewRound => "start_new_round",
            Command::ResetGame { .. } => "reset_game",
        }
    }
}
