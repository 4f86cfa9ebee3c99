use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why the core ignored an action. Rejections never change state; hosts
/// receive them as events and may show them as feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RejectReason {
    EmptyName,
    GameAlreadyStarted,
    GameNotStarted,
    NotEnoughPlayers { required: u32, present: u32 },
    PlayerNotFound,
    RoundInProgress,
    NoActiveRound,
    ResetNotConfirmed,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::EmptyName => write!(f, "player name is empty"),
            RejectReason::GameAlreadyStarted => write!(f, "the game has already started"),
            RejectReason::GameNotStarted => write!(f, "the game has not started yet"),
            RejectReason::NotEnoughPlayers { required, present } => {
                write!(f, "need at least {required} players, have {present}")
            }
            RejectReason::PlayerNotFound => write!(f, "no such player"),
            RejectReason::RoundInProgress => write!(f, "a round is still in progress"),
            RejectReason::NoActiveRound => write!(f, "no round is in progress"),
            RejectReason::ResetNotConfirmed => write!(f, "reset was not confirmed"),
        }
    }
}
