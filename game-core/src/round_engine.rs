use game_types::{Player, PlayerId, Round, RoundEntry};
use tracing::debug;

use crate::ScoringEngine;

/// The round currently being filled in. Consumed by `commit`, so a
/// committed round can no longer be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInProgress {
    round: Round,
}

impl RoundInProgress {
    /// Open a round with one default entry per player, in roster order
    pub fn open(number: u32, players: &[Player]) -> Self {
        let entries = players.iter().map(RoundEntry::new).collect();
        debug!("Opening round {} for {} players", number, players.len());
        Self {
            round: Round { number, entries },
        }
    }

    pub fn number(&self) -> u32 {
        self.round.number
    }

    pub fn entries(&self) -> &[RoundEntry] {
        &self.round.entries
    }

    pub fn entry(&self, player_id: PlayerId) -> Option<&RoundEntry> {
        self.round.entry_for(player_id)
    }

    /// Current state as a plain round value, for views and snapshots
    pub fn as_round(&self) -> &Round {
        &self.round
    }

    fn entry_mut(&mut self, player_id: PlayerId) -> Option<&mut RoundEntry> {
        self.round
            .entries
            .iter_mut()
            .find(|e| e.player_id == player_id)
    }

    /// Move a player's bid by `delta`, never below zero.
    /// Leaves the stored achieved flag alone; that is only refreshed when
    /// tricks change or the round is committed.
    pub fn adjust_bid(&mut self, player_id: PlayerId, delta: i32) -> bool {
        match self.entry_mut(player_id) {
            Some(entry) => {
                entry.bid = clamped_add(entry.bid, delta);
                true
            }
            None => false,
        }
    }

    /// Move a player's trick count by `delta`, never below zero, and refresh
    /// the achieved flag against the current bid.
    pub fn adjust_actual(&mut self, player_id: PlayerId, delta: i32) -> bool {
        match self.entry_mut(player_id) {
            Some(entry) => {
                entry.actual_tricks = clamped_add(entry.actual_tricks, delta);
                entry.achieved = entry.actual_tricks == entry.bid;
                true
            }
            None => false,
        }
    }

    /// Live bid/tricks comparison, independent of the stored flag
    pub fn is_on_target(&self, player_id: PlayerId) -> Option<bool> {
        self.entry(player_id).map(|e| e.bid == e.actual_tricks)
    }

    /// Sum of all current bids. Informational only; no limit is enforced.
    pub fn total_bids(&self) -> u32 {
        self.round
            .entries
            .iter()
            .fold(0u32, |total, e| total.saturating_add(e.bid))
    }

    /// Score every entry and freeze the round
    pub fn commit(mut self) -> Round {
        for entry in &mut self.round.entries {
            ScoringEngine::score_entry(entry);
        }
        self.round
    }
}

fn clamped_add(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    u32::try_from(next.max(0)).unwrap_or(u32::MAX)
}
