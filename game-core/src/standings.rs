//! Leaderboards derived from the roster and the committed round history.
//!
//! Everything here is a pure function of `(players, rounds)` and is
//! recomputed on every call; nothing is cached between mutations.

use std::cmp::Ordering;

use game_types::{Leaderboard, Player, PlayerId, PlayerStanding, Round};

/// Sum of a player's bids over all committed rounds
pub fn total_bids(player_id: PlayerId, rounds: &[Round]) -> u32 {
    rounds
        .iter()
        .filter_map(|round| round.entry_for(player_id))
        .fold(0u32, |total, entry| total.saturating_add(entry.bid))
}

fn rounds_achieved(player_id: PlayerId, rounds: &[Round]) -> u32 {
    rounds
        .iter()
        .filter_map(|round| round.entry_for(player_id))
        .filter(|entry| entry.achieved)
        .count() as u32
}

/// Per-player totals in roster order
pub fn standings(players: &[Player], rounds: &[Round]) -> Vec<PlayerStanding> {
    players
        .iter()
        .map(|player| PlayerStanding {
            player_id: player.id,
            name: player.name.clone(),
            score: player.score,
            total_bids: total_bids(player.id, rounds),
            rounds_achieved: rounds_achieved(player.id, rounds),
        })
        .collect()
}

/// Highest score first; equal scores keep roster order
pub fn score_ranking(players: &[Player], rounds: &[Round]) -> Vec<PlayerStanding> {
    let mut ranked = standings(players, rounds);
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Most tricks bid first; equal totals keep roster order
pub fn bid_ranking(players: &[Player], rounds: &[Round]) -> Vec<PlayerStanding> {
    let mut ranked = standings(players, rounds);
    ranked.sort_by(|a, b| b.total_bids.cmp(&a.total_bids));
    ranked
}

/// Alphabetical, ignoring case; exact byte order only splits names that
/// differ in case alone
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn biedpan_order(a: &PlayerStanding, b: &PlayerStanding) -> Ordering {
    a.total_bids
        .cmp(&b.total_bids)
        .then(a.score.cmp(&b.score))
        .then_with(|| name_order(&a.name, &b.name))
}

fn puntenpan_order(a: &PlayerStanding, b: &PlayerStanding) -> Ordering {
    a.score
        .cmp(&b.score)
        .then(a.total_bids.cmp(&b.total_bids))
        .then_with(|| name_order(&a.name, &b.name))
}

/// Player with the fewest total bids.
/// Ties go to the lower score, then to the alphabetically first name.
pub fn biedpan(players: &[Player], rounds: &[Round]) -> Option<PlayerStanding> {
    standings(players, rounds).into_iter().min_by(biedpan_order)
}

/// Player with the lowest score.
/// Ties go to fewer total bids, then to the alphabetically first name.
pub fn puntenpan(players: &[Player], rounds: &[Round]) -> Option<PlayerStanding> {
    standings(players, rounds).into_iter().min_by(puntenpan_order)
}

pub fn leaderboard(players: &[Player], rounds: &[Round]) -> Leaderboard {
    Leaderboard {
        by_score: score_ranking(players, rounds),
        by_bids: bid_ranking(players, rounds),
        biedpan: biedpan(players, rounds),
        puntenpan: puntenpan(players, rounds),
    }
}
