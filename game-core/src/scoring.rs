use game_types::RoundEntry;

/// Points for making the bid exactly, before the per-trick bonus
pub const ACHIEVED_BASE_POINTS: i32 = 10;
/// Bonus per trick bid when achieved, and penalty per trick missed otherwise
pub const POINTS_PER_TRICK: i32 = 3;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Points for a single player's round.
    ///
    /// Hitting the bid exactly pays `10 + 3 * bid`; any miss costs 3 points
    /// per trick of difference, whether over or under.
    /// Saturates at the `i32` range for absurdly large trick counts.
    pub fn round_points(bid: u32, actual_tricks: u32) -> i32 {
        let points = if bid == actual_tricks {
            i64::from(ACHIEVED_BASE_POINTS) + i64::from(POINTS_PER_TRICK) * i64::from(bid)
        } else {
            -(i64::from(POINTS_PER_TRICK) * i64::from(bid.abs_diff(actual_tricks)))
        };
        points.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Recompute the achieved flag and points of an entry from its bid and tricks
    pub fn score_entry(entry: &mut RoundEntry) {
        entry.achieved = entry.bid == entry.actual_tricks;
        entry.points = Self::round_points(entry.bid, entry.actual_tricks);
    }

    pub fn total_points(entries: &[RoundEntry]) -> i32 {
        entries
            .iter()
            .fold(0i32, |total, e| total.saturating_add(e.points))
    }
}
