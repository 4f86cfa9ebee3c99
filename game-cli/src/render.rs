//! Text screens for the terminal host. Every function is a pure view of
//! the game and returns the text to print.

use colored::Colorize;
use game_core::{Game, standings};
use game_types::{GamePhase, PlayerId, PlayerStanding, Round};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Joins screen lines, each terminated by a newline
fn screen(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn signed_points(points: i32) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}

fn mark(achieved: bool) -> String {
    if achieved {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

pub fn title() -> String {
    format!("{}\n♠ ♥ ♣ ♦", "🂡 Boerenbridge 🂱".bold())
}

pub fn setup(game: &Game) -> String {
    let players = game.players();
    let mut lines = vec!["Spelers toevoegen".bold().to_string()];
    if players.is_empty() {
        lines.push("  (nog geen spelers, gebruik 'add <naam>')".to_string());
    } else {
        lines.push(format!("Spelers ({})", players.len()));
        lines.extend(
            players
                .iter()
                .enumerate()
                .map(|(i, player)| format!("  {}. {}", i + 1, player.name)),
        );
    }
    if players.len() >= game_core::MIN_PLAYERS {
        lines.push("Type 'start' om het spel te beginnen.".to_string());
    }
    screen(lines)
}

/// The open round: one line per player with bid, tricks and a live ✓/✗
pub fn active_round(game: &Game) -> String {
    let Some(round) = game.current_round() else {
        return String::new();
    };
    let width = name_width(round.entries().iter().map(|e| e.player_name.as_str()));
    let mut lines = vec![format!(
        "{}    Totaal: {}",
        format!("Ronde {}", round.number()).bold(),
        round.total_bids()
    )];
    lines.extend(round.entries().iter().enumerate().map(|(i, entry)| {
        format!(
            "  {}. {:<width$}  Bieding {:>2}  Behaald {:>2}  {}",
            i + 1,
            entry.player_name,
            entry.bid,
            entry.actual_tricks,
            mark(round.is_on_target(entry.player_id).unwrap_or(false)),
        )
    }));
    screen(lines)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}

fn history_cell(round: &Round, player_id: PlayerId) -> String {
    match round.entry_for(player_id) {
        Some(entry) => format!(
            "{}/{} {} {}pt",
            entry.bid,
            entry.actual_tricks,
            mark(entry.achieved),
            signed_points(entry.points)
        ),
        None => "-".to_string(),
    }
}

/// Round overview: one row per committed round, one column per player.
/// Cells read `bid/tricks ✓ +points`.
pub fn history(game: &Game) -> String {
    if game.rounds().is_empty() {
        return String::new();
    }
    let header: String = game
        .players()
        .iter()
        .map(|player| format!(" | {}", player.name))
        .collect();
    let mut lines = vec![
        "📜 Rondeoverzicht".bold().to_string(),
        format!("Ronde{header}"),
    ];
    lines.extend(game.rounds().iter().map(|round| {
        let cells: String = game
            .players()
            .iter()
            .map(|player| format!(" | {}", history_cell(round, player.id)))
            .collect();
        format!("{:>5}{cells}", round.number)
    }));
    screen(lines)
}

/// Biedpan and Puntenpan holders; empty until a round has been committed
pub fn interim(game: &Game) -> String {
    if game.rounds().is_empty() {
        return String::new();
    }
    let mut lines = vec!["🏆 Tussenstand".bold().to_string()];
    if let Some(holder) = standings::biedpan(game.players(), game.rounds()) {
        lines.push(format!("  Biedpan (minste biedingen): {}", holder.name.red()));
    }
    if let Some(holder) = standings::puntenpan(game.players(), game.rounds()) {
        lines.push(format!("  Puntenpan (minste punten): {}", holder.name.red()));
    }
    screen(lines)
}

fn score_line(index: usize, standing: &PlayerStanding) -> String {
    let medal = MEDALS.get(index).copied().unwrap_or("  ");
    format!(
        "  #{} {} {}  {} pt  (totaal geboden: {} slagen)",
        index + 1,
        medal,
        standing.name,
        standing.score,
        standing.total_bids
    )
}

fn bid_line(index: usize, standing: &PlayerStanding) -> String {
    let marker = if index == 0 { "🎯" } else { "  " };
    format!(
        "  #{} {} {}  {} slagen geboden  (score: {} punten)",
        index + 1,
        marker,
        standing.name,
        standing.total_bids,
        standing.score
    )
}

pub fn leaderboards(game: &Game) -> String {
    if game.rounds().is_empty() {
        return String::new();
    }
    let board = game.leaderboard();
    let mut lines = vec!["📊 Eindstand - Punten".bold().to_string()];
    lines.extend(board.by_score.iter().enumerate().map(|(i, s)| score_line(i, s)));
    lines.push("🎯 Eindstand - Biedingen".bold().to_string());
    lines.extend(board.by_bids.iter().enumerate().map(|(i, s)| bid_line(i, s)));
    screen(lines)
}

/// Interim holders plus both leaderboards
pub fn standings_screen(game: &Game) -> String {
    if game.rounds().is_empty() {
        return "Nog geen afgeronde rondes.\n".to_string();
    }
    format!("{}{}", interim(game), leaderboards(game))
}

/// Whatever belongs on screen for the current phase
pub fn status(game: &Game) -> String {
    match game.phase() {
        GamePhase::Setup => setup(game),
        GamePhase::RoundInProgress { .. } => {
            format!("{}{}", interim(game), active_round(game))
        }
        GamePhase::BetweenRounds { completed } => format!(
            "{}Ronde {} afgerond. Type 'next' voor een nieuwe ronde.\n",
            interim(game),
            completed
        ),
    }
}
