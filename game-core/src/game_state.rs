use game_types::{Command, GamePhase, GameSnapshot, Leaderboard, Player, PlayerId, RejectReason, Round};
use tracing::{debug, info};

use crate::{GameEvent, GameEventBus, RoundInProgress, ScoringEngine, standings};

/// Players required before a game can start
pub const MIN_PLAYERS: usize = 2;

/// One scorekeeping session: the roster, the round being played and the
/// committed history. Actions that are not allowed in the current state are
/// ignored and reported on the event bus as `ActionRejected`.
#[derive(Debug, Default)]
pub struct Game {
    players: Vec<Player>,
    started: bool,
    current_round: Option<RoundInProgress>,
    rounds: Vec<Round>,
    pub event_bus: GameEventBus,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Case-insensitive lookup on the trimmed display name; first match wins
    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim().to_lowercase();
        self.players
            .iter()
            .find(|p| p.name.to_lowercase() == name)
    }

    /// Committed rounds, oldest first
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_round(&self) -> Option<&RoundInProgress> {
        self.current_round.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> GamePhase {
        match (&self.current_round, self.started) {
            (Some(round), _) => GamePhase::RoundInProgress {
                number: round.number(),
            },
            (None, true) => GamePhase::BetweenRounds {
                completed: self.rounds.len() as u32,
            },
            (None, false) => GamePhase::Setup,
        }
    }

    fn reject(&mut self, action: &'static str, reason: RejectReason) {
        debug!("Rejected {}: {}", action, reason);
        self.event_bus
            .publish(GameEvent::ActionRejected { action, reason });
    }

    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        if self.started {
            self.reject("add_player", RejectReason::GameAlreadyStarted);
            return None;
        }
        if name.trim().is_empty() {
            self.reject("add_player", RejectReason::EmptyName);
            return None;
        }

        let player = Player::new(name);
        let player_id = player.id;
        debug!("Adding player {} ({})", player.name, player_id);
        self.event_bus.publish(GameEvent::PlayerAdded {
            player_id,
            name: player.name.clone(),
        });
        self.players.push(player);
        Some(player_id)
    }

    pub fn remove_player(&mut self, player_id: PlayerId) -> bool {
        if self.started {
            self.reject("remove_player", RejectReason::GameAlreadyStarted);
            return false;
        }
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        if self.players.len() == before {
            self.reject("remove_player", RejectReason::PlayerNotFound);
            return false;
        }

        debug!("Removed player {}", player_id);
        self.event_bus
            .publish(GameEvent::PlayerRemoved { player_id });
        true
    }

    /// Lock the roster and open round 1
    pub fn start_game(&mut self) -> bool {
        if self.started {
            self.reject("start_game", RejectReason::GameAlreadyStarted);
            return false;
        }
        if self.players.len() < MIN_PLAYERS {
            self.reject(
                "start_game",
                RejectReason::NotEnoughPlayers {
                    required: MIN_PLAYERS as u32,
                    present: self.players.len() as u32,
                },
            );
            return false;
        }

        self.started = true;
        info!("Game started with {} players", self.players.len());
        self.event_bus.publish(GameEvent::GameStarted {
            player_count: self.players.len(),
        });
        self.open_round();
        true
    }

    pub fn start_new_round(&mut self) -> bool {
        if !self.started {
            self.reject("start_new_round", RejectReason::GameNotStarted);
            return false;
        }
        if self.current_round.is_some() {
            self.reject("start_new_round", RejectReason::RoundInProgress);
            return false;
        }
        self.open_round();
        true
    }

    fn open_round(&mut self) {
        let number = self.rounds.len() as u32 + 1;
        self.current_round = Some(RoundInProgress::open(number, &self.players));
        self.event_bus.publish(GameEvent::RoundStarted { number });
    }

    pub fn adjust_bid(&mut self, player_id: PlayerId, delta: i32) -> bool {
        self.adjust_entry("adjust_bid", player_id, |round| {
            round.adjust_bid(player_id, delta)
        })
    }

    pub fn adjust_actual(&mut self, player_id: PlayerId, delta: i32) -> bool {
        self.adjust_entry("adjust_actual", player_id, |round| {
            round.adjust_actual(player_id, delta)
        })
    }

    fn adjust_entry(
        &mut self,
        action: &'static str,
        player_id: PlayerId,
        apply: impl FnOnce(&mut RoundInProgress) -> bool,
    ) -> bool {
        if self.current_round.is_none() {
            let reason = if self.started {
                RejectReason::NoActiveRound
            } else {
                RejectReason::GameNotStarted
            };
            self.reject(action, reason);
            return false;
        }

        if !self.current_round.as_mut().is_some_and(apply) {
            self.reject(action, RejectReason::PlayerNotFound);
            return false;
        }

        let event = self
            .current_round
            .as_ref()
            .and_then(|round| round.entry(player_id))
            .map(|entry| GameEvent::EntryAdjusted {
                player_id,
                bid: entry.bid,
                actual_tricks: entry.actual_tricks,
            });
        if let Some(event) = event {
            self.event_bus.publish(event);
        }
        true
    }

    /// Sum of bids in the open round, 0 when no round is open
    pub fn total_bids(&self) -> u32 {
        self.current_round
            .as_ref()
            .map(RoundInProgress::total_bids)
            .unwrap_or(0)
    }

    /// Score the open round, add the points to every player and archive it
    pub fn commit_round(&mut self) -> Option<&Round> {
        let Some(round) = self.current_round.take() else {
            self.reject("commit_round", RejectReason::NoActiveRound);
            return None;
        };

        let round = round.commit();
        for player in &mut self.players {
            if let Some(entry) = round.entry_for(player.id) {
                player.score = player.score.saturating_add(entry.points);
            }
        }

        info!("Round {} committed", round.number);
        debug!(
            "Round {} awarded {} points in total",
            round.number,
            ScoringEngine::total_points(&round.entries)
        );
        self.event_bus.publish(GameEvent::RoundCommitted {
            round: round.clone(),
        });
        self.rounds.push(round);
        self.rounds.last()
    }

    /// Back to setup with the same roster: history cleared, scores zeroed.
    /// Unconditional; asking the user for confirmation is up to the host.
    pub fn reset_game(&mut self) {
        self.started = false;
        self.current_round = None;
        self.rounds.clear();
        for player in &mut self.players {
            player.score = 0;
        }
        info!("Game reset, roster of {} kept", self.players.len());
        self.event_bus.publish(GameEvent::GameReset);
    }

    /// Dispatch a host command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        debug!("Applying {}", command.name());
        match command {
            Command::AddPlayer { name } => self.add_player(&name).is_some(),
            Command::RemovePlayer { player_id } => self.remove_player(player_id),
            Command::StartGame => self.start_game(),
            Command::AdjustBid { player_id, delta } => self.adjust_bid(player_id, delta),
            Command::AdjustActual { player_id, delta } => self.adjust_actual(player_id, delta),
            Command::CommitRound => self.commit_round().is_some(),
            Command::StartNewRound => self.start_new_round(),
            Command::ResetGame { confirmed: true } => {
                self.reset_game();
                true
            }
            Command::ResetGame { confirmed: false } => {
                self.reject("reset_game", RejectReason::ResetNotConfirmed);
                false
            }
        }
    }

    pub fn leaderboard(&self) -> Leaderboard {
        standings::leaderboard(&self.players, &self.rounds)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            players: self.players.clone(),
            active_round: self.current_round.as_ref().map(|r| r.as_round().clone()),
            active_total_bids: self.total_bids(),
            history: self.rounds.clone(),
            leaderboard: self.leaderboard(),
        }
    }
}
