#![allow(dead_code)]

use game_core::{Game, GameEvent, GameEventHandler};
use game_types::{Player, PlayerId};
use std::sync::{Arc, Mutex};

/// Creates a game in setup with the given roster
pub fn create_game_with_players(names: &[&str]) -> Game {
    let mut game = Game::new();
    for name in names {
        game.add_player(name).expect("valid player name");
    }
    game
}

/// Creates a started two player game (Alice, Bob) with round 1 open
pub fn create_standard_game() -> Game {
    let mut game = create_game_with_players(&["Alice", "Bob"]);
    assert!(game.start_game());
    game
}

/// Helper to get a player's id by display name
pub fn player_id(game: &Game, name: &str) -> PlayerId {
    get_player_by_name(game, name)
        .unwrap_or_else(|| panic!("no player named {name}"))
        .id
}

/// Helper to get player by name
pub fn get_player_by_name<'a>(game: &'a Game, name: &str) -> Option<&'a Player> {
    game.players().iter().find(|p| p.name == name)
}

/// Sets bid and tricks for each named player through the public +/- steps
pub fn fill_round(game: &mut Game, entries: &[(&str, u32, u32)]) {
    for (name, bid, actual) in entries {
        let id = player_id(game, name);
        for _ in 0..*bid {
            game.adjust_bid(id, 1);
        }
        for _ in 0..*actual {
            game.adjust_actual(id, 1);
        }
    }
}

/// Fills the open round, commits it and opens the next one
pub fn play_round(game: &mut Game, entries: &[(&str, u32, u32)]) {
    fill_round(game, entries);
    game.commit_round().expect("a round was open");
    game.start_new_round();
}

pub fn score_of(game: &Game, name: &str) -> i32 {
    get_player_by_name(game, name).map(|p| p.score).unwrap_or_default()
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers a clone of this collector on the game's bus
    pub fn attach(&self, game: &mut Game) {
        game.event_bus.add_handler(Box::new(self.clone()));
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
