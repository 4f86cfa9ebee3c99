#![allow(dead_code)]

use game_cli::{Config, Confirmer, Reply, Session};

/// Answers every confirmation with a fixed value and counts the prompts
pub struct ScriptedConfirmer {
    pub answer: bool,
    pub prompts: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn yes() -> Self {
        Self { answer: true, prompts: Vec::new() }
    }

    pub fn no() -> Self {
        Self { answer: false, prompts: Vec::new() }
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

/// Session seeded with the given roster, everything else default
pub fn create_session(players: &[&str]) -> Session {
    colored::control::set_override(false);
    Session::new(Config {
        players: players.iter().map(|p| p.to_string()).collect(),
        ..Config::default()
    })
}

/// Runs a line and returns the printed text, panicking on quit or error
pub fn run(session: &mut Session, confirmer: &mut ScriptedConfirmer, line: &str) -> String {
    match session.handle_line(line, confirmer).expect("command failed") {
        Reply::Output(text) => text,
        Reply::Quit => panic!("unexpected quit on '{line}'"),
    }
}

/// Runs several lines and returns the output of the last one
pub fn run_all(session: &mut Session, confirmer: &mut ScriptedConfirmer, lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| run(session, confirmer, line))
        .last()
        .unwrap_or_default()
}

pub fn score_of(session: &Session, name: &str) -> i32 {
    session
        .game()
        .players()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.score)
        .unwrap_or_else(|| panic!("no player named {name}"))
}
