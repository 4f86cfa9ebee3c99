use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use game_core::{Game, GameEvent, GameEventHandler};
use game_types::PlayerId;
use tracing::{debug, warn};

use crate::commands::{self, CliCommand, CommandError, HELP, PlayerRef};
use crate::config::Config;
use crate::render;

pub const RESET_PROMPT: &str = "Weet je zeker dat je het spel wilt resetten?";

/// Source of yes/no answers for the reset gate
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Asks on the terminal; anything that is not an explicit yes declines
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        match dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Could not read confirmation, treating as no: {}", e);
                false
            }
        }
    }
}

/// Collects rejection events so they can be shown after the command
struct RejectionLog {
    messages: Rc<RefCell<Vec<String>>>,
}

impl GameEventHandler for RejectionLog {
    fn handle_event(&mut self, event: GameEvent) {
        if let GameEvent::ActionRejected { action, reason } = event {
            self.messages
                .borrow_mut()
                .push(format!("! {}: {}", action.replace('_', " "), reason));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub struct Session {
    game: Game,
    config: Config,
    rejections: Rc<RefCell<Vec<String>>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let mut game = Game::new();
        let rejections = Rc::new(RefCell::new(Vec::new()));
        game.event_bus.add_handler(Box::new(RejectionLog {
            messages: rejections.clone(),
        }));
        for name in &config.players {
            game.add_player(name);
        }
        rejections.borrow_mut().clear();

        Self {
            game,
            config,
            rejections,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Parse and run one line of input
    pub fn handle_line(&mut self, line: &str, confirmer: &mut dyn Confirmer) -> Result<Reply> {
        match commands::parse(line) {
            Ok(Some(command)) => self.execute(command, confirmer),
            Ok(None) => Ok(Reply::Output(String::new())),
            Err(e) => Ok(Reply::Output(format!("! {e}\n"))),
        }
    }

    fn resolve(&self, player: &PlayerRef) -> Result<PlayerId, CommandError> {
        let found = match player {
            PlayerRef::Position(n) => n
                .checked_sub(1)
                .and_then(|i| self.game.players().get(i)),
            PlayerRef::Name(name) => self.game.find_player_by_name(name),
        };
        found.map(|p| p.id).ok_or_else(|| {
            CommandError::UnknownPlayer(match player {
                PlayerRef::Position(n) => n.to_string(),
                PlayerRef::Name(name) => name.clone(),
            })
        })
    }

    pub fn execute(&mut self, command: CliCommand, confirmer: &mut dyn Confirmer) -> Result<Reply> {
        debug!("Executing {:?}", command);
        let mut out = match command {
            CliCommand::Add(name) => {
                self.game.add_player(&name);
                render::setup(&self.game)
            }
            CliCommand::Remove(player) => match self.resolve(&player) {
                Ok(id) => {
                    self.game.remove_player(id);
                    render::setup(&self.game)
                }
                Err(e) => format!("! {e}\n"),
            },
            CliCommand::Start => {
                self.game.start_game();
                render::status(&self.game)
            }
            CliCommand::Bid(player, step) => match self.resolve(&player) {
                Ok(id) => {
                    self.game.adjust_bid(id, step);
                    render::active_round(&self.game)
                }
                Err(e) => format!("! {e}\n"),
            },
            CliCommand::Tricks(player, step) => match self.resolve(&player) {
                Ok(id) => {
                    self.game.adjust_actual(id, step);
                    render::active_round(&self.game)
                }
                Err(e) => format!("! {e}\n"),
            },
            CliCommand::Done => {
                let committed = self.game.commit_round().is_some();
                if committed && self.config.show_history {
                    format!("{}{}", render::history(&self.game), render::status(&self.game))
                } else {
                    render::status(&self.game)
                }
            }
            CliCommand::Next => {
                self.game.start_new_round();
                render::status(&self.game)
            }
            CliCommand::Reset => {
                let confirmed = !self.config.confirm_reset || confirmer.confirm(RESET_PROMPT);
                if self.game.apply(game_types::Command::ResetGame { confirmed }) {
                    render::setup(&self.game)
                } else {
                    String::new()
                }
            }
            CliCommand::Status => render::status(&self.game),
            CliCommand::History => {
                let text = render::history(&self.game);
                if text.is_empty() {
                    "Nog geen afgeronde rondes.\n".to_string()
                } else {
                    text
                }
            }
            CliCommand::Standings => render::standings_screen(&self.game),
            CliCommand::Snapshot => {
                let json = serde_json::to_string_pretty(&self.game.snapshot())
                    .context("failed to serialize game snapshot")?;
                format!("{json}\n")
            }
            CliCommand::Help => format!("{HELP}\n"),
            CliCommand::Quit => return Ok(Reply::Quit),
        };

        for message in self.rejections.borrow_mut().drain(..) {
            out.push_str(&message);
            out.push('\n');
        }
        Ok(Reply::Output(out))
    }
}
