pub mod commands;
pub mod config;
pub mod render;
pub mod session;

pub use commands::{CliCommand, CommandError, PlayerRef};
pub use config::Config;
pub use session::{Confirmer, Reply, Session, TerminalConfirmer};
