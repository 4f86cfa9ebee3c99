use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_cli::{Config, Reply, Session, TerminalConfirmer, render};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the score screens
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Starting Boerenbridge scorekeeper with {:?}", config);

    let mut session = Session::new(config);
    let mut confirmer = TerminalConfirmer;

    println!("{}\n", render::title());
    print!("{}", render::status(session.game()));
    println!("Type 'help' for commands.");

    // stdin is not held locked between lines; the reset prompt reads the terminal too
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        let read = stdin.read_line(&mut line).context("failed to read from stdin")?;
        if read == 0 {
            break;
        }

        match session.handle_line(&line, &mut confirmer)? {
            Reply::Output(text) => print!("{text}"),
            Reply::Quit => break,
        }
    }

    info!("Scorekeeper closed after {} rounds", session.game().rounds().len());
    Ok(())
}
