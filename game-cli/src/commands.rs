use thiserror::Error;

/// How a player is addressed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRef {
    /// 1-based position in the roster
    Position(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Add(String),
    Remove(PlayerRef),
    Start,
    Bid(PlayerRef, i32),
    Tricks(PlayerRef, i32),
    Done,
    Next,
    Reset,
    Status,
    History,
    Standings,
    Snapshot,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("invalid step '{0}', use +, -, +N or -N")]
    InvalidStep(String),
    #[error("no player matches '{0}'")]
    UnknownPlayer(String),
}

pub const HELP: &str = "\
Commands:
  add <name>               add a player (before the game starts)
  remove <player>          remove a player (before the game starts)
  start                    start the game and open round 1
  bid <player> [+|-][n]    change a bid, default +1
  tricks <player> [+|-][n] change the tricks taken, default +1
  done                     finish the round and score it
  next                     open the next round
  reset                    start over with the same players
  status                   show the current screen
  history                  show all finished rounds
  standings                show the leaderboards
  snapshot                 print the whole game as JSON
  help                     show this list
  quit                     leave
A <player> is a roster number (1, 2, ...) or a name.";

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub fn parse(line: &str) -> Result<Option<CliCommand>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match keyword.to_lowercase().as_str() {
        "add" | "a" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "add",
                    what: "a name",
                });
            }
            CliCommand::Add(args.join(" "))
        }
        "remove" | "rm" => CliCommand::Remove(parse_player("remove", &args)?),
        "start" => CliCommand::Start,
        "bid" | "b" => {
            let (player, step) = parse_adjustment("bid", &args)?;
            CliCommand::Bid(player, step)
        }
        "tricks" | "t" => {
            let (player, step) = parse_adjustment("tricks", &args)?;
            CliCommand::Tricks(player, step)
        }
        "done" | "commit" => CliCommand::Done,
        "next" | "new" => CliCommand::Next,
        "reset" => CliCommand::Reset,
        "status" | "ls" => CliCommand::Status,
        "history" | "h" => CliCommand::History,
        "standings" | "s" => CliCommand::Standings,
        "snapshot" | "json" => CliCommand::Snapshot,
        "help" | "?" => CliCommand::Help,
        "quit" | "exit" | "q" => CliCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_player(command: &'static str, args: &[&str]) -> Result<PlayerRef, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a player number or name",
        });
    }
    let joined = args.join(" ");
    Ok(match joined.parse::<usize>() {
        Ok(position) => PlayerRef::Position(position),
        Err(_) => PlayerRef::Name(joined),
    })
}

/// `<player> [step]`; the step is the last word when more than one is given
fn parse_adjustment(command: &'static str, args: &[&str]) -> Result<(PlayerRef, i32), CommandError> {
    match args {
        [] | [_] => Ok((parse_player(command, args)?, 1)),
        [player @ .., step] => Ok((parse_player(command, player)?, parse_step(step)?)),
    }
}

pub fn parse_step(raw: &str) -> Result<i32, CommandError> {
    let invalid = || CommandError::InvalidStep(raw.to_string());
    match raw {
        "+" => Ok(1),
        "-" => Ok(-1),
        _ => {
            let (sign, digits) = match raw.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, raw.strip_prefix('+').unwrap_or(raw)),
            };
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.parse::<i32>().map(|n| sign * n).map_err(|_| invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_add_keeps_multi_word_names() {
        assert_eq!(
            parse("add Jan  Willem"),
            Ok(Some(CliCommand::Add("Jan Willem".into())))
        );
        assert!(matches!(
            parse("add"),
            Err(CommandError::MissingArgument { command: "add", .. })
        ));
    }

    #[test]
    fn test_player_by_position_or_name() {
        assert_eq!(
            parse("remove 2"),
            Ok(Some(CliCommand::Remove(PlayerRef::Position(2))))
        );
        assert_eq!(
            parse("rm bob"),
            Ok(Some(CliCommand::Remove(PlayerRef::Name("bob".into()))))
        );
    }

    #[test]
    fn test_adjustment_steps() {
        assert_eq!(
            parse("bid 1"),
            Ok(Some(CliCommand::Bid(PlayerRef::Position(1), 1)))
        );
        assert_eq!(
            parse("bid alice -"),
            Ok(Some(CliCommand::Bid(PlayerRef::Name("alice".into()), -1)))
        );
        assert_eq!(
            parse("tricks Jan Willem +3"),
            Ok(Some(CliCommand::Tricks(PlayerRef::Name("Jan Willem".into()), 3)))
        );
        assert_eq!(
            parse("t 2 -2"),
            Ok(Some(CliCommand::Tricks(PlayerRef::Position(2), -2)))
        );
        assert_eq!(
            parse("bid 2 x"),
            Err(CommandError::InvalidStep("x".into()))
        );
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_step("+"), Ok(1));
        assert_eq!(parse_step("-"), Ok(-1));
        assert_eq!(parse_step("4"), Ok(4));
        assert_eq!(parse_step("+12"), Ok(12));
        assert_eq!(parse_step("-3"), Ok(-3));
        assert!(parse_step("+-1").is_err());
        assert!(parse_step("--").is_err());
        assert!(parse_step("99999999999").is_err());
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse("DONE"), Ok(Some(CliCommand::Done)));
        assert_eq!(parse("Next"), Ok(Some(CliCommand::Next)));
        assert_eq!(parse("q"), Ok(Some(CliCommand::Quit)));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("deal").unwrap_err();
        assert_eq!(err, CommandError::Unknown("deal".into()));
        assert!(err.to_string().contains("help"));
    }
}
