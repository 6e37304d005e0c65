//! Line command parsing.

use roster_core::Experience;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const USAGE: &str =
    "commands: add <position> <name> | <info>, move <id> <level>, show, json, ping, version, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        position: String,
        name: String,
        about: String,
    },
    /// Drop of raw payload text onto a level column.
    Move {
        payload: String,
        level: Experience,
    },
    Show,
    Json,
    Ping,
    Version,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    Malformed(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`"),
            Self::Malformed(usage) => write!(f, "usage: {usage}"),
        }
    }
}

impl Error for CommandError {}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((line, ""));

    match name.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "add" => parse_add(rest),
        "move" => parse_move(rest),
        "show" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "ping" => Ok(Command::Ping),
        "version" => Ok(Command::Version),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    const ADD_USAGE: &str = "add <position> <name> | <info>";
    let (position, details) = rest
        .split_once(char::is_whitespace)
        .ok_or(CommandError::Malformed(ADD_USAGE))?;
    let (name, about) = details
        .split_once('|')
        .ok_or(CommandError::Malformed(ADD_USAGE))?;

    // Field validation is left to the form.
    Ok(Command::Add {
        position: position.to_string(),
        name: name.trim().to_string(),
        about: about.trim().to_string(),
    })
}

fn parse_move(rest: &str) -> Result<Command, CommandError> {
    const MOVE_USAGE: &str = "move <id> <level>";
    let mut parts = rest.split_whitespace();
    let (Some(payload), Some(level), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CommandError::Malformed(MOVE_USAGE));
    };
    let level = level
        .parse::<Experience>()
        .map_err(|_| CommandError::Malformed(MOVE_USAGE))?;

    Ok(Command::Move {
        payload: payload.to_string(),
        level,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use roster_core::Experience;

    #[test]
    fn parses_add_with_multi_word_fields() {
        assert_eq!(
            parse_command("add 2 Alice Smith | does QA work").expect("add line should parse"),
            Command::Add {
                position: "2".to_string(),
                name: "Alice Smith".to_string(),
                about: "does QA work".to_string(),
            }
        );
    }

    #[test]
    fn parses_move_keeping_raw_id() {
        assert_eq!(
            parse_command("MOVE abc senior").expect("move line should parse"),
            Command::Move {
                payload: "abc".to_string(),
                level: Experience::Senior,
            }
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert!(matches!(
            parse_command("add 2 Alice"),
            Err(CommandError::Malformed(_))
        ));
        assert!(matches!(
            parse_command("move 0 lead"),
            Err(CommandError::Malformed(_))
        ));
        assert!(matches!(
            parse_command("move 0"),
            Err(CommandError::Malformed(_))
        ));
        assert_eq!(
            parse_command("remove 0"),
            Err(CommandError::Unknown("remove".to_string()))
        );
    }
}
