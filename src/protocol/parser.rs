//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the main loop dispatches on.

use tracing::warn;

use crate::board::{Coordinate, UnitId};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Step a unit one tile: `walk <id> <dx> <dy>`.
    Walk { unit_id: UnitId, direction: Coordinate },

    /// Move a unit to an absolute position: `move <id> <x> <y>`.
    Move { unit_id: UnitId, target: Coordinate },

    /// Advance the match turn: `turn` or `next`.
    NextTurn,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&name, args) = tokens.split_first()?;

    match name {
        "quit" => Some(Command::Quit),
        "turn" | "next" => Some(Command::NextTurn),
        "walk" => {
            let (unit_id, direction) = parse_unit_and_pair(name, args)?;
            Some(Command::Walk { unit_id, direction })
        }
        "move" => {
            let (unit_id, target) = parse_unit_and_pair(name, args)?;
            Some(Command::Move { unit_id, target })
        }
        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `<id> <a> <b>` following a command name.
fn parse_unit_and_pair(name: &str, args: &[&str]) -> Option<(UnitId, Coordinate)> {
    let [id, a, b] = args else {
        warn!(command = name, "malformed {}: expected '{} <id> <x> <y>'", name, name);
        return None;
    };
    let unit_id = match id.parse::<UnitId>() {
        Ok(v) => v,
        Err(_) => {
            warn!(command = name, value = *id, "invalid unit id");
            return None;
        }
    };
    let (x, y) = match (a.parse::<i32>(), b.parse::<i32>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            warn!(command = name, x = *a, y = *b, "invalid coordinate");
            return None;
        }
    };
    Some((unit_id, Coordinate::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_turn_and_alias() {
        assert_eq!(parse_command("turn"), Some(Command::NextTurn));
        assert_eq!(parse_command("next"), Some(Command::NextTurn));
    }

    #[test]
    fn parse_walk_command() {
        assert_eq!(
            parse_command("walk 63 -1 1"),
            Some(Command::Walk {
                unit_id: 63,
                direction: Coordinate::new(-1, 1),
            })
        );
    }

    #[test]
    fn parse_walk_keeps_out_of_range_direction() {
        // Range is a rule check, not a syntax check.
        assert_eq!(
            parse_command("walk 1 2 0"),
            Some(Command::Walk {
                unit_id: 1,
                direction: Coordinate::new(2, 0),
            })
        );
    }

    #[test]
    fn parse_move_command() {
        assert_eq!(
            parse_command("move 4 3 2"),
            Some(Command::Move {
                unit_id: 4,
                target: Coordinate::new(3, 2),
            })
        );
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_malformed_arguments_return_none() {
        assert_eq!(parse_command("walk"), None);
        assert_eq!(parse_command("walk 1 1"), None);
        assert_eq!(parse_command("walk 1 1 1 1"), None);
        assert_eq!(parse_command("walk x 1 1"), None);
        assert_eq!(parse_command("walk -1 1 1"), None);
        assert_eq!(parse_command("move 1 a 2"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  quit  "), Some(Command::Quit));
        assert_eq!(
            parse_command("\twalk 2 0 -1 "),
            Some(Command::Walk {
                unit_id: 2,
                direction: Coordinate::new(0, -1),
            })
        );
    }
}
