use std::fmt;

use crate::world::Direction;

/// A single parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Item text exactly as typed (trimmed). Empty when the player wrote a
    /// bare "get".
    Get(String),
    Exit,
    Invalid,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(direction) => write!(f, "move {direction}"),
            Command::Get(item) => write!(f, "get '{item}'"),
            Command::Exit => f.write_str("exit"),
            Command::Invalid => f.write_str("invalid"),
        }
    }
}

/// Turn raw input into a [`Command`]. Never fails: anything unrecognized is
/// [`Command::Invalid`]. Item names are not checked here.
pub fn parse_command(raw: &str) -> Command {
    let input = raw.trim();
    if input.is_empty() {
        return Command::Invalid;
    }

    if input.eq_ignore_ascii_case("exit") {
        return Command::Exit;
    }

    if let Some(direction) = parse_direction(input) {
        return Command::Move(direction);
    }

    let (verb, rest) = split_verb(input);
    if verb.eq_ignore_ascii_case("get") {
        return Command::Get(rest.to_string());
    }

    Command::Invalid
}

/// "north", "N", "go north", "GO  w" ...
fn parse_direction(input: &str) -> Option<Direction> {
    let (first, rest) = split_verb(input);
    if first.eq_ignore_ascii_case("go") && !rest.is_empty() {
        return Direction::parse(rest);
    }
    Direction::parse(input)
}

/// Split off the first word; the remainder keeps its inner spacing.
fn split_verb(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(item: &str) -> Command {
        Command::Get(item.to_string())
    }

    #[test]
    fn parse_moves() {
        let cases = [
            ("GO north", Direction::North),
            ("North", Direction::North),
            ("n", Direction::North),
            ("N", Direction::North),
            ("go south", Direction::South),
            ("  Go   S  ", Direction::South),
            ("east", Direction::East),
            ("go E", Direction::East),
            ("WEST", Direction::West),
            ("go\tw", Direction::West),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_command(input), Command::Move(expected), "input {input:?}");
        }
    }

    #[test]
    fn direction_must_be_whole_word() {
        for input in ["nort", "go nort", "northward", "go north now", "go", "no"] {
            assert_eq!(parse_command(input), Command::Invalid, "input {input:?}");
        }
    }

    #[test]
    fn parse_exit() {
        assert_eq!(parse_command("exit"), Command::Exit);
        assert_eq!(parse_command("  EXIT "), Command::Exit);
        assert_eq!(parse_command("Exit"), Command::Exit);
        assert_eq!(parse_command("exit now"), Command::Invalid);
        assert_eq!(parse_command("quit"), Command::Invalid);
    }

    #[test]
    fn parse_get_preserves_case_and_inner_spacing() {
        assert_eq!(parse_command("get Crystal Apple"), get("Crystal Apple"));
        assert_eq!(parse_command("GET crystal apple"), get("crystal apple"));
        assert_eq!(parse_command("  get   Magic  Deck  "), get("Magic  Deck"));
        assert_eq!(parse_command("Get Jester's Bell"), get("Jester's Bell"));
    }

    #[test]
    fn bare_get_has_empty_item() {
        assert_eq!(parse_command("get"), get(""));
        assert_eq!(parse_command("  GET   "), get(""));
    }

    #[test]
    fn get_needs_its_own_word() {
        assert_eq!(parse_command("getaway"), Command::Invalid);
        assert_eq!(parse_command("forget it"), Command::Invalid);
    }

    #[test]
    fn everything_else_is_invalid() {
        for input in ["", "   ", "\t\n", "take apple", "look", "dance wildly", "go get"] {
            assert_eq!(parse_command(input), Command::Invalid, "input {input:?}");
        }
    }

    #[test]
    fn parsing_is_deterministic() {
        for input in ["go north", "get Magic Deck", "exit", "???"] {
            assert_eq!(parse_command(input), parse_command(input));
        }
    }

    #[test]
    fn display_names_canonical_direction() {
        assert_eq!(parse_command("go n").to_string(), "move North");
        assert_eq!(parse_command("get Magic Deck").to_string(), "get 'Magic Deck'");
    }
}
