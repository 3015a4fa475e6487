// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsing of the board setup commands accepted on the command line.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use piecegrid::Position;

/// A single board setup step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Create a piece of the named type and add it to the board.
    Place(String, Position),
    /// Move the piece at the first position to the second.
    Move(Position, Position),
    /// Take the piece at the position off the board.
    Remove(Position),
}

/// Error returned for command text that does not match any command.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCommandError {
    #[error("unrecognized command {0:?}, expected \"<type> at <row>,<column>\", \"move <row>,<column> to <row>,<column>\" or \"remove <row>,<column>\"")]
    Unrecognized(String),
    #[error("coordinate {0:?} is out of range")]
    CoordinateRange(String),
}

static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:(?:place|put)\s+)?
        (?P<type>[A-Za-z_][\w-]*)\s+
        (?:(?:at|on|to|->|=>)\s+)?
        (?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<column>-?[0-9]+)$",
    )
    .expect("place pattern is valid")
});

static MOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)move\s+
        (?P<from_row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<from_column>-?[0-9]+)\s+
        (?:to|->|=>)\s+
        (?P<to_row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<to_column>-?[0-9]+)$",
    )
    .expect("move pattern is valid")
});

static REMOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:remove|take)\s+
        (?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<column>-?[0-9]+)$",
    )
    .expect("remove pattern is valid")
});

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        // Move and remove first, their keywords would otherwise be read as type names.
        if let Some(captures) = MOVE.captures(input) {
            Ok(Command::Move(
                position(&captures, "from_row", "from_column")?,
                position(&captures, "to_row", "to_column")?,
            ))
        } else if let Some(captures) = REMOVE.captures(input) {
            Ok(Command::Remove(position(&captures, "row", "column")?))
        } else if let Some(captures) = PLACE.captures(input) {
            Ok(Command::Place(
                captures["type"].to_owned(),
                position(&captures, "row", "column")?,
            ))
        } else {
            Err(ParseCommandError::Unrecognized(input.to_owned()))
        }
    }
}

/// Read a position out of the named capture groups.
fn position(captures: &Captures, row: &str, column: &str) -> Result<Position, ParseCommandError> {
    Ok(Position::new(
        coordinate(&captures[row])?,
        coordinate(&captures[column])?,
    ))
}

fn coordinate(text: &str) -> Result<i64, ParseCommandError> {
    text.parse()
        .map_err(|_| ParseCommandError::CoordinateRange(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let expected = Command::Place("archer".to_owned(), Position::new(1, 2));
        assert_eq!("archer at 1,2".parse::<Command>().unwrap(), expected);
        assert_eq!("place archer 1 2".parse::<Command>().unwrap(), expected);
        assert_eq!("  archer -> 1 , 2 ".parse::<Command>().unwrap(), expected);
    }

    #[test]
    fn test_parse_place_keeps_type_case() {
        assert_eq!(
            "HeavyTank at 1,1".parse::<Command>().unwrap(),
            Command::Place("HeavyTank".to_owned(), Position::new(1, 1))
        );
        assert_eq!(
            "put Archer 0 3".parse::<Command>().unwrap(),
            Command::Place("Archer".to_owned(), Position::new(0, 3))
        );
    }

    #[test]
    fn test_parse_keeps_negative_coordinates() {
        assert_eq!(
            "scout at -1,0".parse::<Command>().unwrap(),
            Command::Place("scout".to_owned(), Position::new(-1, 0))
        );
    }

    #[test]
    fn test_parse_move_and_remove() {
        assert_eq!(
            "move 0,0 to 3,3".parse::<Command>().unwrap(),
            Command::Move(Position::new(0, 0), Position::new(3, 3))
        );
        assert_eq!(
            "remove 2,1".parse::<Command>().unwrap(),
            Command::Remove(Position::new(2, 1))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "archer".parse::<Command>(),
            Err(ParseCommandError::Unrecognized(_))
        ));
        assert!(matches!(
            "archer at 99999999999999999999,0".parse::<Command>(),
            Err(ParseCommandError::CoordinateRange(_))
        ));
    }
}
