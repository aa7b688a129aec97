//! Command grammar: turns one input line into a [`Command`].
//!
//! A line is split on commas and whitespace (runs of either collapse), the first token
//! names the command, and only `PLACE` looks at the tokens after it:
//!
//! | Line              | Command                                   |
//! |-------------------|-------------------------------------------|
//! | `PLACE 1,2,EAST`  | [`Command::Place`] at `(1, 2)` facing east |
//! | `MOVE`            | [`Command::Move`]                         |
//! | `LEFT`            | [`Command::Left`]                         |
//! | `RIGHT`           | [`Command::Right`]                        |
//! | `REPORT`          | [`Command::Report`]                       |
//!
//! Keywords are case-sensitive. Trailing tokens after `MOVE`, `LEFT`, `RIGHT` and
//! `REPORT` are ignored.

use crate::error::ParseError;
use crate::robot::Placement;
use std::fmt;
use std::str::FromStr;

/// The command keywords, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl CommandKind {
    const KEYWORDS: [(&'static str, CommandKind); 5] = [
        ("PLACE", CommandKind::Place),
        ("MOVE", CommandKind::Move),
        ("LEFT", CommandKind::Left),
        ("RIGHT", CommandKind::Right),
        ("REPORT", CommandKind::Report),
    ];

    /// Looks up an exact keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, kind)| *kind)
    }

    /// The upper-case keyword as written in input, e.g. `"PLACE"`.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Place => "PLACE",
            CommandKind::Move => "MOVE",
            CommandKind::Left => "LEFT",
            CommandKind::Right => "RIGHT",
            CommandKind::Report => "REPORT",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed robot command. Only `Place` carries data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table. Coordinates are not range-checked until validation.
    Place(Placement),
    /// Step one cell forward.
    Move,
    /// Rotate 90 degrees anti-clockwise.
    Left,
    /// Rotate 90 degrees clockwise.
    Right,
    /// Emit the current `X,Y,F`.
    Report,
}

impl Command {
    /// The keyword this command was parsed from.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Place(_) => CommandKind::Place,
            Command::Move => CommandKind::Move,
            Command::Left => CommandKind::Left,
            Command::Right => CommandKind::Right,
            Command::Report => CommandKind::Report,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place(p) => write!(f, "PLACE {p}"),
            other => f.write_str(other.kind().name()),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a single command line.
///
/// # Errors
///
/// * [`ParseError::EmptyInput`] if the line has no tokens.
/// * [`ParseError::UnknownCommand`] if the first token is not a keyword.
/// * [`ParseError::MalformedPlaceArgs`] if `PLACE` is not followed by exactly three tokens.
/// * [`ParseError::InvalidNumber`] / [`ParseError::InvalidDirection`] for a bad `PLACE` field.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = tokenize(line).collect();
    let (head, args) = tokens.split_first().ok_or(ParseError::EmptyInput)?;

    let kind = CommandKind::from_keyword(head)
        .ok_or_else(|| ParseError::UnknownCommand(head.to_string()))?;

    Ok(match kind {
        CommandKind::Place => Command::Place(parse_placement(args)?),
        CommandKind::Move => Command::Move,
        CommandKind::Left => Command::Left,
        CommandKind::Right => Command::Right,
        CommandKind::Report => Command::Report,
    })
}

/// Splits on commas and whitespace, dropping empty pieces.
pub(crate) fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Reads `[X, Y, F]`.
pub(crate) fn parse_placement(args: &[&str]) -> Result<Placement, ParseError> {
    let [x, y, facing] = args else {
        return Err(ParseError::MalformedPlaceArgs(args.len()));
    };
    Ok(Placement::new(
        parse_coordinate(x)?,
        parse_coordinate(y)?,
        facing.parse()?,
    ))
}

fn parse_coordinate(token: &str) -> Result<i32, ParseError> {
    token
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}
