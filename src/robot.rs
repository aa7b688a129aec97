//! Robot state and orientation.

use crate::command::{parse_placement, tokenize};
use crate::error::ParseError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass headings the robot can face.
///
/// The declaration order is the clockwise rotation order used by
/// [`Direction::right`] and [`Direction::left`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order, starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit displacement of a single step in this heading.
    ///
    /// North is `+Y`, east is `+X`.
    pub const fn delta(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, 1),
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, -1),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    /// The heading after a 90 degree anti-clockwise turn.
    pub fn left(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The heading after a 90 degree clockwise turn.
    pub fn right(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The canonical upper-case keyword, e.g. `"NORTH"`.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Matches the keyword exactly; `"north"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ParseError::InvalidDirection(s.to_string()))
    }
}

/// Where the robot stands and which way it faces.
///
/// Position and heading only ever change together through a single value, so a
/// robot can never be half-placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Grid cell, `(0, 0)` being the south-west corner.
    pub position: IVec2,
    /// Heading.
    pub facing: Direction,
}

impl Placement {
    /// A placement at `(x, y)` facing `facing`. No bounds are checked.
    pub fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            position: IVec2::new(x, y),
            facing,
        }
    }

    /// Column, counted from the west edge.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row, counted from the south edge.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// The cell one step ahead in the current heading, or `None` if it does not fit
    /// in `i32`.
    pub fn ahead(&self) -> Option<IVec2> {
        let delta = self.facing.delta();
        Some(IVec2::new(
            self.position.x.checked_add(delta.x)?,
            self.position.y.checked_add(delta.y)?,
        ))
    }
}

/// Renders as `X,Y,F`, the `REPORT` format.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x(), self.y(), self.facing)
    }
}

/// Parses the `X,Y,F` triple produced by `REPORT` (or given to `PLACE`).
impl FromStr for Placement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = tokenize(s).collect();
        parse_placement(&tokens)
    }
}

/// The robot's state on the table.
///
/// Starts unplaced; becomes placed on the first valid `PLACE` and stays placed for the
/// rest of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    placement: Option<Placement>,
}

impl RobotState {
    /// An unplaced robot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a `PLACE` has landed yet.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Current position and heading, `None` while unplaced.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Puts the robot at `placement`, replacing any previous position.
    pub fn place(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Steps one cell forward. No-op while unplaced or if the step would overflow.
    pub fn advance(&mut self) {
        if let Some(p) = &mut self.placement
            && let Some(next) = p.ahead()
        {
            p.position = next;
        }
    }

    /// Turns 90 degrees anti-clockwise. No-op while unplaced.
    pub fn turn_left(&mut self) {
        if let Some(p) = &mut self.placement {
            p.facing = p.facing.left();
        }
    }

    /// Turns 90 degrees clockwise. No-op while unplaced.
    pub fn turn_right(&mut self) {
        if let Some(p) = &mut self.placement {
            p.facing = p.facing.right();
        }
    }

    /// `X,Y,F` for a placed robot.
    pub fn report(&self) -> Option<String> {
        self.placement.map(|p| p.to_string())
    }
}
