//! The simulation engine that drives a [`RobotState`] with parsed [`Command`]s.
//!
//! The entry point is [`Simulator`]. Build it from a [`SimulatorConfig`], then either
//! feed it commands one at a time with [`Simulator::execute`] (or the lower-level
//! [`Simulator::validate`] / [`Simulator::apply`] pair), or hand it a whole script of
//! lines with [`Simulator::run`].

use crate::command::{Command, parse};
use crate::error::{ConfigError, SimulationError};
use crate::robot::{Placement, RobotState};
use crate::table::{DEFAULT_TABLE_SIZE, TableBounds};
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

/// What [`Simulator::run`] does with a line that fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParseErrorPolicy {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Log the error and carry on with the next line.
    Skip,
}

/// Configuration for a simulation run.
///
/// Deserializes from camelCase keys (`tableSize`, `onParseError`); missing keys take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulatorConfig {
    /// Side length of the square table. Default: 5.
    pub table_size: u32,
    /// Default: [`ParseErrorPolicy::Abort`].
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            on_parse_error: ParseErrorPolicy::Abort,
        }
    }
}

impl SimulatorConfig {
    /// Reads a configuration from TOML text.
    ///
    /// ```
    /// use toy_robot::SimulatorConfig;
    ///
    /// let config = SimulatorConfig::from_toml_str("tableSize = 8").unwrap();
    /// assert_eq!(config.table_size, 8);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// A single robot on a single table.
///
/// Every command goes through [`validate`](Self::validate) before
/// [`apply`](Self::apply); a command that fails validation is dropped and the state
/// is left untouched.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    state: RobotState,
    bounds: TableBounds,
    on_parse_error: ParseErrorPolicy,
}

impl Simulator {
    /// Creates an unplaced robot on a table sized by `config`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTableSize`] if the table size is zero or exceeds `i32::MAX`.
    pub fn new(config: SimulatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: RobotState::new(),
            bounds: TableBounds::new(config.table_size)?,
            on_parse_error: config.on_parse_error,
        })
    }

    /// The robot as it stands now.
    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// The table this robot is confined to.
    pub fn bounds(&self) -> &TableBounds {
        &self.bounds
    }

    /// Whether `cmd` may be applied to the current state.
    ///
    /// * `PLACE` must target a cell on the table.
    /// * `MOVE` needs a placed robot whose next cell is on the table.
    /// * `LEFT`, `RIGHT` and `REPORT` need a placed robot.
    pub fn validate(&self, cmd: &Command) -> bool {
        match cmd {
            Command::Place(placement) => self.bounds.contains(placement.position),
            Command::Move => self
                .state
                .placement()
                .and_then(Placement::ahead)
                .is_some_and(|cell| self.bounds.contains(cell)),
            Command::Left | Command::Right | Command::Report => self.state.is_placed(),
        }
    }

    /// Carries out `cmd` without checking it. Returns the report line for `REPORT`.
    ///
    /// Only call this with commands that passed [`validate`](Self::validate); applying
    /// an off-table `PLACE` would leave the robot off the table.
    pub fn apply(&mut self, cmd: &Command) -> Option<String> {
        match cmd {
            Command::Place(placement) => self.state.place(*placement),
            Command::Move => self.state.advance(),
            Command::Left => self.state.turn_left(),
            Command::Right => self.state.turn_right(),
            Command::Report => return self.report(),
        }
        trace!("{cmd} -> {:?}", self.state.placement());
        None
    }

    /// Current `X,Y,F`, or `None` while the robot is unplaced.
    pub fn report(&self) -> Option<String> {
        self.state.report()
    }

    /// Validates and, if valid, applies `cmd`.
    ///
    /// Returns the report line for a valid `REPORT`, `None` otherwise.
    pub fn execute(&mut self, cmd: &Command) -> Option<String> {
        if !self.validate(cmd) {
            debug!("ignoring {cmd}: not valid from {:?}", self.state.placement());
            return None;
        }
        info!("Robot: {}", cmd.kind());
        self.apply(cmd)
    }

    /// Parses and executes one input line.
    ///
    /// `line_no` is 1-based and only used for error reporting. Under
    /// [`ParseErrorPolicy::Skip`] a malformed line yields `Ok(None)`.
    pub fn execute_line(
        &mut self,
        line_no: usize,
        line: &str,
    ) -> Result<Option<String>, SimulationError> {
        match parse(line) {
            Ok(cmd) => Ok(self.execute(&cmd)),
            Err(source) => match self.on_parse_error {
                ParseErrorPolicy::Abort => Err(SimulationError::Parse {
                    line: line_no,
                    source,
                }),
                ParseErrorPolicy::Skip => {
                    warn!("skipping line {line_no}: {source}");
                    Ok(None)
                }
            },
        }
    }

    /// Runs every line in order and collects the `REPORT` output.
    ///
    /// # Errors
    ///
    /// Under [`ParseErrorPolicy::Abort`], the first line that fails to parse ends the
    /// run with [`SimulationError::Parse`]. Commands applied before it stay applied.
    pub fn run<I, S>(&mut self, lines: I) -> Result<Vec<String>, SimulationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reports = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            if let Some(report) = self.execute_line(idx + 1, line.as_ref())? {
                reports.push(report);
            }
        }
        Ok(reports)
    }
}
