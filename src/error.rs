//! Error types.
//!
//! Only malformed input and bad configuration are errors. A well-formed command that
//! the robot cannot carry out (off the table, not yet placed) is dropped by the
//! [`Simulator`](crate::Simulator) instead.

use thiserror::Error;

/// Why a command line could not be turned into a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command specified: line is empty")]
    EmptyInput,
    #[error("Invalid command specified: {0:?}")]
    UnknownCommand(String),
    #[error(
        "Invalid PLACE command options, please specify exactly 3 options in the following format: PLACE X,Y,F (got {0})"
    )]
    MalformedPlaceArgs(usize),
    #[error("Invalid number format for PLACE X,Y,F command options: {0:?}")]
    InvalidNumber(String),
    #[error("Invalid Facing option for PLACE X,Y,F command: {0:?}")]
    InvalidDirection(String),
}

/// Rejected [`SimulatorConfig`](crate::SimulatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("table size must be between 1 and {max}, got {0}", max = i32::MAX)]
    InvalidTableSize(u32),
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure while driving a sequence of lines through a simulator.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("line {line}")]
    Parse {
        /// 1-based line number.
        line: usize,
        source: ParseError,
    },
}
