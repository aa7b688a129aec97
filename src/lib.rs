//! # toy-robot
//!
//! A toy robot simulator: a robot roams a square tabletop, driven by plain-text
//! commands (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! The crate separates the *grammar* (turning a line into a [`Command`]) from the
//! *state machine* (a [`Simulator`] that validates each command against the robot's
//! current [`RobotState`] and the [`TableBounds`] before applying it). Commands that
//! would drop the robot off the table, or that arrive before it has been placed, are
//! silently ignored.
//!
//! ```
//! use toy_robot::{Simulator, SimulatorConfig};
//!
//! let mut sim = Simulator::new(SimulatorConfig::default()).unwrap();
//! let out = sim.run(["PLACE 0,0,NORTH", "MOVE", "REPORT"]).unwrap();
//! assert_eq!(out, vec!["0,1,NORTH".to_string()]);
//! ```

pub mod command;
pub mod error;
pub mod robot;
pub mod simulator;
pub mod table;

pub use command::*;
pub use error::*;
pub use robot::*;
pub use simulator::*;
pub use table::*;
