//! The tabletop the robot moves on.

use crate::error::ConfigError;
use glam::IVec2;

/// Default side length of the tabletop.
pub const DEFAULT_TABLE_SIZE: u32 = 5;

/// A square tabletop of `size x size` cells.
///
/// Valid cells have both coordinates in `0..size`. The size is capped at `i32::MAX`
/// so that a single step from any valid cell stays representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableBounds {
    size: i32,
}

impl TableBounds {
    /// A `size x size` table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTableSize`] if `size` is zero or exceeds `i32::MAX`.
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        match i32::try_from(size) {
            Ok(size) if size > 0 => Ok(Self { size }),
            _ => Err(ConfigError::InvalidTableSize(size)),
        }
    }

    /// Side length in cells.
    pub fn size(&self) -> u32 {
        self.size as u32
    }

    /// Whether `cell` lies on the table.
    pub fn contains(&self, cell: IVec2) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }
}

impl Default for TableBounds {
    fn default() -> Self {
        Self {
            size: DEFAULT_TABLE_SIZE as i32,
        }
    }
}
