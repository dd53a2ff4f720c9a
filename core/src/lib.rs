use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod cell;
mod error;
mod game;
mod generator;
mod types;

/// Hard cap on either board dimension; larger requests are clamped, not
/// rejected.
pub const MAX_DIMENSION: Coord = 36;

pub const DEFAULT_ROWS: Coord = 8;
pub const DEFAULT_COLUMNS: Coord = 8;
pub const DEFAULT_MINES: CellCount = 14;

/// Resolved board parameters. Only [`GameConfig::resolve`] checks the mine
/// count; the `new_unchecked` constructor exists for callers that already
/// hold a valid configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    /// Applies the defaults to zero fields, caps rows and columns at
    /// [`MAX_DIMENSION`], and rejects mine counts that would not leave a
    /// single safe cell. Sub-default dimensions (down to 1) pass through
    /// unchanged.
    pub fn resolve(rows: u16, columns: u16, mines: u16) -> Result<Self> {
        let rows = resolve_axis(rows, DEFAULT_ROWS);
        let columns = resolve_axis(columns, DEFAULT_COLUMNS);
        let mines = if mines == 0 { DEFAULT_MINES } else { mines };
        if mines >= mult(rows, columns) {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(rows, columns, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }
}

fn resolve_axis(requested: u16, default: Coord) -> Coord {
    if requested == 0 {
        default
    } else {
        requested.min(MAX_DIMENSION as u16) as Coord
    }
}
