use serde::{Deserialize, Serialize};

/// A single board cell. `revealed` flips to true at most once and is never
/// reset; `flagged` is carried for clients but has no effect on the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub revealed: bool,
    pub is_mine: bool,
    pub flagged: bool,
    pub adjacent_mine_count: u8,
}

/// The playing field: rows x columns of cells, row-major.
pub type Board = ndarray::Array2<Cell>;
