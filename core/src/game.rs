use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Game progress. `New` covers every board still accepting moves; the two
/// terminal states never transition away.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    New,
    GameOver,
    Victory,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// A self-contained game identified by `name`. Created once, then mutated in
/// place by [`Game::click`] until a terminal status is reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    name: String,
    rows: Coord,
    columns: Coord,
    mines: CellCount,
    board: Board,
    revealed_count: CellCount,
    status: GameStatus,
}

impl Game {
    /// Builds a fresh game over a board produced by `generator`. The name
    /// must be non-empty; `config` is trusted to be resolved already.
    pub fn create(
        name: impl Into<String>,
        config: GameConfig,
        generator: impl BoardGenerator,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::MissingName);
        }
        let board = generator.generate(&config);
        log::debug!(
            "created game {:?}: {}x{}, {} mines",
            name,
            config.rows,
            config.columns,
            config.mines
        );
        Ok(Self {
            name,
            rows: config.rows,
            columns: config.columns,
            mines: config.mines,
            board,
            revealed_count: 0,
            status: GameStatus::New,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn columns(&self) -> Coord {
        self.columns
    }

    pub fn mines(&self) -> CellCount {
        self.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    /// Applies a player move. On a mine the status flips to `GameOver` and
    /// the mine itself stays unrevealed and uncounted; otherwise the cell is
    /// revealed, zero-count cells cascade through their connected region,
    /// and the win condition is re-checked. Every error path leaves the game
    /// untouched.
    pub fn click(&mut self, row: i32, column: i32) -> Result<()> {
        if self.status.is_terminal() {
            return Err(GameError::GameFinished);
        }
        let coords = self.validate_coords(row, column)?;
        let target = self.board[coords.to_nd_index()];
        if target.revealed {
            return Err(GameError::AlreadyRevealed);
        }
        if target.is_mine {
            log::debug!("game {:?} hit a mine at {:?}", self.name, coords);
            self.status = GameStatus::GameOver;
            return Ok(());
        }

        self.reveal_cell(coords);
        if target.adjacent_mine_count == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count + self.mines == self.total_cells() {
            log::debug!("game {:?} won", self.name);
            self.status = GameStatus::Victory;
        }
        Ok(())
    }

    fn validate_coords(&self, row: i32, column: i32) -> Result<Coord2> {
        if row < 0 || row >= i32::from(self.rows) {
            return Err(GameError::InvalidRow);
        }
        if column < 0 || column >= i32::from(self.columns) {
            return Err(GameError::InvalidColumn);
        }
        Ok((row as Coord, column as Coord))
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        let cell = &mut self.board[coords.to_nd_index()];
        cell.revealed = true;
        self.revealed_count += 1;
        log::trace!(
            "revealed {:?}, adjacent mines: {}",
            coords,
            cell.adjacent_mine_count
        );
    }

    /// Iterative expansion through the connected zero-count region. A cell's
    /// `revealed` flag flips exactly once, which doubles as the visited
    /// check and bounds the worklist.
    fn flood_fill(&mut self, start: Coord2) {
        let size = self.size();
        let mut to_visit: VecDeque<Coord2> = neighbors(start, size).collect();

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board[coords.to_nd_index()];
            if cell.revealed || cell.is_mine {
                continue;
            }
            self.reveal_cell(coords);
            if cell.adjacent_mine_count == 0 {
                to_visit.extend(
                    neighbors(coords, size)
                        .filter(|&pos| !self.board[pos.to_nd_index()].revealed),
                );
            }
        }
    }
}
