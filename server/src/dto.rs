//! Wire types. Request shapes match the original API; responses carry a
//! redacted board view so unrevealed cells never leak mine placement or
//! adjacency counts to the client.

use serde::{Deserialize, Serialize};

use buscaminas_core::{Cell, Game, GameStatus};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rows: u16,
    #[serde(default)]
    pub columns: u16,
    #[serde(default)]
    pub mines: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClickRequest {
    #[serde(default)]
    pub name: String,
    pub row: i32,
    pub column: i32,
}

#[derive(Clone, Debug, Serialize)]
pub struct BannerResponse {
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Client-facing cell. Mines surface only once the game has ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellView {
    Hidden { flagged: bool },
    Revealed { adjacent_mines: u8 },
    Mine,
}

impl CellView {
    fn from_cell(cell: Cell, reveal_mines: bool) -> Self {
        if cell.revealed {
            Self::Revealed {
                adjacent_mines: cell.adjacent_mine_count,
            }
        } else if cell.is_mine && reveal_mines {
            Self::Mine
        } else {
            Self::Hidden {
                flagged: cell.flagged,
            }
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GameResponse {
    pub name: String,
    pub rows: u8,
    pub columns: u8,
    pub mines: u16,
    pub revealed_count: u16,
    pub status: GameStatus,
    pub board: Vec<Vec<CellView>>,
}

impl GameResponse {
    pub fn from_game(game: &Game) -> Self {
        let reveal_mines = game.status().is_terminal();
        let board = (0..game.rows())
            .map(|row| {
                (0..game.columns())
                    .map(|column| CellView::from_cell(game.cell_at((row, column)), reveal_mines))
                    .collect()
            })
            .collect();
        Self {
            name: game.name().to_owned(),
            rows: game.rows(),
            columns: game.columns(),
            mines: game.mines(),
            revealed_count: game.revealed_count(),
            status: game.status(),
            board,
        }
    }
}
