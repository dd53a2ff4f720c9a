use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game name is required")]
    MissingName,
    #[error("Mine count must leave at least one safe cell")]
    InvalidDimensions,
    #[error("Invalid row")]
    InvalidRow,
    #[error("Invalid column")]
    InvalidColumn,
    #[error("Cell already revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    GameFinished,
}

pub type Result<T> = std::result::Result<T, GameError>;
