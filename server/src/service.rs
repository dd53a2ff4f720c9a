//! The service layer: validates requests, drives the engine, and talks to
//! the store. Every operation logs its outcome, so the HTTP layer stays a
//! thin codec.

use buscaminas_core::{Game, GameConfig, GameError, RandomBoardGenerator};

use crate::dto::{ClickRequest, CreateGameRequest};
use crate::error::ApiError;
use crate::store::GameStore;

const BANNER: &str = "Todas las hojas son del viento";

pub struct Minesweeper<S> {
    store: S,
}

impl<S: GameStore> Minesweeper<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Service greeting, kept from the original deployment.
    pub fn banner(&self) -> &'static str {
        BANNER
    }

    /// Resolves the requested dimensions, generates a board from a fresh
    /// seed, and stores the new game.
    pub fn create_game(&self, req: &CreateGameRequest) -> Result<Game, ApiError> {
        let config = GameConfig::resolve(req.rows, req.columns, req.mines).inspect_err(|err| {
            tracing::warn!(name = %req.name, error = %err, "rejected game creation");
        })?;

        let generator = RandomBoardGenerator::new(rand::random());
        let game = Game::create(req.name.clone(), config, generator)?;
        self.store.insert(game.clone()).inspect_err(|err| {
            tracing::warn!(name = %req.name, error = %err, "could not store new game");
        })?;

        tracing::info!(
            name = %game.name(),
            rows = config.rows,
            columns = config.columns,
            mines = config.mines,
            "created game"
        );
        Ok(game)
    }

    pub fn load_game(&self, name: &str) -> Result<Game, ApiError> {
        if name.is_empty() {
            return Err(GameError::MissingName.into());
        }
        let game = self.store.get(name)?;
        tracing::debug!(name = %game.name(), status = ?game.status(), "loaded game");
        Ok(game)
    }

    pub fn save_game(&self, game: Game) -> Result<(), ApiError> {
        self.store.update(game)?;
        Ok(())
    }

    /// Applies one click under the game's store lock, so the whole
    /// load-click-save cycle is atomic per game name.
    pub fn click(&self, req: &ClickRequest) -> Result<Game, ApiError> {
        if req.name.is_empty() {
            return Err(GameError::MissingName.into());
        }

        let outcome = self.store.update_with(&req.name, |game| {
            game.click(req.row, req.column).map(|()| game.clone())
        })?;
        let game = outcome.inspect_err(|err| {
            tracing::warn!(name = %req.name, row = req.row, column = req.column, error = %err, "rejected click");
        })?;

        tracing::info!(
            name = %game.name(),
            row = req.row,
            column = req.column,
            revealed = game.revealed_count(),
            status = ?game.status(),
            "applied click"
        );
        Ok(game)
    }
}
