use std::sync::Arc;

use crate::service::Minesweeper;
use crate::store::GameStore;

/// Handler state: the service behind an `Arc` so the router clones stay
/// cheap.
pub struct AppState<S: GameStore> {
    pub service: Arc<Minesweeper<S>>,
}

impl<S: GameStore> AppState<S> {
    pub fn new(service: Minesweeper<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl<S: GameStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
