use rand::prelude::*;

use crate::*;

/// Uniform rejection-sampling generator with an injected seed, so layouts
/// are reproducible under test while the service varies the seed per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig) -> Board {
        let total_cells = config.total_cells();
        let mut board = Board::default((config.rows as usize, config.columns as usize));

        // rejection sampling cannot terminate on a full board; resolve()
        // rejects these, so only hand-built configs land here
        if config.mines >= total_cells {
            log::warn!(
                "mine count {} fills the whole {}x{} board",
                config.mines,
                config.rows,
                config.columns
            );
            board.map_inplace(|cell| cell.is_mine = true);
            return board;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        {
            let cells = board.as_slice_mut().expect("row-major layout");
            while mines_placed < config.mines {
                let spot = rng.random_range(0..total_cells) as usize;
                if !cells[spot].is_mine {
                    cells[spot].is_mine = true;
                    mines_placed += 1;
                }
            }
        }

        fill_adjacent_counts(&mut board);
        board
    }
}
