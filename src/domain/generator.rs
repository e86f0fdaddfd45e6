//! Procedural board generation.
//!
//! A board is built in three passes over a fresh grid:
//! 1. pick the treasure cell (never the centre),
//! 2. seed rocks independently on every cell,
//! 3. thin the floor by removing cells at random, never two touching ones,
//!
//! and then the treasure and starting cells are forced to their fixed tiles.

use rand::prelude::*;

use super::{BOARD_SIZE, CELL_COUNT, CENTER, Position, Tile, TileBoard};

/// One cell in `ROCK_ODDS` starts with a rock
pub const ROCK_ODDS: u32 = 5;

/// Chance that a still-removable cell is removed by the thinning pass
pub const REMOVAL_CHANCE: f64 = 0.5;

/// Output of a generation run, including how the thinning pass went
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub board: TileBoard,
    pub treasure: Position,
    /// Cells removed by the thinning pass, in removal order.
    /// The treasure cell may appear here even though it is restored afterwards.
    pub removal_order: Vec<Position>,
}

/// Seeded board generator. The same seed always produces the same board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGenerator {
    seed: u64,
}

impl BoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self) -> TileBoard {
        self.generate_traced().board
    }

    pub fn generate_traced(&self) -> Generation {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let treasure = Self::pick_treasure(&mut rng);

        let mut board = TileBoard::new();
        for pos in Position::all() {
            let tile = if rng.random_ratio(1, ROCK_ODDS) {
                Tile::ROCK
            } else {
                Tile::PLAIN
            };
            board.set(pos, tile);
        }

        let removal_order = Self::thin(&mut board, &mut rng);

        board.set(treasure, Tile::TREASURE);
        board.set(CENTER, Tile::START);

        log::debug!(
            "generated board seed={} treasure=({}, {}) removed={} rocks={}",
            self.seed,
            treasure.x(),
            treasure.y(),
            board.removed_count(),
            board.rock_count()
        );
        log::trace!("board layout:\n{board}");

        Generation {
            board,
            treasure,
            removal_order,
        }
    }

    /// Uniform index over the board, nudged off the centre by one.
    /// This makes index 61 twice as likely as any other cell.
    fn pick_treasure(rng: &mut impl Rng) -> Position {
        Position::from_index(treasure_index(rng.random_range(0..CELL_COUNT)))
    }

    /// Remove floor tiles, visiting cells in a toroidally shifted order.
    /// Each removal locks its whole 3x3 block, so no two removed cells touch.
    fn thin(board: &mut TileBoard, rng: &mut impl Rng) -> Vec<Position> {
        let start = Position::from_index(rng.random_range(0..CELL_COUNT));
        let mut removed = Vec::new();

        for pos in visit_order(start) {
            // The coin is only flipped for eligible cells
            if board.at(pos).can_del && pos != CENTER && rng.random_bool(REMOVAL_CHANCE) {
                board.tile_mut(pos).has_base = false;
                for neighbor in pos.neighborhood() {
                    board.tile_mut(neighbor).can_del = false;
                }
                removed.push(pos);
            }
        }

        removed
    }
}

/// Map a raw draw in `0..CELL_COUNT` to the treasure index.
/// Only the centre moves, and only one step forward.
fn treasure_index(raw: usize) -> usize {
    if raw == CENTER.index() { raw + 1 } else { raw }
}

/// Every cell once, with both axes shifted by `start` and wrapped around the board
fn visit_order(start: Position) -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE)
        .flat_map(|i| (0..BOARD_SIZE).map(move |j| (i, j)))
        .map(move |(i, j)| {
            let x = (i + start.x()) % BOARD_SIZE;
            let y = (j + start.y()) % BOARD_SIZE;
            Position::from_index(x * BOARD_SIZE + y)
        })
}
