mod board;
mod generator;
mod position;
mod tile;

pub use board::TileBoard;
pub use generator::{BoardGenerator, Generation, REMOVAL_CHANCE, ROCK_ODDS};
pub use position::{BOARD_SIZE, CELL_COUNT, CENTER, Direction, Position};
pub use tile::Tile;
