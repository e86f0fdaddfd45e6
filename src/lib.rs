// Domain layer - board model and generation
pub mod domain;

// Application layer - game state machine and view queries
pub mod application;

// Infrastructure layer - rendering, input, configuration
pub mod input;
pub mod options;
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{Camera, GameState, Intent};
pub use domain::{BoardGenerator, Position, Tile, TileBoard};
pub use error::{Error, Result};
pub use options::Options;
