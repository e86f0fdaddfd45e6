use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("failed to load atlas texture {}: {reason}", .path.display())]
    TextureLoad { path: PathBuf, reason: String },
}

pub type Result<T> = core::result::Result<T, Error>;
