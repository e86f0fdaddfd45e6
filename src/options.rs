use std::path::PathBuf;

use clap::Parser;

use crate::domain::BoardGenerator;

/// Command-line options for the game
#[derive(Clone, Debug, Parser)]
#[command(name = "treasure-hunt", about = "Dig through the rocks to find the buried treasure")]
pub struct Options {
    /// Seed for board generation; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// PNG sprite atlas; flat shapes are drawn without one
    #[arg(short, long)]
    pub atlas: Option<PathBuf>,

    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Options {
    pub fn generator(&self) -> BoardGenerator {
        match self.seed {
            Some(seed) => BoardGenerator::new(seed),
            None => BoardGenerator::from_entropy(),
        }
    }

    /// Logger spec, falling back to `info`
    pub fn log_spec(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
