//! Headless survey of the board generator over many seeds

use std::time::Instant;

use clap::Parser;
use flexi_logger::Logger;
use rayon::prelude::*;
use treasure_hunt::domain::{BoardGenerator, CELL_COUNT, CENTER, Generation, Tile};

#[derive(Debug, Parser)]
#[command(name = "survey", about = "Generate many boards and report their statistics")]
struct SurveyOptions {
    /// Number of boards to generate
    #[arg(short, long, default_value_t = 10_000)]
    boards: u64,

    /// First seed; boards use seed, seed + 1, ...
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Print the first generated board
    #[arg(long, default_value_t = false)]
    show: bool,
}

/// Aggregated results over a batch of boards
#[derive(Clone, Debug)]
struct Survey {
    boards: u64,
    rocks: u64,
    removed: u64,
    min_removed: usize,
    max_removed: usize,
    treasure_hits: Vec<u64>,
    violations: u64,
}

impl Survey {
    fn empty() -> Self {
        Self {
            boards: 0,
            rocks: 0,
            removed: 0,
            min_removed: usize::MAX,
            max_removed: 0,
            treasure_hits: vec![0; CELL_COUNT],
            violations: 0,
        }
    }

    fn of(generation: &Generation) -> Self {
        let board = &generation.board;
        let removed = board.removed_count();
        let mut survey = Self::empty();
        survey.boards = 1;
        survey.rocks = board.rock_count() as u64;
        survey.removed = removed as u64;
        survey.min_removed = removed;
        survey.max_removed = removed;
        survey.treasure_hits[generation.treasure.index()] = 1;
        survey.violations = u64::from(!is_well_formed(generation));
        survey
    }

    fn merge(mut self, other: Self) -> Self {
        self.boards += other.boards;
        self.rocks += other.rocks;
        self.removed += other.removed;
        self.min_removed = self.min_removed.min(other.min_removed);
        self.max_removed = self.max_removed.max(other.max_removed);
        self.treasure_hits
            .iter_mut()
            .zip(other.treasure_hits)
            .for_each(|(a, b)| *a += b);
        self.violations += other.violations;
        self
    }
}

/// One treasure, a safe centre, and no two removed cells touching
fn is_well_formed(generation: &Generation) -> bool {
    let board = &generation.board;
    let removed: Vec<_> = board
        .iter_tiles()
        .filter(|(_, tile)| !tile.has_base)
        .map(|(pos, _)| pos)
        .collect();
    let spread = removed
        .iter()
        .all(|a| removed.iter().all(|b| !a.is_adjacent(*b)));

    board.treasure_count() == 1 && board.at(CENTER) == Tile::START && spread
}

fn main() -> anyhow::Result<()> {
    let options = SurveyOptions::parse();
    let _logger = Logger::try_with_env_or_str("info")?.log_to_stderr().start()?;

    if options.show {
        let board = BoardGenerator::new(options.seed).generate();
        println!("seed {}:\n{board}", options.seed);
    }

    let start = Instant::now();
    let survey = (options.seed..options.seed.saturating_add(options.boards))
        .into_par_iter()
        .map(|seed| Survey::of(&BoardGenerator::new(seed).generate_traced()))
        .reduce(Survey::empty, Survey::merge);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if survey.boards == 0 {
        log::warn!("no boards generated");
        return Ok(());
    }

    let n = survey.boards as f64;
    println!("Boards:          {}", survey.boards);
    println!("Time:            {elapsed_ms:.1}ms ({:.2}us/board)", elapsed_ms * 1000.0 / n);
    println!("Rocks/board:     {:.2}", survey.rocks as f64 / n);
    println!(
        "Removed/board:   {:.2} (min {}, max {})",
        survey.removed as f64 / n,
        survey.min_removed,
        survey.max_removed
    );

    let hits = &survey.treasure_hits;
    let expected = n / (CELL_COUNT as f64);
    println!("Treasure/cell:   {expected:.1} expected");
    println!("  centre (60):   {}", hits[CENTER.index()]);
    println!("  after (61):    {}", hits[CENTER.index() + 1]);
    if let (Some(lo), Some(hi)) = (
        hits.iter().enumerate().filter(|(i, _)| *i != CENTER.index()).min_by_key(|(_, h)| **h),
        hits.iter().enumerate().max_by_key(|(_, h)| **h),
    ) {
        println!("  least:         index {} ({})", lo.0, lo.1);
        println!("  most:          index {} ({})", hi.0, hi.1);
    }

    if survey.violations > 0 {
        log::error!("{} boards broke a structural invariant", survey.violations);
        anyhow::bail!("generator produced malformed boards");
    }
    println!("All boards well formed");
    Ok(())
}
