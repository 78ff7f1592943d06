//! Puzzle solver CLI.
//!
//! Runs every puzzle with an input file, one day, or a single part, and prints
//! a results table with per-puzzle timings.

use std::path::PathBuf;
use std::time::Instant;

use advent::exit_codes;
use advent::io::config::{DEFAULT_CONFIG_FILE, SolverConfig, load_config};
use advent::logging;
use advent::puzzles::{MAX_DAY, MAX_PART, MIN_DAY, MIN_PART, PUZZLES};
use advent::report::{render_catalog, render_table};
use advent::run::{Selection, run};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "advent",
    version,
    about = "Solve text-based puzzles and print a results table"
)]
struct Cli {
    /// Run a specific day.
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_DAY)..=i64::from(MAX_DAY))
    )]
    day: Option<u8>,

    /// Run a specific part (requires --day).
    #[arg(
        long,
        requires = "day",
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_PART)..=i64::from(MAX_PART))
    )]
    part: Option<u8>,

    /// Enable debug tracing and show error details.
    #[arg(long)]
    debug: bool,

    /// List implemented puzzles and exit.
    #[arg(long, conflicts_with_all = ["day", "part"])]
    list: bool,

    /// Config file (missing file means defaults).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the input directory.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Override the worker count (0 = all cores).
    #[arg(long)]
    workers: Option<usize>,
}

impl Cli {
    fn selection(&self) -> Selection {
        match (self.day, self.part) {
            (Some(day), Some(part)) => Selection::DayPart(day, part),
            (Some(day), None) => Selection::Day(day),
            _ => Selection::All,
        }
    }

    fn apply_overrides(&self, mut cfg: SolverConfig) -> Result<SolverConfig> {
        if let Some(input_dir) = &self.input_dir {
            cfg.input_dir = input_dir.clone();
        }
        if let Some(workers) = self.workers {
            cfg.workers = workers;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);
    match run_cli(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run_cli(cli: &Cli) -> Result<i32> {
    if cli.list {
        print!("{}", render_catalog(PUZZLES));
        return Ok(exit_codes::OK);
    }

    let cfg = load_config(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    let cfg = cli.apply_overrides(cfg)?;
    debug!(?cfg, "configuration loaded");

    let started = Instant::now();
    let results = run(cli.selection(), &cfg);
    print!("{}", render_table(&results, started.elapsed(), cli.debug));

    if results.iter().all(|result| result.is_solved()) {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::UNSOLVED)
    }
}
