//! Puzzle input discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::io::config::SolverConfig;

/// `<input_dir>/dayNN/<input_file>` for `day`.
pub fn input_path(cfg: &SolverConfig, day: u8) -> PathBuf {
    cfg.input_dir
        .join(format!("day{day:02}"))
        .join(&cfg.input_file)
}

pub fn has_input(cfg: &SolverConfig, day: u8) -> bool {
    input_path(cfg, day).is_file()
}

/// Read the whole input file for `day`.
pub fn read_input(cfg: &SolverConfig, day: u8) -> Result<String> {
    let path = input_path(cfg, day);
    read_file(&path)
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("input file does not exist: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
