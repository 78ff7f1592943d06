//! Solver configuration stored in `advent.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::workers;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "advent.toml";

/// Solver configuration (TOML).
///
/// Missing fields take their defaults, so an empty file is a valid config.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Directory holding one `dayNN/` subdirectory per puzzle.
    pub input_dir: PathBuf,

    /// File name of the puzzle input inside each `dayNN/` directory.
    pub input_file: String,

    /// Worker threads for the parallel searches; 0 uses every available core.
    pub workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("inputs"),
            input_file: "puzzle-input.txt".to_string(),
            workers: 0,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(anyhow!("input_dir must not be empty"));
        }
        let name = self.input_file.trim();
        if name.is_empty() {
            return Err(anyhow!("input_file must not be empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(anyhow!("input_file must be a bare file name, got '{name}'"));
        }
        Ok(())
    }

    /// Worker count with 0 resolved to the machine's parallelism.
    pub fn effective_workers(&self) -> usize {
        match self.workers {
            0 => workers::default_workers(),
            n => n,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SolverConfig::default());
    }

    #[test]
    fn load_reads_every_field() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("advent.toml");
        fs::write(
            &path,
            "input_dir = \"puzzles\"\ninput_file = \"input.txt\"\nworkers = 4\n",
        )
        .expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(
            loaded,
            SolverConfig {
                input_dir: PathBuf::from("puzzles"),
                input_file: "input.txt".to_string(),
                workers: 4,
            }
        );
    }

    #[test]
    fn mistyped_field_is_a_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("advent.toml");
        fs::write(&path, "workers = \"many\"\n").expect("write");
        let err = load_config(&path).expect_err("bad type");
        assert!(format!("{err:#}").contains("parse"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("advent.toml");
        fs::write(&path, "workers = 2\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.workers, 2);
        assert_eq!(cfg.input_file, "puzzle-input.txt");
    }

    #[test]
    fn rejects_path_in_input_file() {
        let cfg = SolverConfig {
            input_file: "day01/input.txt".to_string(),
            ..SolverConfig::default()
        };
        let err = cfg.validate().expect_err("invalid");
        assert!(err.to_string().contains("bare file name"));
    }

    #[test]
    fn zero_workers_resolves_to_available_parallelism() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.effective_workers(), workers::default_workers());
        let cfg = SolverConfig {
            workers: 3,
            ..SolverConfig::default()
        };
        assert_eq!(cfg.effective_workers(), 3);
    }
}
