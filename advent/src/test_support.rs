//! Test-only helpers: published example inputs and temporary input trees.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::SolverConfig;
use crate::io::input::input_path;

/// Example inputs from the puzzle statements.
pub mod examples {
    pub const LOCATION_LISTS: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    pub const REPORTS: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    pub const MEMORY: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

    pub const CONDITIONAL_MEMORY: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    pub const WORD_SEARCH: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    pub const PRINT_QUEUE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    pub const PATROL: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    pub const CALIBRATION: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    /// `(day, input)` for every implemented day.
    pub const ALL: &[(u8, &str)] = &[
        (1, LOCATION_LISTS),
        (2, REPORTS),
        (3, MEMORY),
        (4, WORD_SEARCH),
        (5, PRINT_QUEUE),
        (6, PATROL),
        (7, CALIBRATION),
    ];
}

/// Temporary working directory holding an input tree laid out like
/// `inputs/dayNN/puzzle-input.txt`.
pub struct InputTree {
    dir: TempDir,
    config: SolverConfig,
}

impl InputTree {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let config = SolverConfig {
            input_dir: dir.path().join("inputs"),
            ..SolverConfig::default()
        };
        Ok(Self { dir, config })
    }

    /// Tree pre-populated with every example input.
    pub fn with_examples() -> Result<Self> {
        let tree = Self::new()?;
        for &(day, input) in examples::ALL {
            tree.write_input(day, input)?;
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn write_input(&self, day: u8, contents: &str) -> Result<PathBuf> {
        let path = input_path(&self.config, day);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
