//! Dispatch table from `(day, part)` to a solver.
//!
//! Every solver takes the raw input text and returns one integer answer.

use crate::core::grid::Grid;
use crate::core::memory_scan::{self, InstructionScanner};
use crate::core::{calibration, location_lists, patrol, print_queue, reports, word_search};
use crate::error::{Answer, PuzzleError};

pub const MIN_DAY: u8 = 1;
pub const MAX_DAY: u8 = 25;
pub const MIN_PART: u8 = 1;
pub const MAX_PART: u8 = 2;

/// Per-run knobs forwarded to solvers that need them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Worker threads for the parallel searches (at least 1).
    pub workers: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

pub type Solver = fn(&str, &SolveOptions) -> Result<Answer, PuzzleError>;

#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub day: u8,
    pub title: &'static str,
    pub part_one: Solver,
    pub part_two: Solver,
}

impl Puzzle {
    pub fn part(&self, part: u8) -> Option<Solver> {
        match part {
            1 => Some(self.part_one),
            2 => Some(self.part_two),
            _ => None,
        }
    }
}

pub const PUZZLES: &[Puzzle] = &[
    Puzzle {
        day: 1,
        title: "Historian Hysteria",
        part_one: day01_part_one,
        part_two: day01_part_two,
    },
    Puzzle {
        day: 2,
        title: "Red-Nosed Reports",
        part_one: day02_part_one,
        part_two: day02_part_two,
    },
    Puzzle {
        day: 3,
        title: "Mull It Over",
        part_one: day03_part_one,
        part_two: day03_part_two,
    },
    Puzzle {
        day: 4,
        title: "Ceres Search",
        part_one: day04_part_one,
        part_two: day04_part_two,
    },
    Puzzle {
        day: 5,
        title: "Print Queue",
        part_one: day05_part_one,
        part_two: day05_part_two,
    },
    Puzzle {
        day: 6,
        title: "Guard Gallivant",
        part_one: day06_part_one,
        part_two: day06_part_two,
    },
    Puzzle {
        day: 7,
        title: "Bridge Repair",
        part_one: day07_part_one,
        part_two: day07_part_two,
    },
];

pub fn find(day: u8) -> Option<&'static Puzzle> {
    PUZZLES.iter().find(|puzzle| puzzle.day == day)
}

/// Solver for `(day, part)`, or `None` if that puzzle is not implemented.
pub fn solver(day: u8, part: u8) -> Option<Solver> {
    find(day).and_then(|puzzle| puzzle.part(part))
}

fn count(n: usize) -> Answer {
    n as Answer
}

fn day01_part_one(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    let lists = location_lists::parse(input)?;
    location_lists::total_distance(&lists)
}

fn day01_part_two(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    let lists = location_lists::parse(input)?;
    location_lists::similarity_score(&lists)
}

fn day02_part_one(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(count(reports::count_safe(&reports::parse(input)?)))
}

fn day02_part_two(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(count(reports::count_safe_with_dampener(&reports::parse(input)?)))
}

fn day03_part_one(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    memory_scan::sum_products(&InstructionScanner::new(), input)
}

fn day03_part_two(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    memory_scan::sum_enabled_products(&InstructionScanner::new(), input)
}

fn day04_part_one(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(count(word_search::count_word(&Grid::parse(input)?, "XMAS")))
}

fn day04_part_two(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(count(word_search::count_crossed_mas(&Grid::parse(input)?)))
}

fn day05_part_one(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(print_queue::sum_ordered_middles(&print_queue::parse(input)?))
}

fn day05_part_two(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(print_queue::sum_reordered_middles(&print_queue::parse(
        input,
    )?))
}

fn day06_part_one(input: &str, _: &SolveOptions) -> Result<Answer, PuzzleError> {
    Ok(count(patrol::count_visited(&Grid::parse(input)?)?))
}

fn day06_part_two(input: &str, opts: &SolveOptions) -> Result<Answer, PuzzleError> {
    let grid = Grid::parse(input)?;
    Ok(count(patrol::count_loop_positions_with_workers(
        &grid,
        opts.workers,
    )?))
}

fn day07_part_one(input: &str, opts: &SolveOptions) -> Result<Answer, PuzzleError> {
    let equations = calibration::parse(input)?;
    calibration::total_calibration(&equations, calibration::PART_ONE_OPERATORS, opts.workers)
}

fn day07_part_two(input: &str, opts: &SolveOptions) -> Result<Answer, PuzzleError> {
    let equations = calibration::parse(input)?;
    calibration::total_calibration(&equations, calibration::PART_TWO_OPERATORS, opts.workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::examples;

    #[test]
    fn table_days_are_unique_and_sorted() {
        let days: Vec<u8> = PUZZLES.iter().map(|puzzle| puzzle.day).collect();
        assert_eq!(days, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn solver_rejects_unknown_day_and_part() {
        assert!(solver(8, 1).is_none());
        assert!(solver(1, 3).is_none());
        assert!(solver(6, 2).is_some());
    }

    #[test]
    fn examples_produce_published_answers() {
        let expected: [(u8, Answer, Answer); 7] = [
            (1, 11, 31),
            (2, 2, 4),
            (3, 161, 161),
            (4, 18, 9),
            (5, 143, 123),
            (6, 41, 6),
            (7, 3749, 11387),
        ];
        let opts = SolveOptions { workers: 2 };
        for (day, part_one, part_two) in expected {
            let input = examples::ALL
                .iter()
                .find(|(d, _)| *d == day)
                .map(|(_, input)| *input)
                .expect("example input");
            let puzzle = find(day).expect("puzzle");
            assert_eq!((puzzle.part_one)(input, &opts), Ok(part_one), "day {day} part 1");
            assert_eq!((puzzle.part_two)(input, &opts), Ok(part_two), "day {day} part 2");
        }
    }

    #[test]
    fn patrol_without_start_is_configuration_error() {
        let solve = solver(6, 1).expect("solver");
        let err = solve("....\n.#..\n", &SolveOptions::default()).expect_err("no start");
        assert!(matches!(err, PuzzleError::Configuration(_)));
    }
}
