//! Timed execution of selected puzzles.
//!
//! Coordinates input lookup, dispatch and timing. Failures of individual
//! puzzles are recorded on their row, never raised.

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use tracing::{debug, info, instrument};

use crate::error::Answer;
use crate::io::config::SolverConfig;
use crate::io::input::{has_input, read_input};
use crate::puzzles::{self, MAX_DAY, MAX_PART, MIN_DAY, MIN_PART, SolveOptions};

/// Which puzzles to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every implemented part of every day that has an input file.
    All,
    /// Both parts of one day.
    Day(u8),
    /// One part of one day.
    DayPart(u8, u8),
}

/// One row of the results table.
#[derive(Debug)]
pub struct PuzzleResult {
    pub day: u8,
    pub part: u8,
    pub outcome: Result<Answer>,
    pub duration: Duration,
}

impl PuzzleResult {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Run the selected puzzles in day/part order.
#[instrument(skip(cfg))]
pub fn run(selection: Selection, cfg: &SolverConfig) -> Vec<PuzzleResult> {
    let opts = SolveOptions {
        workers: cfg.effective_workers(),
    };
    debug!(workers = opts.workers, "solve options");

    let results: Vec<PuzzleResult> = match selection {
        Selection::DayPart(day, part) => vec![solve_timed(cfg, &opts, day, part)],
        Selection::Day(day) => (MIN_PART..=MAX_PART)
            .map(|part| solve_timed(cfg, &opts, day, part))
            .collect(),
        Selection::All => (MIN_DAY..=MAX_DAY)
            .filter(|&day| has_input(cfg, day))
            .flat_map(|day| {
                (MIN_PART..=MAX_PART)
                    .filter(move |&part| puzzles::solver(day, part).is_some())
                    .map(move |part| (day, part))
            })
            .map(|(day, part)| solve_timed(cfg, &opts, day, part))
            .collect(),
    };

    let solved = results.iter().filter(|r| r.is_solved()).count();
    info!(solved, total = results.len(), "run finished");
    results
}

fn solve_timed(cfg: &SolverConfig, opts: &SolveOptions, day: u8, part: u8) -> PuzzleResult {
    let started = Instant::now();
    let outcome = solve(cfg, opts, day, part);
    let duration = started.elapsed();
    match &outcome {
        Ok(answer) => debug!(day, part, answer, ?duration, "solved"),
        Err(err) => debug!(day, part, error = %format!("{err:#}"), "failed"),
    }
    PuzzleResult {
        day,
        part,
        outcome,
        duration,
    }
}

/// Solve one puzzle from its input file.
pub fn solve(cfg: &SolverConfig, opts: &SolveOptions, day: u8, part: u8) -> Result<Answer> {
    let input = read_input(cfg, day)?;
    let solver = puzzles::solver(day, part).ok_or_else(|| anyhow!("puzzle not implemented"))?;
    solver(&input, opts).map_err(|err| anyhow!(err).context(format!("day {day} part {part}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InputTree;

    fn answers(results: &[PuzzleResult]) -> Vec<(u8, u8, Option<Answer>)> {
        results
            .iter()
            .map(|r| (r.day, r.part, r.outcome.as_ref().ok().copied()))
            .collect()
    }

    #[test]
    fn day_part_runs_single_puzzle() {
        let tree = InputTree::with_examples().expect("tree");
        let results = run(Selection::DayPart(6, 1), tree.config());
        assert_eq!(answers(&results), vec![(6, 1, Some(41))]);
    }

    #[test]
    fn day_runs_both_parts() {
        let tree = InputTree::with_examples().expect("tree");
        let results = run(Selection::Day(6), tree.config());
        assert_eq!(answers(&results), vec![(6, 1, Some(41)), (6, 2, Some(6))]);
    }

    #[test]
    fn all_skips_days_without_input() {
        let tree = InputTree::new().expect("tree");
        tree.write_input(2, crate::test_support::examples::REPORTS)
            .expect("write");
        tree.write_input(12, "unimplemented day\n").expect("write");
        let results = run(Selection::All, tree.config());
        assert_eq!(answers(&results), vec![(2, 1, Some(2)), (2, 2, Some(4))]);
    }

    #[test]
    fn all_runs_every_example() {
        let tree = InputTree::with_examples().expect("tree");
        let results = run(Selection::All, tree.config());
        assert_eq!(results.len(), 14);
        assert!(results.iter().all(PuzzleResult::is_solved));
    }

    #[test]
    fn missing_input_is_reported_on_the_row() {
        let tree = InputTree::new().expect("tree");
        let results = run(Selection::DayPart(3, 2), tree.config());
        assert_eq!(results.len(), 1);
        let err = results[0].outcome.as_ref().expect_err("missing input");
        assert!(err.to_string().contains("input file does not exist"));
    }

    #[test]
    fn unimplemented_day_is_reported_on_each_row() {
        let tree = InputTree::new().expect("tree");
        tree.write_input(20, "x\n").expect("write");
        let results = run(Selection::Day(20), tree.config());
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.outcome.as_ref().expect_err("not implemented");
            assert_eq!(err.to_string(), "puzzle not implemented");
        }
    }

    #[test]
    fn puzzle_errors_carry_day_and_part() {
        let tree = InputTree::new().expect("tree");
        tree.write_input(6, "....\n....\n").expect("write");
        let results = run(Selection::DayPart(6, 1), tree.config());
        let err = results[0].outcome.as_ref().expect_err("no start");
        let rendered = format!("{err:#}");
        assert!(rendered.contains("day 6 part 1"));
        assert!(rendered.contains("start marker not found"));
    }
}
