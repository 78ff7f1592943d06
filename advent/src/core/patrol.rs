//! Guard patrol simulation (day 6, "Guard Gallivant").
//!
//! A single walker advances a directional token across a [`Grid`]: blocked by
//! an obstacle it turns right in place, otherwise it steps forward, until it
//! leaves the grid. The walk is a deterministic function of the
//! [`WalkerState`], so revisiting a state proves the walk never exits.
//!
//! Two callers share the walker: the exhaustive walk collects visited
//! positions, and the loop-checked walk stops at the first repeated state.
//! The loop prober reruns the loop-checked walk with one extra obstacle on
//! every baseline-visited cell, on a fixed-size worker pool where each
//! worker owns a private grid snapshot.

use std::collections::HashSet;
use std::ops::ControlFlow;

use rayon::prelude::*;
use tracing::debug;

use crate::core::grid::Grid;
use crate::core::workers;
use crate::error::PuzzleError;

/// Cell glyph that blocks the walker.
pub const OBSTACLE: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step along `heading`.
    pub fn step(self, heading: Heading) -> Self {
        let (dr, dc) = heading.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// Cardinal heading, cyclically ordered clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Decode a start marker glyph (`^`, `>`, `v`, `<`).
    pub fn from_marker(glyph: u8) -> Option<Self> {
        match glyph {
            b'^' => Some(Self::Up),
            b'>' => Some(Self::Right),
            b'v' => Some(Self::Down),
            b'<' => Some(Self::Left),
            _ => None,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

/// Unit of loop detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalkerState {
    pub position: Position,
    pub heading: Heading,
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The next step left the grid.
    Exited,
    /// The visitor asked the walk to stop.
    Halted,
}

/// Locate the start marker (row-major, first match).
pub fn find_start(grid: &Grid) -> Result<WalkerState, PuzzleError> {
    if grid.is_empty() {
        return Err(PuzzleError::Configuration("empty grid".to_string()));
    }
    grid.cells()
        .find_map(|(row, col, glyph)| {
            Heading::from_marker(glyph).map(|heading| WalkerState {
                position: Position::new(row, col),
                heading,
            })
        })
        .ok_or_else(|| PuzzleError::Configuration("start marker not found".to_string()))
}

/// Advance from `start` until the walker exits or `visit` breaks.
///
/// `visit` sees every state the walker occupies, including turns in place,
/// before the step out of that state is taken.
pub fn walk<F>(grid: &Grid, start: WalkerState, mut visit: F) -> WalkOutcome
where
    F: FnMut(WalkerState) -> ControlFlow<()>,
{
    let mut state = start;
    loop {
        if visit(state).is_break() {
            return WalkOutcome::Halted;
        }
        let ahead = state.position.step(state.heading);
        match grid.get(ahead.row, ahead.col) {
            None => return WalkOutcome::Exited,
            Some(OBSTACLE) => state.heading = state.heading.turn_right(),
            Some(_) => state.position = ahead,
        }
    }
}

/// Exhaustive walk: distinct positions visited before exit.
///
/// A walk that cycles stops at its first repeated state, so the set is
/// always finite.
pub fn visited_positions(grid: &Grid, start: WalkerState) -> HashSet<Position> {
    let mut seen_states = HashSet::new();
    let mut visited = HashSet::new();
    walk(grid, start, |state| {
        if !seen_states.insert(state) {
            return ControlFlow::Break(());
        }
        visited.insert(state.position);
        ControlFlow::Continue(())
    });
    visited
}

/// Loop-checked walk: true if a state repeats before the walker exits.
pub fn is_loop(grid: &Grid, start: WalkerState) -> bool {
    let mut seen = HashSet::new();
    let outcome = walk(grid, start, |state| {
        if seen.insert(state) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    });
    outcome == WalkOutcome::Halted
}

/// Number of distinct cells the walker covers before leaving the grid.
pub fn count_visited(grid: &Grid) -> Result<usize, PuzzleError> {
    let start = find_start(grid)?;
    Ok(visited_positions(grid, start).len())
}

/// Cells worth blocking: baseline-visited positions other than the start
/// that are not already obstacles, in row-major order.
pub fn loop_candidates(grid: &Grid, start: WalkerState) -> Vec<Position> {
    let mut candidates: Vec<Position> = visited_positions(grid, start)
        .into_iter()
        .filter(|&pos| pos != start.position && grid.get(pos.row, pos.col) != Some(OBSTACLE))
        .collect();
    candidates.sort_unstable();
    candidates
}

/// Block `candidate`, run a loop-checked walk, then restore the cell.
///
/// Out-of-bounds candidates never cycle. The grid is left exactly as it was.
pub fn probe(grid: &mut Grid, start: WalkerState, candidate: Position) -> bool {
    let Some(original) = grid.replace(candidate.row, candidate.col, OBSTACLE) else {
        return false;
    };
    let cycles = is_loop(grid, start);
    grid.replace(candidate.row, candidate.col, original);
    cycles
}

/// Count single-obstacle placements that trap the walker, using the default
/// worker count.
pub fn count_loop_positions(grid: &Grid) -> Result<usize, PuzzleError> {
    count_loop_positions_with_workers(grid, workers::default_workers())
}

/// Count single-obstacle placements that trap the walker on a pool of
/// `workers` threads. The count does not depend on `workers`.
pub fn count_loop_positions_with_workers(
    grid: &Grid,
    workers: usize,
) -> Result<usize, PuzzleError> {
    let start = find_start(grid)?;
    let candidates = loop_candidates(grid, start);
    let workers = workers.clamp(1, candidates.len().max(1));
    debug!(candidates = candidates.len(), workers, "probing loop candidates");

    let loops = workers::install(workers, || {
        candidates
            .par_iter()
            .map_init(
                || grid.clone(),
                |snapshot, &candidate| probe(snapshot, start, candidate),
            )
            .filter(|&cycles| cycles)
            .count()
    });
    Ok(loops)
}
