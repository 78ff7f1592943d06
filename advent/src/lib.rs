//! Solvers for small text-based combinatorial puzzles.
//!
//! Each puzzle reads one flat input file, runs a self-contained algorithm and
//! yields a single integer. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic puzzle logic (grids, scanning, search).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Config and input-file loading.
//!
//! [`puzzles`] maps `(day, part)` to a solver; [`run`] times the selected
//! solvers and [`report`] renders the results table for the CLI.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod puzzles;
pub mod report;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
