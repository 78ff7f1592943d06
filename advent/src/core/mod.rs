//! Deterministic, pure puzzle logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! inputs and return deterministic answers suitable for tests.

pub mod calibration;
pub mod grid;
pub mod location_lists;
pub mod memory_scan;
pub mod patrol;
pub mod print_queue;
pub mod reports;
pub mod word_search;
pub mod workers;
