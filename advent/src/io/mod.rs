//! I/O helpers for the solver CLI.

pub mod config;
pub mod input;
