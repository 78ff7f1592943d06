//! Domain error shared by every puzzle solver.

use thiserror::Error;

/// Failure raised while parsing or solving a puzzle input.
///
/// Grid edges, obstacles and unsolvable equations are ordinary outcomes, not
/// errors. Errors mean the input itself is unusable; callers surface them
/// immediately and never produce a partial answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The input is structurally unusable (empty grid, missing start marker,
    /// ragged rows).
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A line could not be parsed. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    /// An accumulated answer no longer fits in `u64`.
    #[error("{0} overflowed")]
    Overflow(&'static str),
}

impl PuzzleError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Answer type produced by every solver.
pub type Answer = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_line() {
        let err = PuzzleError::parse(3, "invalid level 'x'");
        assert_eq!(err.to_string(), "line 3: invalid level 'x'");
    }

    #[test]
    fn configuration_error_is_prefixed() {
        let err = PuzzleError::Configuration("empty grid".to_string());
        assert_eq!(err.to_string(), "configuration error: empty grid");
    }
}
