//! Reactor level reports (day 2, "Red-Nosed Reports").

use crate::error::PuzzleError;

/// Largest allowed step between adjacent levels.
const MAX_STEP: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub levels: Vec<i64>,
}

impl Report {
    pub fn new(levels: Vec<i64>) -> Self {
        Self { levels }
    }

    /// Strictly monotonic with every step in `1..=3`.
    pub fn is_safe(&self) -> bool {
        levels_safe(&self.levels)
    }

    /// Safe as-is, or after removing exactly one level.
    pub fn is_safe_with_dampener(&self) -> bool {
        if self.is_safe() {
            return true;
        }
        let mut dampened = Vec::with_capacity(self.levels.len().saturating_sub(1));
        (0..self.levels.len()).any(|skip| {
            dampened.clear();
            dampened.extend(
                self.levels
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != skip)
                    .map(|(_, level)| *level),
            );
            levels_safe(&dampened)
        })
    }
}

fn levels_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return true;
    }
    let increasing = levels[1] > levels[0];
    levels.windows(2).all(|pair| {
        let step = pair[1].abs_diff(pair[0]);
        (pair[1] > pair[0]) == increasing && (1..=MAX_STEP).contains(&step)
    })
}

pub fn parse(input: &str) -> Result<Vec<Report>, PuzzleError> {
    let mut reports = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let levels = line
            .split_whitespace()
            .map(|field| {
                field.parse::<i64>().map_err(|_| {
                    PuzzleError::parse(index + 1, format!("invalid level '{field}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        reports.push(Report::new(levels));
    }
    Ok(reports)
}

pub fn count_safe(reports: &[Report]) -> usize {
    reports.iter().filter(|report| report.is_safe()).count()
}

pub fn count_safe_with_dampener(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|report| report.is_safe_with_dampener())
        .count()
}
