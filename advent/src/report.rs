//! Results table rendering.

use std::fmt;
use std::time::Duration;

use crate::puzzles::Puzzle;
use crate::run::PuzzleResult;

const DAY_WIDTH: usize = 3;
const PART_WIDTH: usize = 4;
const MIN_RESULT_WIDTH: usize = 10;
const MIN_TIME_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 6;

/// Render results as a boxed table followed by a summary line.
///
/// With `show_errors`, each failed row is followed by its error chain.
pub fn render_table(results: &[PuzzleResult], total: Duration, show_errors: bool) -> String {
    if results.is_empty() {
        return "No puzzles to solve\n".to_string();
    }
    ResultsTable {
        results,
        total,
        show_errors,
    }
    .to_string()
}

/// One line per implemented puzzle: day and title.
pub fn render_catalog(puzzles: &[Puzzle]) -> String {
    Catalog(puzzles).to_string()
}

struct ResultsTable<'a> {
    results: &'a [PuzzleResult],
    total: Duration,
    show_errors: bool,
}

impl fmt::Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result_width = MIN_RESULT_WIDTH;
        let mut time_width = MIN_TIME_WIDTH;
        for row in self.results {
            if let Ok(answer) = &row.outcome {
                result_width = result_width.max(answer.to_string().len() + 2);
            }
            time_width = time_width.max(format!("{:?}", row.duration).len() + 2);
        }

        let rule =
            "─".repeat(DAY_WIDTH + PART_WIDTH + result_width + time_width + STATUS_WIDTH + 16);
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "│ {:<DAY_WIDTH$} │ {:<PART_WIDTH$} │ {:<result_width$} │ {:<time_width$} │ {:<STATUS_WIDTH$} │",
            "Day", "Part", "Result", "Time", "Status"
        )?;
        writeln!(f, "{rule}")?;

        for row in self.results {
            let time = format!("{:?}", row.duration);
            match &row.outcome {
                Ok(answer) => writeln!(
                    f,
                    "│ {:>DAY_WIDTH$} │ {:>PART_WIDTH$} │ {:>result_width$} │ {:<time_width$} │ {:<STATUS_WIDTH$} │",
                    row.day, row.part, answer, time, "✓"
                )?,
                Err(err) => {
                    writeln!(
                        f,
                        "│ {:>DAY_WIDTH$} │ {:>PART_WIDTH$} │ {:<result_width$} │ {:<time_width$} │ {:<STATUS_WIDTH$} │",
                        row.day, row.part, "ERROR", time, "✗"
                    )?;
                    if self.show_errors {
                        writeln!(f, "  Error: {err:#}")?;
                    }
                }
            }
        }

        writeln!(f, "{rule}")?;
        let solved = self.results.iter().filter(|row| row.is_solved()).count();
        writeln!(
            f,
            "Summary: {solved}/{} puzzles solved in {:?}",
            self.results.len(),
            self.total
        )
    }
}

struct Catalog<'a>(&'a [Puzzle]);

impl fmt::Display for Catalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for puzzle in self.0 {
            writeln!(f, "day {:02}  {}", puzzle.day, puzzle.title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::PUZZLES;
    use anyhow::anyhow;

    fn row(day: u8, part: u8, outcome: anyhow::Result<u64>) -> PuzzleResult {
        PuzzleResult {
            day,
            part,
            outcome,
            duration: Duration::from_micros(1500),
        }
    }

    #[test]
    fn empty_results_say_so() {
        assert_eq!(
            render_table(&[], Duration::ZERO, false),
            "No puzzles to solve\n"
        );
    }

    #[test]
    fn table_lists_rows_and_summary() {
        let results = vec![
            row(6, 1, Ok(41)),
            row(6, 2, Err(anyhow!("configuration error: empty grid"))),
        ];
        let table = render_table(&results, Duration::from_millis(3), false);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[1].contains("Day") && lines[1].contains("Status"));
        assert!(lines[3].contains("41") && lines[3].contains('✓'));
        assert!(lines[4].contains("ERROR") && lines[4].contains('✗'));
        assert!(!table.contains("Error:"));
        assert_eq!(
            lines.last().copied(),
            Some("Summary: 1/2 puzzles solved in 3ms")
        );
    }

    #[test]
    fn errors_are_shown_when_requested() {
        let results = vec![row(1, 1, Err(anyhow!("input file does not exist: x")))];
        let table = render_table(&results, Duration::ZERO, true);
        assert!(table.contains("  Error: input file does not exist: x"));
    }

    #[test]
    fn wide_answers_grow_the_result_column() {
        let results = vec![row(7, 2, Ok(123_456_789_012_345))];
        let table = render_table(&results, Duration::ZERO, false);
        let widths: Vec<usize> = table.lines().take(4).map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "{table}");
        assert!(table.contains("123456789012345"));
    }

    #[test]
    fn catalog_lists_titles() {
        let catalog = render_catalog(PUZZLES);
        assert!(catalog.starts_with("day 01  Historian Hysteria\n"));
        assert_eq!(catalog.lines().count(), PUZZLES.len());
    }
}
