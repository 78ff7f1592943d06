//! Calibration equations (day 7, "Bridge Repair").
//!
//! Each equation is a target and a list of operands combined strictly left to
//! right. Operators are chosen per gap from an explicit operator set; the
//! search stops at the first combination that reaches the target.

use rayon::prelude::*;
use tracing::debug;

use crate::core::workers;
use crate::error::{Answer, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
    /// Decimal digit concatenation: `12 || 345 = 12345`.
    Concatenate,
}

impl Operator {
    /// Apply to `lhs` and `rhs`; `None` on overflow.
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Concatenate => {
                let scale = 10u64.checked_pow(digits(rhs))?;
                lhs.checked_mul(scale)?.checked_add(rhs)
            }
        }
    }
}

pub const PART_ONE_OPERATORS: &[Operator] = &[Operator::Add, Operator::Multiply];
pub const PART_TWO_OPERATORS: &[Operator] =
    &[Operator::Add, Operator::Multiply, Operator::Concatenate];

/// Decimal digit count; `digits(0) == 1`.
fn digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub target: u64,
    pub operands: Vec<u64>,
}

impl Equation {
    /// Left-to-right value for one operator per gap.
    ///
    /// Returns `None` if `operators` does not have one entry per gap or any
    /// step overflows.
    pub fn evaluate(&self, operators: &[Operator]) -> Option<u64> {
        let (&first, rest) = self.operands.split_first()?;
        if operators.len() != rest.len() {
            return None;
        }
        rest.iter()
            .zip(operators)
            .try_fold(first, |acc, (&operand, op)| op.apply(acc, operand))
    }

    /// True if some assignment drawn from `operators` reaches the target.
    pub fn can_solve(&self, operators: &[Operator]) -> bool {
        match self.operands.split_first() {
            Some((&first, rest)) => reaches(self.target, first, rest, operators),
            None => false,
        }
    }
}

/// Depth-first search; overflowing branches are dead.
fn reaches(target: u64, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
    let Some((&next, tail)) = rest.split_first() else {
        return acc == target;
    };
    operators.iter().any(|op| {
        op.apply(acc, next)
            .is_some_and(|value| reaches(target, value, tail, operators))
    })
}

/// Parse lines of the form `target: a b c`.
pub fn parse(input: &str) -> Result<Vec<Equation>, PuzzleError> {
    let mut equations = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        let (target, operands) = line
            .split_once(':')
            .ok_or_else(|| PuzzleError::parse(line_no, format!("missing ':' in '{line}'")))?;
        let target = parse_number(line_no, target.trim())?;
        let operands = operands
            .split_whitespace()
            .map(|field| parse_number(line_no, field))
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(PuzzleError::parse(line_no, "equation has no operands"));
        }
        equations.push(Equation { target, operands });
    }
    Ok(equations)
}

fn parse_number(line_no: usize, field: &str) -> Result<u64, PuzzleError> {
    field
        .parse()
        .map_err(|_| PuzzleError::parse(line_no, format!("invalid number '{field}'")))
}

/// Sum of targets of solvable equations, evaluated on `workers` threads.
pub fn total_calibration(
    equations: &[Equation],
    operators: &[Operator],
    workers: usize,
) -> Result<Answer, PuzzleError> {
    let workers = workers.clamp(1, equations.len().max(1));
    debug!(equations = equations.len(), workers, "checking equations");
    workers::install(workers, || {
        equations
            .par_iter()
            .filter(|equation| equation.can_solve(operators))
            .map(|equation| Some(equation.target))
            .try_reduce(|| 0, |a, b| a.checked_add(b))
    })
    .ok_or(PuzzleError::Overflow("calibration total"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::examples;

    fn equation(target: u64, operands: &[u64]) -> Equation {
        Equation {
            target,
            operands: operands.to_vec(),
        }
    }

    #[test]
    fn evaluates_left_to_right() {
        use Operator::{Add, Concatenate, Multiply};
        assert_eq!(equation(0, &[10, 19]).evaluate(&[Multiply]), Some(190));
        assert_eq!(equation(0, &[81, 40, 27]).evaluate(&[Add, Multiply]), Some(3267));
        assert_eq!(equation(0, &[81, 40, 27]).evaluate(&[Multiply, Add]), Some(3267));
        assert_eq!(
            equation(0, &[11, 6, 16, 20]).evaluate(&[Add, Multiply, Add]),
            Some(292)
        );
        assert_eq!(equation(0, &[15, 6]).evaluate(&[Concatenate]), Some(156));
        assert_eq!(
            equation(0, &[6, 8, 6, 15]).evaluate(&[Multiply, Concatenate, Multiply]),
            Some(7290)
        );
    }

    #[test]
    fn evaluate_rejects_wrong_operator_count() {
        assert_eq!(equation(0, &[1, 2, 3]).evaluate(&[Operator::Add]), None);
    }

    #[test]
    fn concatenation_counts_digits() {
        assert_eq!(Operator::Concatenate.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concatenate.apply(7, 0), Some(70));
        assert_eq!(Operator::Concatenate.apply(1, 10), Some(110));
        assert_eq!(Operator::Concatenate.apply(u64::MAX, 1), None);
    }

    #[test]
    fn part_one_solvable_equations() {
        let equations = parse(examples::CALIBRATION).expect("parse");
        let solvable: Vec<u64> = equations
            .iter()
            .filter(|eq| eq.can_solve(PART_ONE_OPERATORS))
            .map(|eq| eq.target)
            .collect();
        assert_eq!(solvable, vec![190, 3267, 292]);
    }

    #[test]
    fn single_operand_must_equal_target() {
        assert!(equation(5, &[5]).can_solve(PART_ONE_OPERATORS));
        assert!(!equation(5, &[4]).can_solve(PART_TWO_OPERATORS));
    }

    #[test]
    fn totals_match_example() {
        let equations = parse(examples::CALIBRATION).expect("parse");
        assert_eq!(
            total_calibration(&equations, PART_ONE_OPERATORS, 4).expect("total"),
            3749
        );
        assert_eq!(
            total_calibration(&equations, PART_TWO_OPERATORS, 4).expect("total"),
            11387
        );
    }

    #[test]
    fn total_is_independent_of_worker_count() {
        let equations = parse(examples::CALIBRATION).expect("parse");
        let single = total_calibration(&equations, PART_TWO_OPERATORS, 1).expect("single");
        let pooled = total_calibration(&equations, PART_TWO_OPERATORS, 8).expect("pooled");
        assert_eq!(single, pooled);
    }

    #[test]
    fn total_overflow_is_an_error() {
        let equations = vec![equation(u64::MAX, &[u64::MAX]), equation(1, &[1])];
        let err = total_calibration(&equations, PART_ONE_OPERATORS, 2).expect_err("overflow");
        assert_eq!(err, PuzzleError::Overflow("calibration total"));
    }

    #[test]
    fn parse_rejects_missing_colon() {
        let err = parse("190 10 19\n").expect_err("no colon");
        assert!(matches!(err, PuzzleError::Parse { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_empty_operands() {
        let err = parse("190:\n").expect_err("no operands");
        assert_eq!(err, PuzzleError::parse(1, "equation has no operands"));
    }
}
