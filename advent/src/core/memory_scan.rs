//! Corrupted memory scanning (day 3, "Mull It Over").
//!
//! The instruction pattern is compiled once into an [`InstructionScanner`]
//! that callers construct and pass in; nothing is cached process-wide.

use regex::Regex;

use crate::error::{Answer, PuzzleError};

const INSTRUCTION_PATTERN: &str = r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)";

/// An instruction recovered from corrupted memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `mul(X,Y)`; operands that do not fit `u64` are `None`.
    Mul(Option<u64>, Option<u64>),
    Do,
    Dont,
}

impl Instruction {
    /// Product of a `mul`, or 0 for anything else or on overflow.
    pub fn product(self) -> Answer {
        match self {
            Instruction::Mul(Some(x), Some(y)) => x.checked_mul(y).unwrap_or(0),
            _ => 0,
        }
    }
}

/// Immutable scanner holding the compiled instruction pattern.
#[derive(Debug, Clone)]
pub struct InstructionScanner {
    pattern: Regex,
}

impl InstructionScanner {
    pub fn new() -> Self {
        let pattern = Regex::new(INSTRUCTION_PATTERN).expect("valid instruction pattern");
        Self { pattern }
    }

    /// All well-formed instructions in input order.
    pub fn scan<'a>(&'a self, memory: &'a str) -> impl Iterator<Item = Instruction> + 'a {
        self.pattern.captures_iter(memory).map(|caps| {
            match (caps.get(1), caps.get(2)) {
                (Some(x), Some(y)) => {
                    Instruction::Mul(x.as_str().parse().ok(), y.as_str().parse().ok())
                }
                _ if caps[0].starts_with("don't") => Instruction::Dont,
                _ => Instruction::Do,
            }
        })
    }
}

impl Default for InstructionScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum of every `mul` product, ignoring `do()` / `don't()`.
pub fn sum_products(scanner: &InstructionScanner, memory: &str) -> Result<Answer, PuzzleError> {
    scanner
        .scan(memory)
        .try_fold(0, |total: Answer, instruction| {
            total.checked_add(instruction.product())
        })
        .ok_or(PuzzleError::Overflow("mul total"))
}

/// Sum of `mul` products while enabled. `don't()` disables, `do()` re-enables.
pub fn sum_enabled_products(
    scanner: &InstructionScanner,
    memory: &str,
) -> Result<Answer, PuzzleError> {
    let mut enabled = true;
    let mut total: Answer = 0;
    for instruction in scanner.scan(memory) {
        match instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(..) if enabled => {
                total = total
                    .checked_add(instruction.product())
                    .ok_or(PuzzleError::Overflow("mul total"))?;
            }
            Instruction::Mul(..) => {}
        }
    }
    Ok(total)
}
