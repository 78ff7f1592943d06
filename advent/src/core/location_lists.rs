//! Paired location-id lists (day 1, "Historian Hysteria").

use std::collections::HashMap;

use crate::error::{Answer, PuzzleError};

/// The two columns of location ids, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<u64>,
    pub right: Vec<u64>,
}

/// Parse lines of exactly two whitespace-separated ids. Blank lines are skipped.
pub fn parse(input: &str) -> Result<LocationLists, PuzzleError> {
    let mut lists = LocationLists::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [left, right] = fields.as_slice() else {
            return Err(PuzzleError::parse(
                index + 1,
                format!("expected two ids, got '{line}'"),
            ));
        };
        lists.left.push(parse_id(index + 1, left)?);
        lists.right.push(parse_id(index + 1, right)?);
    }
    Ok(lists)
}

fn parse_id(line: usize, field: &str) -> Result<u64, PuzzleError> {
    field
        .parse()
        .map_err(|_| PuzzleError::parse(line, format!("invalid location id '{field}'")))
}

/// Sum of distances between the lists paired smallest-to-smallest.
pub fn total_distance(lists: &LocationLists) -> Result<Answer, PuzzleError> {
    let mut left = lists.left.clone();
    let mut right = lists.right.clone();
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(&right)
        .try_fold(0, |total: Answer, (l, r)| total.checked_add(l.abs_diff(*r)))
        .ok_or(PuzzleError::Overflow("location distance"))
}

/// Sum of each left id weighted by how often it appears on the right.
pub fn similarity_score(lists: &LocationLists) -> Result<Answer, PuzzleError> {
    let mut frequency: HashMap<u64, u64> = HashMap::new();
    for &id in &lists.right {
        *frequency.entry(id).or_default() += 1;
    }
    lists
        .left
        .iter()
        .try_fold(0, |total: Answer, id| {
            let weighted = id.checked_mul(frequency.get(id).copied().unwrap_or(0))?;
            total.checked_add(weighted)
        })
        .ok_or(PuzzleError::Overflow("similarity score"))
}
