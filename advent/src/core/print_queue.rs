//! Page ordering rules and safety-manual updates (day 5, "Print Queue").

use std::collections::{HashMap, HashSet};

use crate::error::{Answer, PuzzleError};

pub type Page = u32;
pub type Update = Vec<Page>;

/// Immutable lookup of `before|after` ordering rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pairs: HashSet<(Page, Page)>,
}

impl RuleSet {
    pub fn new(rules: impl IntoIterator<Item = (Page, Page)>) -> Self {
        Self {
            pairs: rules.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// No rule with both pages present is violated.
    pub fn is_ordered(&self, update: &[Page]) -> bool {
        let position: HashMap<Page, usize> = update
            .iter()
            .enumerate()
            .map(|(index, &page)| (page, index))
            .collect();
        self.pairs.iter().all(|(before, after)| {
            match (position.get(before), position.get(after)) {
                (Some(b), Some(a)) => b < a,
                _ => true,
            }
        })
    }

    /// Copy of `update` reordered to satisfy the rules.
    ///
    /// Repeatedly takes the earliest remaining page that no remaining page must
    /// precede, so unconstrained pages keep their input order. A rule cycle
    /// cannot be satisfied; its pages are emitted in input order.
    pub fn reorder(&self, update: &[Page]) -> Update {
        let mut remaining = update.to_vec();
        let mut fixed = Vec::with_capacity(update.len());
        while !remaining.is_empty() {
            let next = remaining
                .iter()
                .position(|&page| {
                    !remaining
                        .iter()
                        .any(|&other| self.pairs.contains(&(other, page)))
                })
                .unwrap_or(0);
            fixed.push(remaining.remove(next));
        }
        fixed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintQueue {
    pub rules: RuleSet,
    pub updates: Vec<Update>,
}

/// Parse the rule section, a blank line, then the update section.
pub fn parse(input: &str) -> Result<PrintQueue, PuzzleError> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let mut rules = Vec::new();
    let mut separated = false;
    for (line_no, line) in lines.by_ref() {
        if line.is_empty() {
            if rules.is_empty() {
                continue;
            }
            separated = true;
            break;
        }
        rules.push(parse_rule(line_no, line)?);
    }
    if !separated {
        return Err(PuzzleError::parse(
            input.lines().count().max(1),
            "expected a blank line between rules and updates",
        ));
    }

    let mut updates = Vec::new();
    for (line_no, line) in lines {
        if line.is_empty() {
            continue;
        }
        updates.push(parse_update(line_no, line)?);
    }

    Ok(PrintQueue {
        rules: RuleSet::new(rules),
        updates,
    })
}

pub fn parse_rule(line_no: usize, line: &str) -> Result<(Page, Page), PuzzleError> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| PuzzleError::parse(line_no, format!("invalid rule '{line}'")))?;
    Ok((parse_page(line_no, before)?, parse_page(line_no, after)?))
}

pub fn parse_update(line_no: usize, line: &str) -> Result<Update, PuzzleError> {
    line.split(',').map(|page| parse_page(line_no, page)).collect()
}

fn parse_page(line_no: usize, field: &str) -> Result<Page, PuzzleError> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| PuzzleError::parse(line_no, format!("invalid page number '{field}'")))
}

/// Page at index `len / 2`; 0 for an empty update.
pub fn middle_page(update: &[Page]) -> Page {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

/// Sum of middle pages over correctly ordered updates.
pub fn sum_ordered_middles(queue: &PrintQueue) -> Answer {
    queue
        .updates
        .iter()
        .filter(|update| queue.rules.is_ordered(update))
        .map(|update| Answer::from(middle_page(update)))
        .sum()
}

/// Sum of middle pages over mis-ordered updates after reordering them.
pub fn sum_reordered_middles(queue: &PrintQueue) -> Answer {
    queue
        .updates
        .iter()
        .filter(|update| !queue.rules.is_ordered(update))
        .map(|update| Answer::from(middle_page(&queue.rules.reorder(update))))
        .sum()
}
