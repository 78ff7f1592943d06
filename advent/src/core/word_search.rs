//! Word search over a letter grid (day 4, "Ceres Search").

use crate::core::grid::Grid;

/// All eight compass directions as `(row, col)` deltas.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

/// True if `word` is spelled from `(row, col)` stepping by `(dr, dc)`.
fn spells(grid: &Grid, word: &[u8], (row, col): (isize, isize), (dr, dc): (isize, isize)) -> bool {
    word.iter().enumerate().all(|(i, &letter)| {
        let i = i as isize;
        grid.get(row + i * dr, col + i * dc) == Some(letter)
    })
}

/// Occurrences of `word` in any direction; overlapping matches count.
pub fn count_word(grid: &Grid, word: &str) -> usize {
    let word = word.as_bytes();
    let Some(&first) = word.first() else {
        return 0;
    };
    grid.cells()
        .filter(|&(_, _, letter)| letter == first)
        .map(|(row, col, _)| {
            DIRECTIONS
                .iter()
                .filter(|&&dir| spells(grid, word, (row, col), dir))
                .count()
        })
        .sum()
}

/// Cells where two diagonal `MAS` (either way round) cross on the `A`.
pub fn count_crossed_mas(grid: &Grid) -> usize {
    grid.cells()
        .filter(|&(row, col, letter)| letter == b'A' && is_crossed_mas(grid, row, col))
        .count()
}

fn is_crossed_mas(grid: &Grid, row: isize, col: isize) -> bool {
    let diagonal = |start: (isize, isize), dir: (isize, isize)| {
        spells(grid, b"MAS", start, dir) || spells(grid, b"SAM", start, dir)
    };
    diagonal((row - 1, col - 1), (1, 1)) && diagonal((row - 1, col + 1), (1, -1))
}
