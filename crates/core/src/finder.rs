//! Finder module - locates a word's run inside an existing grid.
//!
//! Used by the hint operation, by pre-baked puzzle validation, and by tests
//! checking placement validity. Scans every cell holding the word's first
//! letter and tries all eight directions; a word placed backwards is found
//! through the opposite direction.

use tui_wordsearch_types::{Direction, GridPos};

use crate::grid::Grid;

/// A located word run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHit {
    pub start: GridPos,
    pub direction: Direction,
    pub cells: Vec<GridPos>,
}

/// Find the first run spelling `word` (case-insensitive), scanning
/// row-major and trying directions in [`Direction::ALL`] order.
pub fn find_word(grid: &Grid, word: &str) -> Option<WordHit> {
    let letters: Vec<char> = word.chars().map(|ch| ch.to_ascii_uppercase()).collect();
    let (first, rest) = letters.split_first()?;

    for row in 0..grid.rows() as i16 {
        for col in 0..grid.cols() as i16 {
            let start = GridPos::new(row, col);
            if grid.get(start) != Some(*first) {
                continue;
            }
            for dir in Direction::ALL {
                if let Some(cells) = try_direction(grid, start, dir, rest) {
                    return Some(WordHit {
                        start,
                        direction: dir,
                        cells,
                    });
                }
            }
        }
    }

    None
}

/// Match the remainder of a word along one direction from `start`.
fn try_direction(
    grid: &Grid,
    start: GridPos,
    dir: Direction,
    rest: &[char],
) -> Option<Vec<GridPos>> {
    let mut cells = Vec::with_capacity(rest.len() + 1);
    cells.push(start);

    let mut pos = start;
    for &ch in rest {
        pos = pos.step(dir);
        if grid.get(pos) != Some(ch) {
            return None;
        }
        cells.push(pos);
    }

    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(&[
            "CATXX", //
            "XOXXX", //
            "XXWXX", //
            "XXXXX", //
            "GODXX",
        ])
        .unwrap()
    }

    #[test]
    fn test_finds_horizontal_word() {
        let hit = find_word(&grid(), "CAT").unwrap();
        assert_eq!(hit.start, GridPos::new(0, 0));
        assert_eq!(hit.direction, Direction::Right);
        assert_eq!(
            hit.cells,
            vec![GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(0, 2)]
        );
    }

    #[test]
    fn test_finds_diagonal_word() {
        let hit = find_word(&grid(), "COW").unwrap();
        assert_eq!(hit.direction, Direction::DownRight);
    }

    #[test]
    fn test_finds_reversed_word_via_opposite_direction() {
        // "GOD" reads left-to-right on the bottom row, so "DOG" is found
        // starting from the D going left.
        let hit = find_word(&grid(), "DOG").unwrap();
        assert_eq!(hit.start, GridPos::new(4, 2));
        assert_eq!(hit.direction, Direction::Left);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(find_word(&grid(), "cat").is_some());
    }

    #[test]
    fn test_absent_word_is_none() {
        assert!(find_word(&grid(), "HORSE").is_none());
    }

    #[test]
    fn test_empty_word_is_none() {
        assert!(find_word(&grid(), "").is_none());
    }

    #[test]
    fn test_single_letter_word() {
        let hit = find_word(&grid(), "W").unwrap();
        assert_eq!(hit.start, GridPos::new(2, 2));
        assert_eq!(hit.cells.len(), 1);
    }
}
