//! Integration tests for grid generation through the facade crate.

use tui_wordsearch::core::{find_word, GenerateError, GridGenerator};
use tui_wordsearch::types::{GridPos, MIN_GRID_SIZE, PLACEMENT_ATTEMPTS};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_every_word_appears_as_straight_run() {
    let list = words(&["COMPILER", "BORROW", "TRAIT", "CRATE", "MACRO", "ENUM"]);

    for seed in [1, 7, 42, 1234, 99999] {
        let generated = GridGenerator::new(seed).generate(&list).unwrap();
        for word in &list {
            let hit = find_word(&generated.grid, word)
                .unwrap_or_else(|| panic!("{word} missing for seed {seed}"));
            assert_eq!(hit.cells.len(), word.len());
            assert_eq!(generated.grid.letters(&hit.cells), *word);
        }
    }
}

#[test]
fn test_grid_is_fully_populated_with_letters() {
    let generated = GridGenerator::new(8)
        .generate(&words(&["ONE", "TWO", "THREE"]))
        .unwrap();

    assert_eq!(
        generated.grid.cells().len(),
        generated.grid.rows() * generated.grid.cols()
    );
    for &ch in generated.grid.cells() {
        assert!(ch.is_ascii_uppercase(), "unexpected cell {ch:?}");
    }
}

#[test]
fn test_same_seed_reproduces_grid() {
    let list = words(&["APPLE", "GRAPE", "MELON", "PLUM"]);
    let a = GridGenerator::new(777).generate(&list).unwrap();
    let b = GridGenerator::new(777).generate(&list).unwrap();

    assert_eq!(a.grid, b.grid);
    assert_eq!(a.placements, b.placements);
}

#[test]
fn test_grid_size_follows_longest_word_with_floor() {
    let small = GridGenerator::new(1).generate(&words(&["HI", "NO"])).unwrap();
    assert_eq!(small.grid.rows(), MIN_GRID_SIZE);
    assert_eq!(small.grid.cols(), MIN_GRID_SIZE);

    let long = GridGenerator::new(1)
        .generate(&words(&["EXTRAORDINARY"]))
        .unwrap();
    assert_eq!(long.grid.rows(), "EXTRAORDINARY".len());
    assert_eq!(long.grid.cols(), "EXTRAORDINARY".len());
}

#[test]
fn test_placements_are_recorded_for_every_word() {
    let list = words(&["NORTH", "SOUTH", "EAST", "WEST"]);
    let generated = GridGenerator::new(5).generate(&list).unwrap();

    assert_eq!(generated.placements.len(), list.len());
    for (placement, word) in generated.placements.iter().zip(&list) {
        assert_eq!(&placement.word, word);
        assert!(generated.grid.in_bounds(placement.start));
        assert!(generated.grid.in_bounds(GridPos::new(
            placement.start.row + placement.direction.delta().0 * (word.len() as i16 - 1),
            placement.start.col + placement.direction.delta().1 * (word.len() as i16 - 1),
        )));
    }
}

#[test]
fn test_unplaceable_word_is_reported_not_dropped() {
    // Six all-same-letter words need six disjoint full-length runs; a 5x5
    // grid has at most five, so one of them must fail placement.
    let list = words(&["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE", "FFFFF"]);
    let err = GridGenerator::new(11).generate(&list).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Unplaceable {
            attempts: PLACEMENT_ATTEMPTS,
            ..
        }
    ));
}

#[test]
fn test_empty_and_invalid_inputs_are_typed_errors() {
    assert_eq!(
        GridGenerator::new(1).generate(&[]),
        Err(GenerateError::EmptyWordList)
    );
    assert!(matches!(
        GridGenerator::new(1).generate(&words(&["FINE", "BAD WORD"])),
        Err(GenerateError::InvalidWord { .. })
    ));
}
