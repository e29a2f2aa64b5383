//! Prints generated grids for the bundled puzzle catalog.
//!
//! Dev utility: exercises the generator and finder end-to-end without a
//! terminal UI. Word-list parts are generated with a fixed seed so the
//! output is stable run to run.

use anyhow::{Context, Result};

use tui_wordsearch::core::{find_word, Grid, GridGenerator};
use tui_wordsearch::puzzle::{PuzzleCatalog, PuzzleKind};

const PUZZLES_JSON: &str = include_str!("../../assets/puzzles.json");

const PREVIEW_SEED: u32 = 12345;

fn main() -> Result<()> {
    let catalog =
        PuzzleCatalog::from_json_str(PUZZLES_JSON).context("bundled puzzle catalog is invalid")?;

    for puzzle in catalog.puzzles() {
        match &puzzle.kind {
            PuzzleKind::Prebaked { grid, words } => {
                println!("== {} (pre-baked) ==", puzzle.id);
                print_grid(grid, words);
            }
            PuzzleKind::Parts(parts) => {
                for part in parts {
                    println!("== {} part {} ==", puzzle.id, part.part_id);
                    let seed = PREVIEW_SEED.wrapping_add(part.part_id);
                    match GridGenerator::new(seed).generate(&part.words) {
                        Ok(generated) => print_grid(&generated.grid, &part.words),
                        Err(err) => println!("  generation failed: {err}"),
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn print_grid(grid: &Grid, words: &[String]) {
    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.cols() * 2);
        for col in 0..grid.cols() {
            line.push(grid.cells()[row * grid.cols() + col]);
            line.push(' ');
        }
        println!("  {}", line.trim_end());
    }
    for word in words {
        match find_word(grid, word) {
            Some(hit) => println!(
                "  {word}: ({}, {}) {:?}",
                hit.start.row, hit.start.col, hit.direction
            ),
            None => println!("  {word}: NOT FOUND"),
        }
    }
}
