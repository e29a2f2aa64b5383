//! Terminal word-search runner (default binary).
//!
//! Wires the bundled puzzle catalog, the progress store, the selection
//! engine, and the terminal renderer into one event loop: render, poll for
//! mouse/key input, feed the engine, persist progress on completion.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_wordsearch::core::{
    GeneratedGrid, GridGenerator, PuzzleSnapshot, SelectionEngine, SelectionEvent,
};
use tui_wordsearch::input::{handle_key_event, should_quit, PointerPhase, PointerTracker};
use tui_wordsearch::progress::ProgressStore;
use tui_wordsearch::puzzle::{Puzzle, PuzzleCatalog, PuzzleKind};
use tui_wordsearch::term::{FrameBuffer, HudView, PuzzleView, TerminalRenderer, Viewport};
use tui_wordsearch::types::PuzzleAction;

const PUZZLES_JSON: &str = include_str!("../assets/puzzles.json");

/// Override the progress file location.
const PROGRESS_PATH_ENV: &str = "WORDSEARCH_PROGRESS_PATH";

/// Fresh-seed retries when a random grid fails to place a word.
const GENERATE_RETRIES: u32 = 3;

fn main() -> Result<()> {
    let catalog =
        PuzzleCatalog::from_json_str(PUZZLES_JSON).context("bundled puzzle catalog is invalid")?;
    let store = open_store()?;
    let mut game = Game::new(catalog, store)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = PuzzleView::default();
    let mut tracker = PointerTracker::new();
    let mut snap = PuzzleSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        game.engine.snapshot_into(&mut snap);
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hud = game.hud();
        view.render_into(&snap, Some(&hud), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input.
        if !event::poll(Duration::from_millis(33))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action)?;
                }
            }
            Event::Mouse(mouse) => {
                let Some(pointer) = tracker.handle_mouse(mouse) else {
                    continue;
                };
                let layout = view.layout(&snap, viewport);
                let p = layout.to_grid_space(pointer.col, pointer.row);
                match pointer.phase {
                    PointerPhase::Down => game.engine.on_drag_start(p, PuzzleView::CELL_PX),
                    PointerPhase::Move => game.engine.on_drag(p),
                    PointerPhase::Up => {
                        game.engine.on_drag(p);
                        for ev in game.engine.on_drag_end() {
                            if matches!(ev, SelectionEvent::PuzzleCompleted) {
                                game.record_completion()?;
                            }
                        }
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            Event::FocusLost => {
                // A drag cannot survive losing the terminal.
                tracker.cancel();
                game.engine.cancel_drag();
            }
            _ => {}
        }
    }
}

fn open_store() -> Result<ProgressStore> {
    let path = match env::var_os(PROGRESS_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".tui-wordsearch").join("progress.json"),
            None => return Ok(ProgressStore::in_memory()),
        },
    };
    ProgressStore::open(path).context("failed to open progress store")
}

/// Everything the runner tracks across puzzles.
struct Game {
    catalog: PuzzleCatalog,
    store: ProgressStore,
    puzzle_idx: usize,
    part_idx: u32,
    engine: SelectionEngine,
    all_done: bool,
}

impl Game {
    /// Resume at the first puzzle with incomplete progress.
    fn new(catalog: PuzzleCatalog, store: ProgressStore) -> Result<Self> {
        let (puzzle_idx, part_idx, all_done) = match first_incomplete(&catalog, &store) {
            Some((puzzle_idx, part_idx)) => (puzzle_idx, part_idx, false),
            None => (catalog.len() - 1, 0, true),
        };
        let engine = build_engine(&catalog.puzzles()[puzzle_idx], part_idx)?;

        Ok(Self {
            catalog,
            store,
            puzzle_idx,
            part_idx,
            engine,
            all_done,
        })
    }

    fn current(&self) -> &Puzzle {
        &self.catalog.puzzles()[self.puzzle_idx]
    }

    fn load_current(&mut self) -> Result<()> {
        self.engine = build_engine(self.current(), self.part_idx)?;
        Ok(())
    }

    fn hud(&self) -> HudView<'_> {
        HudView {
            puzzle_id: &self.current().id,
            part: self.part_idx + 1,
            total_parts: self.current().total_parts(),
            all_done: self.all_done,
        }
    }

    fn apply_action(&mut self, action: PuzzleAction) -> Result<()> {
        match action {
            PuzzleAction::Hint => {
                self.engine.hint();
            }
            PuzzleAction::Reset => {
                self.engine.reset();
            }
            PuzzleAction::NextPuzzle => {
                if self.engine.is_completed() && !self.all_done {
                    self.advance()?;
                }
            }
        }
        Ok(())
    }

    /// Persist the just-finished part.
    fn record_completion(&mut self) -> Result<()> {
        let id = self.current().id.clone();
        let total = self.current().total_parts();
        self.store.set(&id, self.part_idx + 1, total)?;
        Ok(())
    }

    /// Move to the next part, or the next incomplete puzzle.
    fn advance(&mut self) -> Result<()> {
        if self.part_idx + 1 < self.current().total_parts() {
            self.part_idx += 1;
        } else {
            match first_incomplete(&self.catalog, &self.store) {
                Some((puzzle_idx, part_idx)) => {
                    self.puzzle_idx = puzzle_idx;
                    self.part_idx = part_idx;
                }
                None => {
                    self.all_done = true;
                    return Ok(());
                }
            }
        }
        self.load_current()
    }
}

/// Completed part count for a puzzle: stored progress wins, the asset's
/// own `isCompleted` flags are the fallback.
fn completed_parts(store: &ProgressStore, puzzle: &Puzzle) -> u32 {
    if let Some(progress) = store.get(&puzzle.id) {
        return progress.completed_parts.min(puzzle.total_parts());
    }
    match &puzzle.kind {
        PuzzleKind::Prebaked { .. } => 0,
        PuzzleKind::Parts(parts) => parts.iter().take_while(|p| p.is_completed).count() as u32,
    }
}

fn first_incomplete(catalog: &PuzzleCatalog, store: &ProgressStore) -> Option<(usize, u32)> {
    for (idx, puzzle) in catalog.puzzles().iter().enumerate() {
        let done = completed_parts(store, puzzle);
        if done < puzzle.total_parts() {
            return Some((idx, done));
        }
    }
    None
}

fn build_engine(puzzle: &Puzzle, part_idx: u32) -> Result<SelectionEngine> {
    match &puzzle.kind {
        PuzzleKind::Prebaked { grid, words } => Ok(SelectionEngine::new(grid.clone(), words)),
        PuzzleKind::Parts(parts) => {
            let part = &parts[part_idx as usize];
            let generated = generate_with_retries(&part.words)?;
            Ok(SelectionEngine::new(generated.grid, &part.words))
        }
    }
}

/// Generate a grid for a word list, retrying with fresh seeds before
/// giving up on a pathological catalog entry.
fn generate_with_retries(words: &[String]) -> Result<GeneratedGrid> {
    let base = time_seed();
    let mut last_err = None;
    for offset in 0..GENERATE_RETRIES {
        match GridGenerator::new(base.wrapping_add(offset)).generate(words) {
            Ok(generated) => return Ok(generated),
            Err(err) => last_err = Some(err),
        }
    }
    match last_err {
        Some(err) => Err(err).context("could not build puzzle grid"),
        None => bail!("could not build puzzle grid"),
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
