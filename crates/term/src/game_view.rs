//! PuzzleView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layout and styling are unit-testable. The view also
//! owns the screen-to-grid coordinate mapping: mouse positions in terminal
//! cells are converted into the grid-local unit the selection engine
//! expects (one grid cell is [`PuzzleView::CELL_PX`] units on both axes,
//! regardless of the glyph aspect ratio used on screen).

use std::collections::HashMap;

use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, PointerOffset, SelectionColor};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the grid landed on screen, for pointer mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left terminal cell of the first grid cell (inside the border).
    pub origin_x: u16,
    pub origin_y: u16,
    /// Terminal columns per grid cell.
    pub cell_w: u16,
    /// Terminal rows per grid cell.
    pub cell_h: u16,
}

impl GridLayout {
    /// Map a terminal mouse position into grid-local units.
    ///
    /// The +0.5 centers the position within its glyph so a click lands in
    /// the middle of the cell it visually hits. Results may be negative or
    /// past the grid; the engine clamps.
    pub fn to_grid_space(&self, col: u16, row: u16) -> PointerOffset {
        let x = (col as f32 - self.origin_x as f32 + 0.5) / self.cell_w as f32;
        let y = (row as f32 - self.origin_y as f32 + 0.5) / self.cell_h as f32;
        PointerOffset::new(x * PuzzleView::CELL_PX, y * PuzzleView::CELL_PX)
    }
}

/// Extra HUD state supplied by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub puzzle_id: &'a str,
    /// 1-based part number.
    pub part: u32,
    pub total_parts: u32,
    /// The whole catalog is finished; overrides the per-part overlay.
    pub all_done: bool,
}

/// Renders the puzzle grid, the word list panel, and overlays.
pub struct PuzzleView {
    cell_w: u16,
    cell_h: u16,
}

/// Width reserved for the word-list panel right of the grid.
const PANEL_W: u16 = 24;

impl Default for PuzzleView {
    fn default() -> Self {
        // 4x2 glyphs per cell roughly squares the grid on typical
        // terminal fonts, which keeps diagonal drags feeling diagonal.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl PuzzleView {
    /// Side length of one grid cell in the engine's pointer unit.
    pub const CELL_PX: f32 = 16.0;

    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Compute where the grid lands for the given snapshot and viewport.
    pub fn layout(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> GridLayout {
        let grid_w = snap.cols as u16 * self.cell_w;
        let grid_h = snap.rows as u16 * self.cell_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let region_w = viewport.width.saturating_sub(PANEL_W);
        let origin_x = region_w.saturating_sub(frame_w) / 2 + 1;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2 + 1;

        GridLayout {
            origin_x,
            origin_y,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render one frame into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &PuzzleSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(snap, viewport);
        self.draw_border(snap, layout, fb);
        self.draw_grid(snap, layout, fb);
        self.draw_panel(snap, hud, viewport, fb);

        if hud.map(|h| h.all_done).unwrap_or(false) {
            self.draw_overlay(snap, layout, fb, "ALL PUZZLES SOLVED - q quits");
        } else if snap.completed {
            self.draw_overlay(snap, layout, fb, "PUZZLE COMPLETE - n for next");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &PuzzleSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, snap: &PuzzleSnapshot, layout: GridLayout, fb: &mut FrameBuffer) {
        let style = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));
        let w = snap.cols as u16 * layout.cell_w;
        let h = snap.rows as u16 * layout.cell_h;
        let x0 = layout.origin_x - 1;
        let y0 = layout.origin_y - 1;
        let x1 = layout.origin_x + w;
        let y1 = layout.origin_y + h;

        for x in x0..=x1 {
            fb.put_char(x, y0, '─', style);
            fb.put_char(x, y1, '─', style);
        }
        for y in y0..=y1 {
            fb.put_char(x0, y, '│', style);
            fb.put_char(x1, y, '│', style);
        }
        fb.put_char(x0, y0, '┌', style);
        fb.put_char(x1, y0, '┐', style);
        fb.put_char(x0, y1, '└', style);
        fb.put_char(x1, y1, '┘', style);
    }

    fn draw_grid(&self, snap: &PuzzleSnapshot, layout: GridLayout, fb: &mut FrameBuffer) {
        // Cell tints, later layers win: found words first, then hints,
        // then the live selection.
        let mut found_at: HashMap<GridPos, SelectionColor> = HashMap::new();
        for fw in &snap.found_words {
            for &cell in &fw.cells {
                found_at.insert(cell, fw.color);
            }
        }

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let pos = GridPos::new(row as i16, col as i16);
                let letter = snap.letter(row, col).unwrap_or(' ');

                let mut style = CellStyle::new(Rgb::new(210, 210, 215), Rgb::new(18, 18, 24));
                if let Some(color) = found_at.get(&pos) {
                    style = CellStyle::new(Rgb::new(16, 16, 16), dim_rgb(color_rgb(*color)));
                }
                if snap.hint_cells.contains(&pos) {
                    style = style.underline().bold();
                }
                if snap.selected.contains(&pos) {
                    style = CellStyle::new(Rgb::new(16, 16, 16), color_rgb(snap.selection_color))
                        .bold();
                }

                self.fill_cell(fb, layout, row as u16, col as u16, style);
                let cx = layout.origin_x + col as u16 * layout.cell_w + (layout.cell_w - 1) / 2;
                let cy = layout.origin_y + row as u16 * layout.cell_h + (layout.cell_h - 1) / 2;
                fb.put_char(cx, cy, letter, style);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: GridLayout,
        row: u16,
        col: u16,
        style: CellStyle,
    ) {
        fb.fill_rect(
            layout.origin_x + col * layout.cell_w,
            layout.origin_y + row * layout.cell_h,
            layout.cell_w,
            layout.cell_h,
            ' ',
            style,
        );
    }

    fn draw_panel(
        &self,
        snap: &PuzzleSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let x = viewport.width.saturating_sub(PANEL_W) + 1;
        let title = CellStyle::default().bold();
        let dim = CellStyle::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));

        let mut y = 1;
        fb.put_str(x, y, "WORD SEARCH", title);
        y += 1;

        if let Some(hud) = hud {
            fb.put_str(x, y, hud.puzzle_id, dim);
            y += 1;
            if hud.total_parts > 1 {
                let label = format!("part {}/{}", hud.part, hud.total_parts);
                fb.put_str(x, y, &label, dim);
                y += 1;
            }
        }
        y += 1;

        let count = format!("{}/{} found", snap.found_count(), snap.words.len());
        fb.put_str(x, y, &count, CellStyle::default());
        y += 2;

        for word in &snap.words {
            if y >= viewport.height.saturating_sub(2) {
                break;
            }
            if word.found {
                let color = snap
                    .found_words
                    .iter()
                    .find(|fw| fw.text == word.text)
                    .map(|fw| color_rgb(fw.color))
                    .unwrap_or(Rgb::new(130, 130, 140));
                fb.put_str(x, y, "* ", CellStyle::new(color, Rgb::new(0, 0, 0)));
                fb.put_str(x + 2, y, &word.text, CellStyle::new(color, Rgb::new(0, 0, 0)));
            } else {
                fb.put_str(x, y, "  ", dim);
                fb.put_str(x + 2, y, &word.text, CellStyle::default());
            }
            y += 1;
        }

        let help = "drag:select h:hint r:reset n:next q:quit";
        fb.put_str(
            1,
            viewport.height.saturating_sub(1),
            help,
            dim,
        );
    }

    fn draw_overlay(
        &self,
        snap: &PuzzleSnapshot,
        layout: GridLayout,
        fb: &mut FrameBuffer,
        text: &str,
    ) {
        let grid_w = snap.cols as u16 * layout.cell_w;
        let grid_h = snap.rows as u16 * layout.cell_h;
        let x = layout.origin_x + grid_w.saturating_sub(text.len() as u16) / 2;
        let y = layout.origin_y + grid_h / 2;

        let style = CellStyle::new(Rgb::new(250, 250, 250), Rgb::new(40, 90, 40)).bold();
        fb.put_str(x.saturating_sub(1), y, " ", style);
        fb.put_str(x, y, text, style);
        fb.put_str(x + text.len() as u16, y, " ", style);
    }
}

/// Palette identifier to screen color.
fn color_rgb(color: SelectionColor) -> Rgb {
    match color {
        SelectionColor::Coral => Rgb::new(240, 110, 90),
        SelectionColor::Amber => Rgb::new(235, 180, 60),
        SelectionColor::Mint => Rgb::new(90, 210, 150),
        SelectionColor::Sky => Rgb::new(90, 170, 240),
        SelectionColor::Lilac => Rgb::new(180, 140, 235),
        SelectionColor::Rose => Rgb::new(235, 120, 180),
    }
}

/// Mute a stroke color for settled (found) cells.
fn dim_rgb(rgb: Rgb) -> Rgb {
    Rgb::new(rgb.r / 2, rgb.g / 2, rgb.b / 2)
}
