//! Bone Run play field rendering.
//!
//! Works only from a `Snapshot`. World coordinates are scaled into a cell
//! buffer sized to the target area, then the buffer is stamped row by row
//! as styled spans (same approach as the other cell-buffer scenes).
//! Cells falling outside the buffer are skipped; entities are never moved
//! to make them fit.

use super::theme::Palette;
use crate::runner::{Phase, Rect as WorldRect, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_TOP_CHAR: char = '▀';
const GROUND_CHAR: char = '░';
const BODY_CHAR: char = '█';
const EYE_CHAR: char = '•';
const BONE_CHAR: char = '═';
const BONE_END_CHAR: char = 'o';

/// One terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

/// Rasterize `snapshot` into a `width` x `height` cell grid.
///
/// Draw order: background, ground, runner, bones in spawn order, then the
/// phase overlay (start prompt or game-over veil with the score).
pub fn rasterize(
    snapshot: &Snapshot,
    width: u16,
    height: u16,
    palette: &Palette,
) -> Vec<Vec<Cell>> {
    let blank = Cell {
        ch: ' ',
        style: Style::default().fg(palette.text).bg(palette.background),
    };
    let mut grid = vec![vec![blank; width as usize]; height as usize];
    if width == 0 || height == 0 {
        return grid;
    }

    let scale = Scale::new(snapshot, width, height);

    // Ground strip
    let ground_row = scale.row_floor(snapshot.ground_y);
    for (r, row) in grid.iter_mut().enumerate().skip(ground_row.max(0) as usize) {
        let ch = if r as i64 == ground_row {
            GROUND_TOP_CHAR
        } else {
            GROUND_CHAR
        };
        for cell in row.iter_mut() {
            *cell = Cell {
                ch,
                style: Style::default().fg(palette.ground_line).bg(palette.ground),
            };
        }
    }

    draw_runner(&mut grid, &scale, &snapshot.runner, palette);
    for bone in &snapshot.obstacles {
        draw_bone(&mut grid, &scale, bone, palette);
    }

    match snapshot.phase {
        Phase::Idle => {
            let style = Style::default()
                .fg(palette.text)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD);
            write_centered(
                &mut grid,
                &["Press Space or tap to jump", "[ Play ]"],
                style,
            );
        }
        Phase::Playing => {}
        Phase::GameOver => {
            for cell in grid.iter_mut().flatten() {
                cell.style = Style::default().fg(palette.ground_line).bg(palette.overlay);
            }
            let style = Style::default()
                .fg(palette.overlay_text)
                .bg(palette.overlay)
                .add_modifier(Modifier::BOLD);
            let score = format!("Score: {}", snapshot.score);
            write_centered(
                &mut grid,
                &["Bored yet?", &score, "Tap or Space to play again"],
                style,
            );
        }
    }

    grid
}

/// Plain text of one grid row.
pub fn row_text(row: &[Cell]) -> String {
    row.iter().map(|c| c.ch).collect()
}

/// Draw the play field for `snapshot` into `area`.
pub fn render_runner_scene(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    palette: &Palette,
) {
    if area.width < 10 || area.height < 3 {
        return;
    }

    let grid = rasterize(snapshot, area.width, area.height, palette);

    for (row_idx, row) in grid.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_style = row[0].style;
        let mut current_text = String::new();

        for cell in row {
            if cell.style != current_style && !current_text.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
            }
            current_style = cell.style;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, current_style));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// World-to-cell mapping for one grid size.
struct Scale {
    cols: u16,
    rows: u16,
    world_width: f64,
    world_height: f64,
}

impl Scale {
    fn new(snapshot: &Snapshot, cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            world_width: snapshot.world_width,
            world_height: snapshot.world_height,
        }
    }

    fn col_floor(&self, x: f64) -> i64 {
        (x * self.cols as f64 / self.world_width).floor() as i64
    }

    fn row_floor(&self, y: f64) -> i64 {
        (y * self.rows as f64 / self.world_height).floor() as i64
    }

    /// Cell ranges covered by `rect`, clipped to the grid. `None` when the
    /// rectangle is entirely off-grid.
    fn cells(&self, rect: &WorldRect) -> Option<(CellRange, CellRange)> {
        let c0 = self.col_floor(rect.x);
        let c1 = ((rect.right() * self.cols as f64 / self.world_width).ceil() as i64 - 1).max(c0);
        let r0 = self.row_floor(rect.y);
        let r1 = ((rect.bottom() * self.rows as f64 / self.world_height).ceil() as i64 - 1).max(r0);
        let cols = CellRange::clip(c0, c1, self.cols)?;
        let rows = CellRange::clip(r0, r1, self.rows)?;
        Some((cols, rows))
    }
}

/// Inclusive cell range with its unclipped ends, so partially visible
/// entities keep their shape.
#[derive(Clone, Copy)]
struct CellRange {
    first: i64,
    last: i64,
    lo: usize,
    hi: usize,
}

impl CellRange {
    fn clip(first: i64, last: i64, limit: u16) -> Option<Self> {
        let lo = first.max(0);
        let hi = last.min(limit as i64 - 1);
        if lo > hi {
            return None;
        }
        Some(Self {
            first,
            last,
            lo: lo as usize,
            hi: hi as usize,
        })
    }
}

fn draw_runner(grid: &mut [Vec<Cell>], scale: &Scale, rect: &WorldRect, palette: &Palette) {
    let Some((cols, rows)) = scale.cells(rect) else {
        return;
    };
    let eye_col = cols.first + (cols.last - cols.first + 1) / 2;

    for r in rows.lo..=rows.hi {
        for c in cols.lo..=cols.hi {
            let on_edge = c as i64 == cols.first || c as i64 == cols.last;
            let (ch, style) = if r as i64 == rows.first && c as i64 == eye_col {
                (EYE_CHAR, Style::default().fg(palette.runner_eye).bg(palette.runner_body))
            } else if r as i64 != rows.first && on_edge && cols.last > cols.first + 1 {
                (BODY_CHAR, Style::default().fg(palette.runner_arms).bg(palette.background))
            } else {
                (BODY_CHAR, Style::default().fg(palette.runner_body).bg(palette.background))
            };
            grid[r][c] = Cell { ch, style };
        }
    }
}

fn draw_bone(grid: &mut [Vec<Cell>], scale: &Scale, rect: &WorldRect, palette: &Palette) {
    let Some((cols, rows)) = scale.cells(rect) else {
        return;
    };
    for r in rows.lo..=rows.hi {
        for c in cols.lo..=cols.hi {
            let is_end =
                cols.last > cols.first && (c as i64 == cols.first || c as i64 == cols.last);
            let (ch, fg) = if is_end {
                (BONE_END_CHAR, palette.bone_stroke)
            } else {
                (BONE_CHAR, palette.bone)
            };
            grid[r][c] = Cell {
                ch,
                style: Style::default().fg(fg).bg(palette.background),
            };
        }
    }
}

/// Write lines centered on the grid, truncating any that do not fit.
fn write_centered(grid: &mut [Vec<Cell>], lines: &[&str], style: Style) {
    let height = grid.len();
    let start = height.saturating_sub(lines.len()) / 2;
    for (i, text) in lines.iter().enumerate() {
        let Some(row) = grid.get_mut(start + i) else {
            break;
        };
        let width = row.len();
        let len = text.chars().count().min(width);
        let col0 = (width - len) / 2;
        for (j, ch) in text.chars().take(len).enumerate() {
            row[col0 + j] = Cell { ch, style };
        }
    }
}
