//! Bone Run screen layout: play field, status lines and the timer column.
//!
//! ```text
//! ┌ Bone Run ──────────────────────────┬ Boredom session ┐
//! │                                    │      5:00       │
//! │   play field                       │                 │
//! │                                    │                 │
//! │ Score: 3   Speed: 4.50             │                 │
//! │ [Space/Up/Click] Jump  [q] Quit    │                 │
//! └────────────────────────────────────┴─────────────────┘
//! ```

use crate::runner::{Phase, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const TIMER_COLUMN_WIDTH: u16 = 28;
/// Below this the timer column is dropped so the run stays playable.
const MIN_FIELD_WIDTH: u16 = 20;
const MIN_FIELD_HEIGHT: u16 = 6;
const STATUS_HEIGHT: u16 = 2;
const ACCENT: Color = Color::LightYellow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub field: Rect,
    /// Score line plus control hints; empty on very short terminals.
    pub status: Rect,
    /// Empty when the terminal is too narrow for it.
    pub timer: Rect,
}

fn screen_block() -> Block<'static> {
    Block::default()
        .title(" Bone Run ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
}

/// Split `area` without drawing anything.
pub fn split_screen(area: Rect) -> ScreenLayout {
    let inner = screen_block().inner(area);

    let timer_width = if inner.width >= MIN_FIELD_WIDTH + TIMER_COLUMN_WIDTH {
        TIMER_COLUMN_WIDTH
    } else {
        0
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(timer_width)])
        .split(inner);

    let status_height = if inner.height >= MIN_FIELD_HEIGHT + STATUS_HEIGHT {
        STATUS_HEIGHT
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(status_height)])
        .split(columns[0]);

    ScreenLayout {
        field: rows[0],
        status: rows[1],
        timer: columns[1],
    }
}

/// Clear the screen, draw the outer border and return the layout inside it.
pub fn render_screen(frame: &mut Frame, area: Rect) -> ScreenLayout {
    frame.render_widget(Clear, area);
    frame.render_widget(screen_block(), area);
    split_screen(area)
}

/// Status line text for the current run.
pub fn status_text(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        Phase::Idle => "Ready".to_string(),
        Phase::Playing => format!("Score: {}   Speed: {:.2}", snapshot.score, snapshot.speed),
        Phase::GameOver => format!("Game over - score {}", snapshot.score),
    }
}

/// What the primary action does in each phase.
pub fn primary_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Play",
        Phase::Playing => "Jump",
        Phase::GameOver => "Play again",
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if area.height < STATUS_HEIGHT {
        return;
    }

    let status = Paragraph::new(status_text(snapshot))
        .style(Style::default().fg(ACCENT))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    let key = Style::default().fg(Color::White);
    let action = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("[Space/Up/Click]", key),
        Span::styled(format!(" {}  ", primary_hint(snapshot.phase)), action),
        Span::styled("[t]", key),
        Span::styled(" Timer  ", action),
        Span::styled("[q]", key),
        Span::styled(" Quit", action),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Border for the timer column.
pub fn timer_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}
