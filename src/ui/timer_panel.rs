//! Countdown timer side panel.

use super::layout::timer_block;
use crate::timer::CountdownTimer;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the timer panel. `custom_entry` holds the digits being typed
/// while the custom field has focus.
pub fn render_timer_panel(
    frame: &mut Frame,
    area: Rect,
    timer: &CountdownTimer,
    custom_entry: Option<&str>,
) {
    if area.width == 0 {
        return;
    }
    let block = timer_block(" Boredom session ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let display_color = if timer.is_running() {
        Color::LightGreen
    } else {
        Color::White
    };

    let mut preset_spans = Vec::new();
    for (i, minutes) in timer.config.presets.iter().enumerate() {
        if i > 0 {
            preset_spans.push(Span::raw(" "));
        }
        let style = if *minutes == timer.selected_minutes {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        preset_spans.push(Span::styled(format!("{}m", minutes), style));
    }

    let custom = match custom_entry {
        Some(digits) => Span::styled(
            format!("[{:_<3}] min", digits),
            Style::default().fg(Color::LightYellow),
        ),
        None => {
            let text = timer.custom_field_text();
            let shown = if text.is_empty() { "---".to_string() } else { text };
            let fg = if timer.is_running() {
                Color::DarkGray
            } else {
                Color::Gray
            };
            Span::styled(format!("{} min", shown), Style::default().fg(fg))
        }
    };

    let hint_color = if timer.notice_visible() {
        Color::LightGreen
    } else {
        Color::DarkGray
    };

    let lines = vec![
        Line::from(Span::styled(
            timer.display(),
            Style::default()
                .fg(display_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(preset_spans),
        Line::from(vec![
            Span::styled("Custom: ", Style::default().fg(Color::DarkGray)),
            custom,
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("[t] {}", timer.button_label()),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "[1-4] preset [c] custom",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(timer.hint(), Style::default().fg(hint_color))),
    ];

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}
