pub mod layout;
pub mod runner_scene;
pub mod theme;
pub mod timer_panel;

use crate::app::App;
use crate::runner::RandomSource;
use layout::{render_screen, render_status};
use ratatui::Frame;
use runner_scene::render_runner_scene;
use timer_panel::render_timer_panel;

/// Draw the whole screen from the app's latest snapshot.
pub fn draw<S: RandomSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.size();
    let layout = render_screen(frame, area);
    let snapshot = app.snapshot();

    render_runner_scene(frame, layout.field, snapshot, &app.theme.palette());
    render_status(frame, layout.status, snapshot);
    render_timer_panel(frame, layout.timer, &app.timer, app.custom_entry.as_deref());
}
