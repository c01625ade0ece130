//! Terminal input mapping.
//!
//! Turns crossterm events into UI-agnostic `AppInput`s. Only key presses
//! and mouse-button downs produce input: auto-repeat and release events are
//! dropped so a held key fires once.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Everything the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Start, jump or restart depending on the game phase.
    PrimaryAction,
    ToggleTimer,
    ResetTimer,
    /// 0-based index into the timer presets.
    SelectPreset(usize),
    AdjustMinutes(i32),
    /// Open the custom-minutes field.
    BeginCustom,
    EntryChar(char),
    EntryBackspace,
    EntryConfirm,
    EntryCancel,
    Quit,
}

/// Map one terminal event. `editing` is true while the custom-minutes
/// field has focus; digits and editing keys then go to the field.
pub fn map_event(event: &Event, editing: bool) -> Option<AppInput> {
    match event {
        Event::Key(key) => map_key(*key, editing),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => None,
    }
}

pub fn map_key(key: KeyEvent, editing: bool) -> Option<AppInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppInput::Quit);
    }

    if editing {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(AppInput::EntryChar(c)),
            KeyCode::Backspace => Some(AppInput::EntryBackspace),
            KeyCode::Enter => Some(AppInput::EntryConfirm),
            KeyCode::Esc => Some(AppInput::EntryCancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(AppInput::PrimaryAction),
        KeyCode::Char('q') | KeyCode::Esc => Some(AppInput::Quit),
        KeyCode::Char('t') => Some(AppInput::ToggleTimer),
        KeyCode::Char('r') => Some(AppInput::ResetTimer),
        KeyCode::Char('c') => Some(AppInput::BeginCustom),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(AppInput::AdjustMinutes(1)),
        KeyCode::Char('-') => Some(AppInput::AdjustMinutes(-1)),
        KeyCode::Char(c @ '1'..='9') => Some(AppInput::SelectPreset(c as usize - '1' as usize)),
        _ => None,
    }
}

/// A tap or click anywhere counts as the primary action.
pub fn map_mouse(mouse: MouseEvent) -> Option<AppInput> {
    match mouse.kind {
        MouseEventKind::Down(_) => Some(AppInput::PrimaryAction),
        _ => None,
    }
}
