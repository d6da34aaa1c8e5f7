//! Event handler for the TUI
//!
//! Routes key events to the focused input or to the global bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::services::Clock;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<C: Clock>(app: &mut App<'_, C>, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event<C: Clock>(app: &mut App<'_, C>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('x') if ctrl => app.clear_focused_bound(),
        KeyCode::Char('e') if ctrl => app.export_with_status(),

        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.submit(),

        KeyCode::Left => app.input_mut(app.focused_field).move_left(),
        KeyCode::Right => app.input_mut(app.focused_field).move_right(),
        KeyCode::Home => app.input_mut(app.focused_field).move_start(),
        KeyCode::End => app.input_mut(app.focused_field).move_end(),

        KeyCode::Backspace => app.edit_focused(|input| input.backspace()),
        KeyCode::Delete => app.edit_focused(|input| input.delete()),
        KeyCode::Char(c) if !ctrl => {
            app.clear_status();
            app.edit_focused(|input| input.insert(c));
        }
        _ => {}
    }
}
