use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Routes a key event to whichever surface currently owns the keyboard.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode.clone() {
        Mode::Chat => handle_chat_key(app, key),
        Mode::Confirm(_) => handle_confirm_key(app, key),
        Mode::Rename { .. } => handle_rename_key(app, key),
        Mode::QuitConfirm => handle_quit_confirm_key(app, key),
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.send_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => app.mode = Mode::QuitConfirm,
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'n' => app.new_conversation(),
                    'r' => app.request_rename(),
                    'd' => app.request_delete(),
                    'l' => app.request_clear_messages(),
                    'x' => app.request_clear_all(),
                    't' => app.toggle_theme(),
                    'c' => app.mode = Mode::QuitConfirm,
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_pending(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
}

fn handle_rename_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.apply_rename(),
        KeyCode::Esc => app.cancel_modal(),
        KeyCode::Backspace => {
            if let Mode::Rename { buffer, .. } = &mut app.mode {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                if let Mode::Rename { buffer, .. } = &mut app.mode {
                    buffer.push(c);
                }
            }
        }
        _ => {}
    }
}

fn handle_quit_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
}
