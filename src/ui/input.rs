use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Reload,
    OpenImage,
    Quit,
}

pub fn classify_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => InputAction::Reload,
        KeyCode::Char('o') => InputAction::OpenImage,
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = classify_key(key);
    match action {
        InputAction::Quit => app.request_quit(),
        InputAction::Reload => {
            app.request_reload();
        }
        InputAction::OpenImage => {
            app.open_image();
        }
        InputAction::None => {}
    }
    action
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
