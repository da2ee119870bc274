//! Keybindings: Tab field, Enter apply, arrows intensity/picker, Ctrl+T mode,
//! Ctrl+E enable, Ctrl+R reset, Ctrl+P presets, Esc close/quit.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, picker_visible: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('t') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ToggleMode);
    }
    if code == KeyCode::Char('e') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ToggleEnabled);
    }
    if code == KeyCode::Char('r') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Reset);
    }
    if code == KeyCode::Char('p') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::PickerShow);
    }

    if code == KeyCode::Esc && mods.is_empty() {
        return if picker_visible {
            Some(Action::PickerHide)
        } else {
            Some(Action::Quit)
        };
    }
    if code == KeyCode::Enter && mods.is_empty() {
        return if picker_visible {
            Some(Action::PickerSelect)
        } else {
            Some(Action::Commit)
        };
    }
    if code == KeyCode::Tab && mods.is_empty() && !picker_visible {
        return Some(Action::FocusNext);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }

    if code == KeyCode::Up && mods.is_empty() && picker_visible {
        return Some(Action::PickerUp);
    }
    if code == KeyCode::Down && mods.is_empty() && picker_visible {
        return Some(Action::PickerDown);
    }
    if code == KeyCode::Left && mods.is_empty() && !picker_visible {
        return Some(Action::IntensityDown);
    }
    if code == KeyCode::Right && mods.is_empty() && !picker_visible {
        return Some(Action::IntensityUp);
    }

    // Any other character goes to the focused field (allow Alt for accented
    // chars; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}
