//! Keyboard routing from crossterm events to state-machine messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use docpanel_core::{DialogKind, Msg, Tab};

use super::ui::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Msg),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub tab: Tab,
    pub dialog_open: bool,
}

/// Maps a key press to an action. Document commands only apply on the
/// documents tab, and an open dialog captures all keys except Ctrl+C.
pub fn map_key(key: KeyEvent, context: InputContext) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }
    if context.dialog_open {
        return map_dialog_key(key.code).map(InputAction::Dispatch);
    }

    let msg = match key.code {
        KeyCode::Char(KEY_QUIT) => return Some(InputAction::Quit),
        KeyCode::Tab => Msg::NextTab,
        KeyCode::Char(KEY_TAB_DOCUMENTS) => Msg::TabSelected(Tab::Documents),
        KeyCode::Char(KEY_TAB_STATUS) => Msg::TabSelected(Tab::Status),
        code if context.tab == Tab::Documents => map_documents_key(code)?,
        _ => return None,
    };
    Some(InputAction::Dispatch(msg))
}

fn map_dialog_key(code: KeyCode) -> Option<Msg> {
    match code {
        KeyCode::Esc => Some(Msg::DialogClosed),
        KeyCode::Enter => Some(Msg::DialogConfirmed),
        KeyCode::Backspace => Some(Msg::DialogBackspace),
        KeyCode::Char(ch) => Some(Msg::DialogCharTyped(ch)),
        _ => None,
    }
}

fn map_documents_key(code: KeyCode) -> Option<Msg> {
    match code {
        KeyCode::Char(KEY_SCAN) => Some(Msg::ScanClicked),
        KeyCode::Char(KEY_REFRESH) => Some(Msg::RefreshClicked),
        KeyCode::Char(KEY_TOGGLE_FILE_NAME) => Some(Msg::ToggleFileName),
        KeyCode::Char(KEY_UPLOAD) => Some(Msg::DialogOpened(DialogKind::Upload)),
        KeyCode::Char(KEY_CLEAR) => Some(Msg::DialogOpened(DialogKind::Clear)),
        KeyCode::Char(KEY_NEXT_ROW) | KeyCode::Down => Some(Msg::SelectNext),
        KeyCode::Char(KEY_PREVIOUS_ROW) | KeyCode::Up => Some(Msg::SelectPrevious),
        _ => None,
    }
}
