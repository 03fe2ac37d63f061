use std::time::Duration;

/// Drives notification expiry and redraw throttling.
pub const UI_TICK: Duration = Duration::from_millis(250);

pub const KEY_QUIT: char = 'q';
pub const KEY_SCAN: char = 's';
pub const KEY_REFRESH: char = 'r';
pub const KEY_TOGGLE_FILE_NAME: char = 'f';
pub const KEY_UPLOAD: char = 'u';
pub const KEY_CLEAR: char = 'c';
pub const KEY_NEXT_ROW: char = 'j';
pub const KEY_PREVIOUS_ROW: char = 'k';
pub const KEY_TAB_DOCUMENTS: char = '1';
pub const KEY_TAB_STATUS: char = '2';

/// Shown for absent numeric cells.
pub const PLACEHOLDER: &str = "-";
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
