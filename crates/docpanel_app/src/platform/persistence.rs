use std::path::{Path, PathBuf};

use docpanel_core::{Preferences, Tab, ViewSettings};
use docpanel_engine::{ensure_state_dir, AtomicFileWriter};
use panel_logging::{panel_debug, panel_error, panel_info, panel_warn};
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".docpanel_prefs.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PersistedTab {
    Documents,
    Status,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    current_tab: PersistedTab,
    show_file_name: bool,
}

impl From<Preferences> for PersistedPreferences {
    fn from(prefs: Preferences) -> Self {
        Self {
            current_tab: match prefs.current_tab {
                Tab::Documents => PersistedTab::Documents,
                Tab::Status => PersistedTab::Status,
            },
            show_file_name: prefs.show_file_name,
        }
    }
}

impl From<PersistedPreferences> for Preferences {
    fn from(persisted: PersistedPreferences) -> Self {
        Self {
            current_tab: match persisted.current_tab {
                PersistedTab::Documents => Tab::Documents,
                PersistedTab::Status => Tab::Status,
            },
            show_file_name: persisted.show_file_name,
        }
    }
}

/// Missing or unreadable preferences yield `None`; the panel then starts with
/// its defaults.
pub(crate) fn load_preferences(state_dir: &Path) -> Option<Preferences> {
    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    let content = match writer.read(PREFS_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            panel_warn!(
                "Failed to read preferences from {:?}: {}",
                state_dir,
                err
            );
            return None;
        }
    };

    match ron::from_str::<PersistedPreferences>(&content) {
        Ok(persisted) => {
            panel_info!("Loaded preferences from {:?}", state_dir);
            Some(persisted.into())
        }
        Err(err) => {
            panel_warn!("Failed to parse preferences in {:?}: {}", state_dir, err);
            None
        }
    }
}

pub(crate) fn save_preferences(state_dir: &Path, prefs: Preferences) {
    if let Err(err) = ensure_state_dir(state_dir) {
        panel_error!("Failed to ensure state dir {:?}: {}", state_dir, err);
        return;
    }

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&PersistedPreferences::from(prefs), pretty) {
        Ok(text) => text,
        Err(err) => {
            panel_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(PREFS_FILENAME, &content) {
        panel_error!("Failed to write preferences to {:?}: {}", state_dir, err);
    }
}

/// Store listener that writes preferences whenever the persisted subset of
/// the view settings changes.
pub(crate) fn preference_saver(
    state_dir: PathBuf,
    initial: Preferences,
) -> impl FnMut(&ViewSettings) + Send + 'static {
    let mut last = initial;
    move |settings: &ViewSettings| {
        let prefs = settings.preferences();
        if prefs == last {
            return;
        }
        panel_debug!("Preferences changed: {:?}", prefs);
        save_preferences(&state_dir, prefs);
        last = prefs;
    }
}
