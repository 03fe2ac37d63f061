use crate::i18n::Text;
use crate::polling::{PollTransition, POLL_INTERVAL};
use crate::{
    AppState, Dialog, Effect, FetchOrigin, Msg, NotificationLevel, StatusCounts, StatusSnapshot,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = match msg {
        Msg::Started => vec![Effect::CheckHealth],
        Msg::HealthTick => {
            if state.is_shutting_down() {
                Vec::new()
            } else {
                vec![Effect::CheckHealth]
            }
        }
        Msg::Shutdown => {
            state.begin_shutdown();
            Vec::new()
        }
        Msg::Tick => {
            state.age_notifications();
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::NextTab => {
            let next = state.settings().current_tab.next();
            state.select_tab(next);
            Vec::new()
        }
        Msg::ToggleFileName => {
            state.toggle_file_name();
            Vec::new()
        }
        Msg::RefreshClicked => vec![Effect::FetchDocuments {
            origin: FetchOrigin::Manual,
        }],
        Msg::ScanClicked => vec![Effect::ScanDocuments],
        Msg::SelectNext => {
            state.move_selection(true);
            Vec::new()
        }
        Msg::SelectPrevious => {
            state.move_selection(false);
            Vec::new()
        }
        Msg::DialogOpened(kind) => {
            state.open_dialog(kind);
            Vec::new()
        }
        Msg::DialogClosed => {
            state.close_dialog();
            Vec::new()
        }
        Msg::DialogCharTyped(ch) => {
            state.edit_dialog_input(|path| path.push(ch));
            Vec::new()
        }
        Msg::DialogBackspace => {
            state.edit_dialog_input(|path| {
                path.pop();
            });
            Vec::new()
        }
        Msg::DialogConfirmed => confirm_dialog(&mut state),
        Msg::RestorePreferences(preferences) => {
            state.apply_preferences(preferences);
            Vec::new()
        }
        Msg::DocumentsFetched { origin, result } => apply_documents(&mut state, origin, result),
        Msg::ScanFinished(result) => {
            match result {
                Ok(status) => state.notify(NotificationLevel::Info, status),
                Err(error) => state.notify_error(Text::ScanFailed, &error),
            }
            Vec::new()
        }
        Msg::HealthChecked(result) => {
            state.apply_health(result);
            Vec::new()
        }
        Msg::ClearFinished(result) => after_bulk_change(&mut state, result, Text::ClearFailed),
        Msg::UploadFinished(result) => after_bulk_change(&mut state, result, Text::UploadFailed),
    };

    effects.extend(polling_effects(&mut state));
    (state, effects)
}

/// Change detector: any count difference asks for a health re-check, and a
/// zero total clears the table in favour of the empty state.
fn apply_documents(
    state: &mut AppState,
    origin: FetchOrigin,
    result: Result<Option<StatusSnapshot>, String>,
) -> Vec<Effect> {
    match result {
        Ok(snapshot) => {
            let counts = StatusCounts::of(snapshot.as_ref());
            let changed = state.replace_counts(counts);
            if counts.total() == 0 {
                state.replace_snapshot(None);
            } else {
                state.replace_snapshot(snapshot);
            }
            if changed {
                vec![Effect::CheckHealth]
            } else {
                Vec::new()
            }
        }
        Err(error) => {
            let key = match origin {
                FetchOrigin::Poll => Text::PollFailed,
                FetchOrigin::Activation | FetchOrigin::Manual => Text::LoadFailed,
            };
            state.notify_error(key, &error);
            Vec::new()
        }
    }
}

fn confirm_dialog(state: &mut AppState) -> Vec<Effect> {
    let effect = match state.dialog() {
        None => return Vec::new(),
        // Blank path keeps the dialog open.
        Some(Dialog::Upload { path }) if path.trim().is_empty() => return Vec::new(),
        Some(Dialog::Upload { path }) => Effect::UploadDocument {
            path: path.trim().to_string(),
        },
        Some(Dialog::Clear) => Effect::ClearDocuments,
    };
    state.close_dialog();
    vec![effect]
}

fn after_bulk_change(
    state: &mut AppState,
    result: Result<String, String>,
    failure: Text,
) -> Vec<Effect> {
    match result {
        Ok(message) => {
            state.notify(NotificationLevel::Success, message);
            vec![Effect::FetchDocuments {
                origin: FetchOrigin::Manual,
            }]
        }
        Err(error) => {
            state.notify_error(failure, &error);
            Vec::new()
        }
    }
}

fn polling_effects(state: &mut AppState) -> Vec<Effect> {
    match state.reconcile_polling() {
        Some(PollTransition::Start) => {
            state.mark_dirty();
            vec![
                Effect::StartPolling {
                    interval: POLL_INTERVAL,
                },
                Effect::FetchDocuments {
                    origin: FetchOrigin::Activation,
                },
            ]
        }
        Some(PollTransition::Stop) => {
            state.mark_dirty();
            vec![Effect::StopPolling]
        }
        None => Vec::new(),
    }
}
