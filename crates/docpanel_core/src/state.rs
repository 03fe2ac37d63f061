use crate::i18n::{tr_error, Locale, Text};
use crate::polling::{PollTransition, PollingController};
use crate::{Preferences, StatusCounts, StatusSnapshot, Tab, ViewSettings};

/// Ticks a notification stays visible.
pub const NOTIFICATION_TTL_TICKS: u32 = 16;
const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub ttl_ticks: u32,
}

/// Backend health as last reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HealthInfo {
    pub status: String,
    pub pipeline_busy: bool,
    pub working_directory: Option<String>,
    pub input_directory: Option<String>,
    pub llm_model: Option<String>,
    pub embedding_model: Option<String>,
}

impl HealthInfo {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Upload,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Upload { path: String },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    locale: Locale,
    settings: ViewSettings,
    health_info: Option<HealthInfo>,
    health_error: Option<String>,
    snapshot: Option<StatusSnapshot>,
    previous_counts: StatusCounts,
    polling: PollingController,
    selected: Option<usize>,
    dialog: Option<Dialog>,
    notifications: Vec<Notification>,
    next_notification_id: u64,
    shutting_down: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn previous_counts(&self) -> StatusCounts {
        self.previous_counts
    }

    pub fn is_polling(&self) -> bool {
        self.polling.is_active()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub(crate) fn health_info(&self) -> Option<&HealthInfo> {
        self.health_info.as_ref()
    }

    pub(crate) fn health_error(&self) -> Option<&str> {
        self.health_error.as_deref()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub(crate) fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        if self.settings.current_tab != tab {
            self.settings.current_tab = tab;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_file_name(&mut self) {
        self.settings.show_file_name = !self.settings.show_file_name;
        self.mark_dirty();
    }

    pub(crate) fn apply_preferences(&mut self, preferences: Preferences) {
        self.select_tab(preferences.current_tab);
        if self.settings.show_file_name != preferences.show_file_name {
            self.settings.show_file_name = preferences.show_file_name;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_shutdown(&mut self) {
        self.shutting_down = true;
    }

    /// Stores new counts and reports whether any of them changed.
    pub(crate) fn replace_counts(&mut self, counts: StatusCounts) -> bool {
        let changed = counts != self.previous_counts;
        self.previous_counts = counts;
        changed
    }

    pub(crate) fn replace_snapshot(&mut self, snapshot: Option<StatusSnapshot>) {
        if self.snapshot != snapshot {
            self.snapshot = snapshot;
            self.clamp_selection();
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_health(&mut self, result: Result<HealthInfo, String>) {
        let before = (self.settings, self.health_info.clone(), self.health_error.clone());
        match result {
            Ok(info) => {
                self.settings.health = info.is_healthy();
                self.settings.pipeline_busy = info.pipeline_busy;
                self.health_error = None;
                self.health_info = Some(info);
            }
            Err(error) => {
                self.settings.health = false;
                self.settings.pipeline_busy = false;
                self.health_error = Some(error);
            }
        }
        if before != (self.settings, self.health_info.clone(), self.health_error.clone()) {
            self.mark_dirty();
        }
    }

    pub(crate) fn reconcile_polling(&mut self) -> Option<PollTransition> {
        self.polling.reconcile(&self.settings, self.shutting_down)
    }

    fn row_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, StatusSnapshot::total)
    }

    fn clamp_selection(&mut self) {
        let rows = self.row_count();
        self.selected = match self.selected {
            _ if rows == 0 => None,
            Some(idx) => Some(idx.min(rows - 1)),
            None => None,
        };
    }

    pub(crate) fn move_selection(&mut self, forward: bool) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let next = match (self.selected, forward) {
            (None, _) => 0,
            (Some(idx), true) => (idx + 1).min(rows - 1),
            (Some(idx), false) => idx.saturating_sub(1),
        };
        if self.selected != Some(next) {
            self.selected = Some(next);
            self.mark_dirty();
        }
    }

    pub(crate) fn open_dialog(&mut self, kind: DialogKind) {
        self.dialog = Some(match kind {
            DialogKind::Upload => Dialog::Upload {
                path: String::new(),
            },
            DialogKind::Clear => Dialog::Clear,
        });
        self.mark_dirty();
    }

    pub(crate) fn close_dialog(&mut self) -> Option<Dialog> {
        let closed = self.dialog.take();
        if closed.is_some() {
            self.mark_dirty();
        }
        closed
    }

    pub(crate) fn edit_dialog_input(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(Dialog::Upload { path }) = self.dialog.as_mut() {
            edit(path);
            self.dirty = true;
        }
    }

    pub(crate) fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id: self.next_notification_id,
            level,
            message: message.into(),
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let overflow = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..overflow);
        }
        self.mark_dirty();
    }

    pub(crate) fn notify_error(&mut self, key: Text, error: &str) {
        let message = tr_error(self.locale, key, error);
        self.notify(NotificationLevel::Error, message);
    }

    pub(crate) fn age_notifications(&mut self) {
        if self.notifications.is_empty() {
            return;
        }
        let before = self.notifications.len();
        for notification in &mut self.notifications {
            notification.ttl_ticks = notification.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
        if self.notifications.len() != before {
            self.mark_dirty();
        }
    }
}
