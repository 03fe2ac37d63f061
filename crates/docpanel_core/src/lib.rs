//! Docpanel core: pure state machine and view-model helpers.
mod document;
mod effect;
mod filename;
pub mod i18n;
mod msg;
mod polling;
mod state;
mod store;
mod update;
mod view_model;

pub use document::{DocStatus, DocumentRecord, StatusCounts, StatusGroup, StatusSnapshot};
pub use effect::{Effect, FetchOrigin};
pub use filename::{display_file_name, DEFAULT_NAME_LIMIT, TABLE_NAME_LIMIT};
pub use i18n::{Locale, Text};
pub use msg::Msg;
pub use polling::{PollTransition, PollingController, PollingState, POLL_INTERVAL};
pub use state::{
    AppState, Dialog, DialogKind, HealthInfo, Notification, NotificationLevel,
    NOTIFICATION_TTL_TICKS,
};
pub use store::{Preferences, SettingsStore, SubscriptionId, Tab, ViewSettings};
pub use update::update;
pub use view_model::{
    AppViewModel, DialogView, DocumentDetailView, DocumentRowView, NotificationView,
};
