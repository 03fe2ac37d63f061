use crate::{DialogKind, FetchOrigin, HealthInfo, Preferences, StatusSnapshot, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished booting.
    Started,
    /// App is tearing down; stops background work.
    Shutdown,
    /// UI tick; ages notifications.
    Tick,
    /// Periodic backend health re-check.
    HealthTick,
    /// User picked a tab.
    TabSelected(Tab),
    /// User cycled to the next tab.
    NextTab,
    /// User toggled file name vs id display.
    ToggleFileName,
    /// User asked for an immediate document reload.
    RefreshClicked,
    /// User clicked Scan.
    ScanClicked,
    /// Move the row selection down.
    SelectNext,
    /// Move the row selection up.
    SelectPrevious,
    DialogOpened(DialogKind),
    DialogClosed,
    DialogCharTyped(char),
    DialogBackspace,
    DialogConfirmed,
    /// Restore persisted view preferences.
    RestorePreferences(Preferences),
    /// Document status fetch completed.
    DocumentsFetched {
        origin: FetchOrigin,
        result: Result<Option<StatusSnapshot>, String>,
    },
    /// Scan request completed with the backend status text.
    ScanFinished(Result<String, String>),
    /// Health check completed.
    HealthChecked(Result<HealthInfo, String>),
    /// Clear request completed with the backend message.
    ClearFinished(Result<String, String>),
    /// Upload completed with the backend message.
    UploadFinished(Result<String, String>),
}
