use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchDocuments { origin: FetchOrigin },
    ScanDocuments,
    CheckHealth,
    StartPolling { interval: Duration },
    StopPolling,
    ClearDocuments,
    UploadDocument { path: String },
}

/// Why a document fetch was issued; decides which error text a failure gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// The panel just became active.
    Activation,
    /// User refresh, or follow-up after clear/upload.
    Manual,
    /// Background poll tick.
    Poll,
}
