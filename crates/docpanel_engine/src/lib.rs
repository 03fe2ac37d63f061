//! Docpanel engine: backend client, polling and effect execution.
mod client;
mod engine;
mod persist;
mod poll;
mod types;

pub use client::{ClientSettings, DocumentApi, ReqwestDocumentClient};
pub use engine::{EngineEvents, EngineHandle};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use poll::PollGuard;
pub use types::{
    ActionResponse, ApiError, DocStatusResponse, DocumentsResponse, EngineEvent, FailureKind,
    FetchOrigin, HealthConfiguration, HealthResponse,
};
