use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One document as returned by `GET /documents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocStatusResponse {
    pub id: String,
    #[serde(default)]
    pub content_summary: Option<String>,
    #[serde(default)]
    pub content_length: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub chunks_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    /// Kept untyped: older backends send numbers or objects here.
    #[serde(default)]
    pub file_path: Option<Value>,
}

impl DocStatusResponse {
    /// The source path when the backend sent it as a string.
    pub fn file_path_str(&self) -> Option<&str> {
        self.file_path.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub statuses: HashMap<String, Option<Vec<DocStatusResponse>>>,
}

/// Reply of the scan, clear and upload endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    /// Human-readable text: the message when present, otherwise the status.
    pub fn summary(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => &self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct HealthConfiguration {
    #[serde(default)]
    pub llm_binding: Option<String>,
    #[serde(default)]
    pub llm_model: Option<String>,
    #[serde(default)]
    pub embedding_binding: Option<String>,
    #[serde(default)]
    pub embedding_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub working_directory: Option<String>,
    #[serde(default)]
    pub input_directory: Option<String>,
    #[serde(default)]
    pub pipeline_busy: bool,
    #[serde(default)]
    pub configuration: Option<HealthConfiguration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Activation,
    Manual,
    Poll,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    DocumentsFetched {
        origin: FetchOrigin,
        result: Result<Option<DocumentsResponse>, ApiError>,
    },
    ScanFinished(Result<ActionResponse, ApiError>),
    HealthChecked(Result<HealthResponse, ApiError>),
    ClearFinished(Result<ActionResponse, ApiError>),
    UploadFinished {
        path: PathBuf,
        result: Result<ActionResponse, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Io,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "invalid response"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
