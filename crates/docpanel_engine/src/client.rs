use std::path::Path;
use std::time::Duration;

use panel_logging::{panel_debug, panel_warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ActionResponse, ApiError, DocumentsResponse, FailureKind, HealthResponse};

const API_KEY_HEADER: &str = "X-API-Key";
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9621".to_string(),
            api_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Backend endpoints used by the document panel.
#[async_trait::async_trait]
pub trait DocumentApi: Send + Sync {
    /// Current documents grouped by status; `None` when the backend sends `null`.
    async fn documents(&self) -> Result<Option<DocumentsResponse>, ApiError>;

    async fn scan(&self) -> Result<ActionResponse, ApiError>;

    async fn health(&self) -> Result<HealthResponse, ApiError>;

    async fn clear(&self) -> Result<ActionResponse, ApiError>;

    async fn upload(&self, path: &Path) -> Result<ActionResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDocumentClient {
    base: Url,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ReqwestDocumentClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Url::join drops the last segment unless the base ends with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            base,
            api_key: settings.api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, ApiError> {
        let url = self
            .base
            .join(endpoint)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        panel_debug!("{} {}", method, url);
        let mut builder = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        Ok(builder)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            panel_warn!("Backend answered {}: {}", status.as_u16(), message);
            return Err(ApiError::new(FailureKind::HttpStatus(status.as_u16()), message));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl DocumentApi for ReqwestDocumentClient {
    async fn documents(&self) -> Result<Option<DocumentsResponse>, ApiError> {
        let request = self.request(Method::GET, "documents")?;
        self.send_json(request).await
    }

    async fn scan(&self) -> Result<ActionResponse, ApiError> {
        let request = self.request(Method::POST, "documents/scan")?;
        self.send_json(request).await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let request = self.request(Method::GET, "health")?;
        self.send_json(request).await
    }

    async fn clear(&self) -> Result<ActionResponse, ApiError> {
        let request = self.request(Method::DELETE, "documents")?;
        self.send_json(request).await
    }

    async fn upload(&self, path: &Path) -> Result<ActionResponse, ApiError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::new(FailureKind::Io, format!("not a file path: {}", path.display()))
            })?;
        let data = tokio::fs::read(path)
            .await
            .map_err(|err| ApiError::new(FailureKind::Io, format!("{}: {err}", path.display())))?;

        let form = Form::new().part("file", Part::bytes(data).file_name(file_name));
        let request = self.request(Method::POST, "documents/upload")?.multipart(form);
        self.send_json(request).await
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    // FastAPI style `{"detail": "..."}` bodies carry the useful text.
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
