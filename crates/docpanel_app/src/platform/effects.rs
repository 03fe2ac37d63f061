use docpanel_core::{
    DocStatus, DocumentRecord, Effect, FetchOrigin, HealthInfo, Msg, StatusSnapshot,
};
use docpanel_engine::{
    DocStatusResponse, DocumentsResponse, EngineEvent, EngineHandle, HealthResponse,
};
use panel_logging::{panel_debug, panel_info, panel_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            panel_debug!("Running effect {:?}", effect);
            match effect {
                Effect::FetchDocuments { origin } => {
                    self.engine.fetch_documents(engine_origin(origin));
                }
                Effect::ScanDocuments => self.engine.scan(),
                Effect::CheckHealth => self.engine.check_health(),
                Effect::StartPolling { interval } => {
                    panel_info!("Polling documents every {:?}", interval);
                    self.engine.start_polling(interval);
                }
                Effect::StopPolling => {
                    if self.engine.stop_polling() {
                        panel_info!("Polling stopped");
                    }
                }
                Effect::ClearDocuments => self.engine.clear(),
                Effect::UploadDocument { path } => {
                    panel_info!("Uploading {}", path);
                    self.engine.upload(path);
                }
            }
        }
    }
}

/// Converts an engine result into the message the state machine expects.
pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DocumentsFetched { origin, result } => {
            if let Err(err) = &result {
                panel_warn!("Document fetch ({:?}) failed: {}", origin, err);
            }
            Msg::DocumentsFetched {
                origin: core_origin(origin),
                result: result
                    .map(|response| response.map(map_snapshot))
                    .map_err(|err| err.to_string()),
            }
        }
        EngineEvent::ScanFinished(result) => {
            if let Err(err) = &result {
                panel_warn!("Scan failed: {}", err);
            }
            Msg::ScanFinished(
                result
                    .map(|response| response.summary().to_string())
                    .map_err(|err| err.to_string()),
            )
        }
        EngineEvent::HealthChecked(result) => {
            if let Err(err) = &result {
                panel_warn!("Health check failed: {}", err);
            }
            Msg::HealthChecked(result.map(map_health).map_err(|err| err.to_string()))
        }
        EngineEvent::ClearFinished(result) => {
            if let Err(err) = &result {
                panel_warn!("Clearing documents failed: {}", err);
            }
            Msg::ClearFinished(
                result
                    .map(|response| response.summary().to_string())
                    .map_err(|err| err.to_string()),
            )
        }
        EngineEvent::UploadFinished { path, result } => {
            match &result {
                Ok(_) => panel_info!("Uploaded {:?}", path),
                Err(err) => panel_warn!("Upload of {:?} failed: {}", path, err),
            }
            Msg::UploadFinished(
                result
                    .map(|response| response.summary().to_string())
                    .map_err(|err| err.to_string()),
            )
        }
    }
}

fn engine_origin(origin: FetchOrigin) -> docpanel_engine::FetchOrigin {
    match origin {
        FetchOrigin::Activation => docpanel_engine::FetchOrigin::Activation,
        FetchOrigin::Manual => docpanel_engine::FetchOrigin::Manual,
        FetchOrigin::Poll => docpanel_engine::FetchOrigin::Poll,
    }
}

fn core_origin(origin: docpanel_engine::FetchOrigin) -> FetchOrigin {
    match origin {
        docpanel_engine::FetchOrigin::Activation => FetchOrigin::Activation,
        docpanel_engine::FetchOrigin::Manual => FetchOrigin::Manual,
        docpanel_engine::FetchOrigin::Poll => FetchOrigin::Poll,
    }
}

/// Groups keyed by an unknown status are dropped so that counts and rows stay
/// consistent.
fn map_snapshot(response: DocumentsResponse) -> StatusSnapshot {
    let groups = response
        .statuses
        .into_iter()
        .filter_map(|(name, documents)| match DocStatus::parse(&name) {
            Some(status) => Some((
                status,
                documents.map(|docs| {
                    docs.into_iter()
                        .map(|doc| map_record(doc, status))
                        .collect::<Vec<_>>()
                }),
            )),
            None => {
                panel_warn!("Ignoring unknown document status {:?}", name);
                None
            }
        });
    StatusSnapshot::from_groups(groups)
}

fn map_record(doc: DocStatusResponse, status: DocStatus) -> DocumentRecord {
    let file_path = doc.file_path_str().map(str::to_string);
    DocumentRecord {
        file_path,
        content_summary: doc.content_summary.unwrap_or_default(),
        content_length: doc.content_length,
        chunks_count: doc.chunks_count,
        error: doc.error,
        created_at: doc.created_at.unwrap_or_default(),
        updated_at: doc.updated_at.unwrap_or_default(),
        ..DocumentRecord::new(doc.id, status)
    }
}

fn map_health(response: HealthResponse) -> HealthInfo {
    let (llm_model, embedding_model) = match response.configuration {
        Some(config) => (config.llm_model, config.embedding_model),
        None => (None, None),
    };
    HealthInfo {
        status: response.status,
        pipeline_busy: response.pipeline_busy,
        working_directory: response.working_directory,
        input_directory: response.input_directory,
        llm_model,
        embedding_model,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use docpanel_engine::{ActionResponse, ApiError, FailureKind, HealthConfiguration};

    use super::*;

    fn doc(id: &str) -> DocStatusResponse {
        DocStatusResponse {
            id: id.to_string(),
            content_summary: Some(format!("summary of {id}")),
            content_length: Some(1200),
            status: None,
            created_at: Some("2024-06-01T10:00:00+00:00".to_string()),
            updated_at: None,
            chunks_count: Some(3),
            error: None,
            metadata: None,
            file_path: Some(serde_json::json!(format!("/inputs/{id}.pdf"))),
        }
    }

    #[test]
    fn documents_map_to_snapshot_and_skip_unknown_groups() {
        let statuses = HashMap::from([
            ("processed".to_string(), Some(vec![doc("a"), doc("b")])),
            ("pending".to_string(), None),
            ("archived".to_string(), Some(vec![doc("c")])),
        ]);
        let msg = map_event(EngineEvent::DocumentsFetched {
            origin: docpanel_engine::FetchOrigin::Poll,
            result: Ok(Some(DocumentsResponse { statuses })),
        });

        let Msg::DocumentsFetched { origin, result } = msg else {
            panic!("unexpected message {msg:?}");
        };
        assert_eq!(origin, FetchOrigin::Poll);
        let snapshot = result.unwrap().expect("snapshot");
        assert_eq!(snapshot.total(), 2);
        assert_eq!(snapshot.count(DocStatus::Processed), 2);

        let first = snapshot.documents().next().unwrap();
        assert_eq!(first.status, DocStatus::Processed);
        assert_eq!(first.file_path.as_deref(), Some("/inputs/a.pdf"));
        assert_eq!(first.updated_at, "");
    }

    #[test]
    fn non_string_file_path_is_dropped() {
        let mut raw = doc("x");
        raw.file_path = Some(serde_json::json!(42));
        let record = map_record(raw, DocStatus::Failed);
        assert_eq!(record.file_path, None);
        assert_eq!(record.status, DocStatus::Failed);
    }

    #[test]
    fn errors_become_display_strings() {
        let msg = map_event(EngineEvent::ScanFinished(Err(ApiError {
            kind: FailureKind::HttpStatus(500),
            message: "pipeline locked".to_string(),
        })));
        assert_eq!(
            msg,
            Msg::ScanFinished(Err("http status 500: pipeline locked".to_string()))
        );
    }

    #[test]
    fn upload_success_carries_backend_message() {
        let msg = map_event(EngineEvent::UploadFinished {
            path: PathBuf::from("notes.txt"),
            result: Ok(ActionResponse {
                status: "success".to_string(),
                message: Some("File uploaded".to_string()),
            }),
        });
        assert_eq!(msg, Msg::UploadFinished(Ok("File uploaded".to_string())));
    }

    #[test]
    fn health_flattens_configuration() {
        let msg = map_event(EngineEvent::HealthChecked(Ok(HealthResponse {
            status: "healthy".to_string(),
            working_directory: Some("/srv/rag".to_string()),
            input_directory: None,
            pipeline_busy: true,
            configuration: Some(HealthConfiguration {
                llm_model: Some("gpt-4o-mini".to_string()),
                embedding_model: Some("bge-m3".to_string()),
                ..HealthConfiguration::default()
            }),
        })));

        let Msg::HealthChecked(Ok(info)) = msg else {
            panic!("unexpected message {msg:?}");
        };
        assert!(info.is_healthy());
        assert!(info.pipeline_busy);
        assert_eq!(info.embedding_model.as_deref(), Some("bge-m3"));
    }
}
