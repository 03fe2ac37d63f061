use docpanel_core::{
    update, AppState, DocStatus, DocumentRecord, Effect, FetchOrigin, HealthInfo, Msg,
    NotificationLevel, StatusSnapshot,
};

fn doc(id: &str, status: DocStatus) -> DocumentRecord {
    DocumentRecord::new(id, status)
}

fn snapshot(processed: usize, pending: usize, failed: usize) -> StatusSnapshot {
    let make = |prefix: &str, n: usize, status: DocStatus| {
        Some(
            (0..n)
                .map(|i| doc(&format!("{prefix}-{i}"), status))
                .collect::<Vec<_>>(),
        )
    };
    StatusSnapshot::from_groups(vec![
        (DocStatus::Processed, make("done", processed, DocStatus::Processed)),
        (DocStatus::Pending, make("wait", pending, DocStatus::Pending)),
        (DocStatus::Failed, make("fail", failed, DocStatus::Failed)),
    ])
}

fn fetched(state: AppState, result: Result<Option<StatusSnapshot>, String>) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::DocumentsFetched {
            origin: FetchOrigin::Poll,
            result,
        },
    )
}

fn health_checks(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| **effect == Effect::CheckHealth)
        .count()
}

#[test]
fn first_nonempty_fetch_renders_rows_and_requests_health() {
    let (mut state, effects) = fetched(AppState::new(), Ok(Some(snapshot(2, 1, 0))));
    let view = state.view();

    assert_eq!(health_checks(&effects), 1);
    assert_eq!(view.total_documents, 3);
    assert_eq!(view.counts.processed, 2);
    assert_eq!(view.counts.pending, 1);
    assert!(!view.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn changed_count_triggers_exactly_one_health_check() {
    let (state, _) = fetched(AppState::new(), Ok(Some(snapshot(2, 1, 0))));

    let (state, effects) = fetched(state, Ok(Some(snapshot(2, 1, 0))));
    assert_eq!(health_checks(&effects), 0);

    let (state, effects) = fetched(state, Ok(Some(snapshot(3, 0, 0))));
    assert_eq!(health_checks(&effects), 1);

    let (_state, effects) = fetched(state, Ok(Some(snapshot(3, 0, 1))));
    assert_eq!(health_checks(&effects), 1);
}

fn processing_snapshot(processing: usize) -> StatusSnapshot {
    StatusSnapshot::from_groups(vec![(
        DocStatus::Processing,
        Some(
            (0..processing)
                .map(|i| doc(&format!("busy-{i}"), DocStatus::Processing))
                .collect::<Vec<_>>(),
        ),
    )])
}

#[test]
fn processing_count_change_alone_triggers_health_check() {
    let (state, effects) = fetched(AppState::new(), Ok(Some(processing_snapshot(1))));
    assert_eq!(health_checks(&effects), 1);
    assert_eq!(state.view().counts.processing, 1);

    let (state, effects) = fetched(state, Ok(Some(processing_snapshot(2))));
    assert_eq!(health_checks(&effects), 1);
    assert_eq!(state.view().counts.processing, 2);

    let (_state, effects) = fetched(state, Ok(Some(processing_snapshot(2))));
    assert_eq!(health_checks(&effects), 0);
}

#[test]
fn empty_or_absent_snapshot_shows_empty_state() {
    let (state, _) = fetched(AppState::new(), Ok(Some(snapshot(1, 0, 0))));
    assert!(!state.view().is_empty());

    let (state, effects) = fetched(state, Ok(Some(snapshot(0, 0, 0))));
    assert!(state.snapshot().is_none());
    assert!(state.view().is_empty());
    assert_eq!(health_checks(&effects), 1);

    let (state, effects) = fetched(state, Ok(None));
    assert!(state.view().is_empty());
    assert_eq!(health_checks(&effects), 0);

    let all_absent = StatusSnapshot::from_groups(vec![
        (DocStatus::Processed, None),
        (DocStatus::Processing, Some(Vec::new())),
    ]);
    let (state, _) = fetched(state, Ok(Some(all_absent)));
    assert!(state.snapshot().is_none());
    assert_eq!(state.view().total_documents, 0);
}

#[test]
fn failed_fetch_keeps_previous_data_and_notifies() {
    let (state, _) = fetched(AppState::new(), Ok(Some(snapshot(1, 1, 0))));
    let before = state.snapshot().cloned();
    let counts_before = state.previous_counts();

    let (state, effects) = update(
        state,
        Msg::DocumentsFetched {
            origin: FetchOrigin::Manual,
            result: Err("network error".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.snapshot().cloned(), before);
    assert_eq!(state.previous_counts(), counts_before);
    let view = state.view();
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].level, NotificationLevel::Error);
    assert_eq!(
        view.notifications[0].message,
        "Failed to load documents: network error"
    );
}

#[test]
fn poll_failure_uses_distinct_message() {
    let (state, _) = fetched(AppState::new(), Err("timeout".to_string()));
    assert_eq!(
        state.view().notifications[0].message,
        "Failed to get scan progress: timeout"
    );
}

#[test]
fn rows_follow_status_order_and_toggle_labels() {
    let mut named = doc("doc-1", DocStatus::Processed);
    named.file_path = Some("/inputs/quarterly-report.pdf".to_string());
    named.content_length = Some(1200);
    let mut broken = doc("doc-2", DocStatus::Failed);
    broken.error = Some("embedding timeout".to_string());
    let snapshot = StatusSnapshot::from_groups(vec![
        (DocStatus::Failed, Some(vec![broken])),
        (DocStatus::Processed, Some(vec![named])),
    ]);

    let (state, _) = fetched(AppState::new(), Ok(Some(snapshot)));
    let view = state.view();
    let labels: Vec<_> = view.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["doc-1", "doc-2"]);
    assert!(view.rows[1].has_error);
    assert!(!view.rows[0].has_error);

    let (state, effects) = update(state, Msg::ToggleFileName);
    assert!(effects.is_empty());
    let labels: Vec<_> = state
        .view()
        .rows
        .iter()
        .map(|r| r.label.clone())
        .collect();
    assert_eq!(labels, vec!["quarterly-report.pdf", "doc-2"]);
}

#[test]
fn selection_exposes_full_detail_and_is_clamped() {
    let mut long = doc("doc-1", DocStatus::Processed);
    long.file_path = Some("/a/b/a-really-long-file-name-that-overflows-the-column.md".to_string());
    long.content_summary = "x".repeat(300);
    let snapshot = StatusSnapshot::from_groups(vec![(
        DocStatus::Processed,
        Some(vec![long, doc("doc-2", DocStatus::Processed)]),
    )]);
    let (state, _) = fetched(AppState::new(), Ok(Some(snapshot)));

    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    assert_eq!(state.view().selected, Some(1));

    let (state, _) = update(state, Msg::SelectPrevious);
    let detail = state.view().detail.expect("detail for selected row");
    assert_eq!(detail.id, "doc-1");
    assert_eq!(detail.summary.len(), 300);
    assert_eq!(
        detail.file_path.as_deref(),
        Some("/a/b/a-really-long-file-name-that-overflows-the-column.md")
    );

    let (state, _) = fetched(state, Ok(Some(snapshot_with_one())));
    assert_eq!(state.view().selected, Some(0));
    let (state, _) = fetched(state, Ok(None));
    assert_eq!(state.view().selected, None);
    assert!(state.view().detail.is_none());
}

fn snapshot_with_one() -> StatusSnapshot {
    StatusSnapshot::from_groups(vec![(
        DocStatus::Pending,
        Some(vec![doc("only", DocStatus::Pending)]),
    )])
}

#[test]
fn scan_failure_notifies_once_and_keeps_snapshot() {
    let (state, _) = fetched(AppState::new(), Ok(Some(snapshot(1, 0, 0))));
    let before = state.snapshot().cloned();

    let (state, effects) = update(state, Msg::ScanClicked);
    assert_eq!(effects, vec![Effect::ScanDocuments]);

    let (state, effects) = update(state, Msg::ScanFinished(Err("http status 500".to_string())));
    assert!(effects.is_empty());
    assert_eq!(state.snapshot().cloned(), before);
    let errors: Vec<_> = state
        .view()
        .notifications
        .into_iter()
        .filter(|n| n.level == NotificationLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Failed to scan documents: http status 500");
}

#[test]
fn scan_success_shows_backend_status() {
    let (state, _) = update(
        AppState::new(),
        Msg::ScanFinished(Ok("scanning_started".to_string())),
    );
    let view = state.view();
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].level, NotificationLevel::Info);
    assert_eq!(view.notifications[0].message, "scanning_started");
}

#[test]
fn health_result_updates_pipeline_flag() {
    let (state, _) = update(
        AppState::new(),
        Msg::HealthChecked(Ok(HealthInfo {
            status: "healthy".to_string(),
            pipeline_busy: true,
            ..HealthInfo::default()
        })),
    );
    assert!(state.settings().health);
    assert!(state.settings().pipeline_busy);

    let (state, _) = update(state, Msg::HealthChecked(Err("connection refused".to_string())));
    assert!(!state.settings().health);
    assert!(!state.settings().pipeline_busy);
    assert_eq!(
        state.view().health_error.as_deref(),
        Some("connection refused")
    );
}
