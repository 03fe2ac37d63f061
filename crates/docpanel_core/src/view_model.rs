use crate::filename::{display_file_name, TABLE_NAME_LIMIT};
use crate::i18n::Locale;
use crate::{
    AppState, Dialog, DocStatus, DocumentRecord, HealthInfo, NotificationLevel, StatusCounts,
    Tab,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub locale: Locale,
    pub tab: Tab,
    pub health: bool,
    pub pipeline_busy: bool,
    pub show_file_name: bool,
    pub polling: bool,
    pub counts: StatusCounts,
    pub total_documents: usize,
    /// Table rows; empty means the empty state is shown instead of a table.
    pub rows: Vec<DocumentRowView>,
    pub selected: Option<usize>,
    pub detail: Option<DocumentDetailView>,
    pub health_info: Option<HealthInfo>,
    pub health_error: Option<String>,
    pub dialog: Option<DialogView>,
    pub notifications: Vec<NotificationView>,
}

impl AppViewModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRowView {
    pub id: String,
    /// Id or short file name depending on the file-name toggle.
    pub label: String,
    pub summary: String,
    pub status: DocStatus,
    pub has_error: bool,
    pub content_length: Option<u64>,
    pub chunks_count: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Full-length fields of the selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDetailView {
    pub id: String,
    pub file_path: Option<String>,
    pub summary: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    Upload { path: String },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub level: NotificationLevel,
    pub message: String,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let settings = self.settings();
        let snapshot = self.snapshot();
        let documents: Vec<&DocumentRecord> =
            snapshot.map(|s| s.documents().collect()).unwrap_or_default();

        let rows = documents
            .iter()
            .map(|record| row_view(record, settings.show_file_name))
            .collect();
        let detail = self
            .selected()
            .and_then(|idx| documents.get(idx))
            .map(|record| DocumentDetailView {
                id: record.id.clone(),
                file_path: record.file_path.clone(),
                summary: record.content_summary.clone(),
                error: record.error.clone().filter(|_| record.has_error()),
            });

        AppViewModel {
            locale: self.locale(),
            tab: settings.current_tab,
            health: settings.health,
            pipeline_busy: settings.pipeline_busy,
            show_file_name: settings.show_file_name,
            polling: self.is_polling(),
            counts: StatusCounts::of(snapshot),
            total_documents: documents.len(),
            rows,
            selected: self.selected(),
            detail,
            health_info: self.health_info().cloned(),
            health_error: self.health_error().map(str::to_string),
            dialog: self.dialog().map(|dialog| match dialog {
                Dialog::Upload { path } => DialogView::Upload { path: path.clone() },
                Dialog::Clear => DialogView::Clear,
            }),
            notifications: self
                .notifications()
                .iter()
                .map(|n| NotificationView {
                    level: n.level,
                    message: n.message.clone(),
                })
                .collect(),
        }
    }
}

fn row_view(record: &DocumentRecord, show_file_name: bool) -> DocumentRowView {
    let label = if show_file_name {
        display_file_name(record, TABLE_NAME_LIMIT)
    } else {
        record.id.clone()
    };
    DocumentRowView {
        id: record.id.clone(),
        label,
        summary: record.content_summary.clone(),
        status: record.status,
        has_error: record.has_error(),
        content_length: record.content_length,
        chunks_count: record.chunks_count,
        created_at: record.created_at.clone(),
        updated_at: record.updated_at.clone(),
    }
}
