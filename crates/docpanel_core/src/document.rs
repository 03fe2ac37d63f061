use std::collections::BTreeMap;

/// Processing state of a document as reported by the backend.
///
/// The declaration order is the display order of the status groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocStatus {
    Processed,
    Processing,
    Pending,
    Failed,
}

impl DocStatus {
    pub const ALL: [DocStatus; 4] = [
        DocStatus::Processed,
        DocStatus::Processing,
        DocStatus::Pending,
        DocStatus::Failed,
    ];

    /// Wire name used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            DocStatus::Processed => "processed",
            DocStatus::Processing => "processing",
            DocStatus::Pending => "pending",
            DocStatus::Failed => "failed",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        DocStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }
}

/// Read-only copy of a backend document record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: String,
    pub status: DocStatus,
    pub file_path: Option<String>,
    pub content_summary: String,
    pub content_length: Option<u64>,
    pub chunks_count: Option<u64>,
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DocumentRecord {
    pub fn new(id: impl Into<String>, status: DocStatus) -> Self {
        Self {
            id: id.into(),
            status,
            file_path: None,
            content_summary: String::new(),
            content_length: None,
            chunks_count: None,
            error: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// True when the backend attached a non-blank error message.
    pub fn has_error(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGroup {
    pub status: DocStatus,
    pub documents: Vec<DocumentRecord>,
}

/// Latest fetched grouping of documents by processing state.
///
/// Groups are kept in [`DocStatus`] order; documents keep the backend order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    groups: Vec<StatusGroup>,
}

impl StatusSnapshot {
    /// Builds a snapshot from raw per-status lists. Absent lists count as
    /// empty; repeated statuses are concatenated in arrival order.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (DocStatus, Option<Vec<DocumentRecord>>)>,
    {
        let mut merged: BTreeMap<DocStatus, Vec<DocumentRecord>> = BTreeMap::new();
        for (status, documents) in groups {
            let Some(documents) = documents else {
                continue;
            };
            merged.entry(status).or_default().extend(documents);
        }
        let groups = merged
            .into_iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(status, documents)| StatusGroup { status, documents })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[StatusGroup] {
        &self.groups
    }

    pub fn documents(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.groups.iter().flat_map(|group| group.documents.iter())
    }

    pub fn count(&self, status: DocStatus) -> usize {
        self.groups
            .iter()
            .find(|group| group.status == status)
            .map_or(0, |group| group.documents.len())
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|group| group.documents.len()).sum()
    }
}

/// Per-status document counts used to detect backend changes between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub processed: usize,
    pub processing: usize,
    pub pending: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn of(snapshot: Option<&StatusSnapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::default();
        };
        Self {
            processed: snapshot.count(DocStatus::Processed),
            processing: snapshot.count(DocStatus::Processing),
            pending: snapshot.count(DocStatus::Pending),
            failed: snapshot.count(DocStatus::Failed),
        }
    }

    pub fn get(&self, status: DocStatus) -> usize {
        match status {
            DocStatus::Processed => self.processed,
            DocStatus::Processing => self.processing,
            DocStatus::Pending => self.pending,
            DocStatus::Failed => self.failed,
        }
    }

    pub fn total(&self) -> usize {
        self.processed + self.processing + self.pending + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, status: DocStatus) -> DocumentRecord {
        DocumentRecord::new(id, status)
    }

    #[test]
    fn groups_follow_status_order_and_keep_document_order() {
        let snapshot = StatusSnapshot::from_groups(vec![
            (
                DocStatus::Failed,
                Some(vec![doc("f1", DocStatus::Failed)]),
            ),
            (
                DocStatus::Processed,
                Some(vec![
                    doc("p2", DocStatus::Processed),
                    doc("p1", DocStatus::Processed),
                ]),
            ),
            (DocStatus::Pending, None),
        ]);

        let ids: Vec<_> = snapshot.documents().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "f1"]);
        assert_eq!(snapshot.groups().len(), 2);
        assert_eq!(snapshot.total(), 3);
    }

    #[test]
    fn counts_treat_missing_groups_as_zero() {
        let snapshot = StatusSnapshot::from_groups(vec![(
            DocStatus::Pending,
            Some(vec![doc("a", DocStatus::Pending)]),
        )]);
        let counts = StatusCounts::of(Some(&snapshot));
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                ..StatusCounts::default()
            }
        );
        assert_eq!(StatusCounts::of(None).total(), 0);
    }

    #[test]
    fn blank_error_is_not_an_error() {
        let mut record = doc("a", DocStatus::Failed);
        assert!(!record.has_error());
        record.error = Some("  ".to_string());
        assert!(!record.has_error());
        record.error = Some("chunking failed".to_string());
        assert!(record.has_error());
    }

    #[test]
    fn status_names_parse_case_insensitively() {
        assert_eq!(DocStatus::parse("PROCESSED"), Some(DocStatus::Processed));
        assert_eq!(DocStatus::parse(" failed "), Some(DocStatus::Failed));
        assert_eq!(DocStatus::parse("archived"), None);
    }
}
