use crate::DocumentRecord;

/// Name length used outside the document table.
pub const DEFAULT_NAME_LIMIT: usize = 20;
/// Name length used inside the document table.
pub const TABLE_NAME_LIMIT: usize = 35;

const ELLIPSIS: char = '…';

/// Short display name for a document: the last segment of its source path,
/// truncated to `max_len` characters, or the document id when the path is
/// absent or yields no usable segment.
pub fn display_file_name(record: &DocumentRecord, max_len: usize) -> String {
    let Some(path) = record.file_path.as_deref() else {
        return record.id.clone();
    };
    if path.trim().is_empty() {
        return record.id.clone();
    }

    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if segment.trim().is_empty() {
        return record.id.clone();
    }

    truncate_with_ellipsis(segment, max_len)
}

fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push(ELLIPSIS);
    out
}
