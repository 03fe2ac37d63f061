//! Static message catalog for user-visible text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Accepts tags such as `en`, `en-US`, `zh` or `zh_CN`.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

/// Catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    TabDocuments,
    TabStatus,
    ColumnId,
    ColumnFileName,
    ColumnSummary,
    ColumnStatus,
    ColumnLength,
    ColumnChunks,
    ColumnCreated,
    ColumnUpdated,
    StatusProcessed,
    StatusProcessing,
    StatusPending,
    StatusFailed,
    EmptyTitle,
    EmptyHint,
    DetailFilePath,
    DetailSummary,
    DetailError,
    LoadFailed,
    PollFailed,
    ScanFailed,
    ClearFailed,
    UploadFailed,
    UploadTitle,
    UploadPrompt,
    ClearTitle,
    ClearPrompt,
    DialogHint,
    HealthHealthy,
    HealthUnreachable,
    PipelineBusy,
    PipelineIdle,
    StatusWorkingDirectory,
    StatusInputDirectory,
    StatusLlmModel,
    StatusEmbeddingModel,
    StatusLastError,
    StatusUnknown,
    KeyHints,
}

/// Looks up a catalog entry.
pub fn tr(locale: Locale, key: Text) -> &'static str {
    match locale {
        Locale::En => en(key),
        Locale::Zh => zh(key),
    }
}

/// Localized failure text followed by the underlying error.
pub fn tr_error(locale: Locale, key: Text, error: &str) -> String {
    format!("{}: {}", tr(locale, key), error)
}

fn en(key: Text) -> &'static str {
    match key {
        Text::AppTitle => "Document Manager",
        Text::TabDocuments => "Documents",
        Text::TabStatus => "Status",
        Text::ColumnId => "ID",
        Text::ColumnFileName => "File Name",
        Text::ColumnSummary => "Summary",
        Text::ColumnStatus => "Status",
        Text::ColumnLength => "Length",
        Text::ColumnChunks => "Chunks",
        Text::ColumnCreated => "Created",
        Text::ColumnUpdated => "Updated",
        Text::StatusProcessed => "Completed",
        Text::StatusProcessing => "Processing",
        Text::StatusPending => "Pending",
        Text::StatusFailed => "Failed",
        Text::EmptyTitle => "No Documents",
        Text::EmptyHint => "There are no uploaded documents yet. Press u to upload or s to scan.",
        Text::DetailFilePath => "Path",
        Text::DetailSummary => "Summary",
        Text::DetailError => "Error",
        Text::LoadFailed => "Failed to load documents",
        Text::PollFailed => "Failed to get scan progress",
        Text::ScanFailed => "Failed to scan documents",
        Text::ClearFailed => "Failed to clear documents",
        Text::UploadFailed => "Failed to upload document",
        Text::UploadTitle => "Upload Document",
        Text::UploadPrompt => "Path of the file to upload:",
        Text::ClearTitle => "Clear Documents",
        Text::ClearPrompt => "Remove all documents from the backend?",
        Text::DialogHint => "Enter: confirm  Esc: cancel",
        Text::HealthHealthy => "Connected",
        Text::HealthUnreachable => "Backend unreachable",
        Text::PipelineBusy => "Pipeline busy",
        Text::PipelineIdle => "Pipeline idle",
        Text::StatusWorkingDirectory => "Working directory",
        Text::StatusInputDirectory => "Input directory",
        Text::StatusLlmModel => "LLM model",
        Text::StatusEmbeddingModel => "Embedding model",
        Text::StatusLastError => "Last error",
        Text::StatusUnknown => "unknown",
        Text::KeyHints => {
            "s:scan  r:refresh  f:file name  u:upload  c:clear  j/k:select  Tab:switch  q:quit"
        }
    }
}

fn zh(key: Text) -> &'static str {
    match key {
        Text::AppTitle => "文档管理",
        Text::TabDocuments => "文档",
        Text::TabStatus => "状态",
        Text::ColumnId => "ID",
        Text::ColumnFileName => "文件名",
        Text::ColumnSummary => "摘要",
        Text::ColumnStatus => "状态",
        Text::ColumnLength => "长度",
        Text::ColumnChunks => "分块",
        Text::ColumnCreated => "创建时间",
        Text::ColumnUpdated => "更新时间",
        Text::StatusProcessed => "已完成",
        Text::StatusProcessing => "处理中",
        Text::StatusPending => "等待中",
        Text::StatusFailed => "失败",
        Text::EmptyTitle => "无文档",
        Text::EmptyHint => "还没有上传任何文档。按 u 上传或按 s 扫描。",
        Text::DetailFilePath => "路径",
        Text::DetailSummary => "摘要",
        Text::DetailError => "错误",
        Text::LoadFailed => "加载文档失败",
        Text::PollFailed => "获取扫描进度失败",
        Text::ScanFailed => "扫描文档失败",
        Text::ClearFailed => "清空文档失败",
        Text::UploadFailed => "上传文档失败",
        Text::UploadTitle => "上传文档",
        Text::UploadPrompt => "要上传的文件路径：",
        Text::ClearTitle => "清空文档",
        Text::ClearPrompt => "确定从后端删除所有文档吗？",
        Text::DialogHint => "Enter：确认  Esc：取消",
        Text::HealthHealthy => "已连接",
        Text::HealthUnreachable => "后端不可达",
        Text::PipelineBusy => "流水线繁忙",
        Text::PipelineIdle => "流水线空闲",
        Text::StatusWorkingDirectory => "工作目录",
        Text::StatusInputDirectory => "输入目录",
        Text::StatusLlmModel => "LLM 模型",
        Text::StatusEmbeddingModel => "嵌入模型",
        Text::StatusLastError => "最近错误",
        Text::StatusUnknown => "未知",
        Text::KeyHints => "s:扫描  r:刷新  f:文件名  u:上传  c:清空  j/k:选择  Tab:切换  q:退出",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags_use_primary_subtag() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("zh_CN"), Some(Locale::Zh));
        assert_eq!(Locale::parse("ZH"), Some(Locale::Zh));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn error_text_appends_cause() {
        assert_eq!(
            tr_error(Locale::En, Text::ScanFailed, "http status 500"),
            "Failed to scan documents: http status 500"
        );
    }
}
