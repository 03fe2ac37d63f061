use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use docpanel_core::i18n::{tr, Locale, Text};
use docpanel_core::{
    AppViewModel, DialogView, DocStatus, DocumentDetailView, DocumentRowView, Tab,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;

use super::constants::{PLACEHOLDER, TIME_FORMAT};
use super::layout::{self, PanelLayout};
use super::theme;

const STATUS_COLUMN_WIDTH: u16 = 14;
const LABEL_COLUMN_WIDTH: u16 = 37;
const TIME_COLUMN_WIDTH: u16 = 19;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let area = frame.area();
    let layout = PanelLayout::compute(area);

    render_header(frame, layout.header, view);
    match view.tab {
        Tab::Documents => render_documents(frame, layout.body, view),
        Tab::Status => render_status(frame, layout.body, view),
    }
    frame.render_widget(
        Paragraph::new(tr(view.locale, Text::KeyHints)).style(theme::key_hint()),
        layout.footer,
    );

    if let Some(dialog) = &view.dialog {
        render_dialog(frame, area, view.locale, dialog);
    }
    render_notifications(frame, area, view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let locale = view.locale;
    let [tabs_area, badge_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(44)]).areas(area);

    let titles = Tab::ALL.iter().map(|tab| match tab {
        Tab::Documents => tr(locale, Text::TabDocuments),
        Tab::Status => tr(locale, Text::TabStatus),
    });
    let tabs = Tabs::new(titles)
        .select(view.tab.index())
        .style(theme::muted())
        .highlight_style(theme::title())
        .block(theme::block_focused(tr(locale, Text::AppTitle)));
    frame.render_widget(tabs, tabs_area);

    let (health_text, health_color) = if view.health {
        (tr(locale, Text::HealthHealthy), theme::SUCCESS)
    } else {
        (tr(locale, Text::HealthUnreachable), theme::ERROR)
    };
    let pipeline_text = if view.pipeline_busy {
        tr(locale, Text::PipelineBusy)
    } else {
        tr(locale, Text::PipelineIdle)
    };
    let badges = Line::from(vec![
        Span::styled("● ", Style::default().fg(health_color)),
        Span::styled(health_text, theme::text()),
        Span::styled("  ", theme::muted()),
        Span::styled(pipeline_text, theme::muted()),
    ]);
    frame.render_widget(
        Paragraph::new(badges)
            .alignment(Alignment::Right)
            .block(theme::block("")),
        badge_area,
    );
}

fn render_documents(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let locale = view.locale;
    let title = format!(
        "{} ({})  {}",
        tr(locale, Text::TabDocuments),
        view.total_documents,
        counts_summary(view)
    );

    if view.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(tr(locale, Text::EmptyTitle).bold()),
            Line::from(Span::styled(tr(locale, Text::EmptyHint), theme::muted())),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(theme::block(&title)),
            area,
        );
        return;
    }

    let (table_area, detail_area) = layout::split_documents(area, view.detail.is_some());

    let name_column = if view.show_file_name {
        Text::ColumnFileName
    } else {
        Text::ColumnId
    };
    let header = Row::new(
        [
            name_column,
            Text::ColumnSummary,
            Text::ColumnStatus,
            Text::ColumnLength,
            Text::ColumnChunks,
            Text::ColumnCreated,
            Text::ColumnUpdated,
        ]
        .map(|key| Cell::from(tr(locale, key))),
    )
    .style(theme::heading());

    let rows = view.rows.iter().map(|row| document_row(row, locale));
    let widths = [
        Constraint::Length(LABEL_COLUMN_WIDTH),
        Constraint::Min(16),
        Constraint::Length(STATUS_COLUMN_WIDTH),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(TIME_COLUMN_WIDTH),
        Constraint::Length(TIME_COLUMN_WIDTH),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::block(&title))
        .row_highlight_style(theme::selected_row())
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(view.selected);
    frame.render_stateful_widget(table, table_area, &mut table_state);

    if let (Some(detail), Some(detail_area)) = (&view.detail, detail_area) {
        render_detail(frame, detail_area, locale, detail);
    }
}

fn document_row(row: &DocumentRowView, locale: Locale) -> Row<'static> {
    let mut status = vec![Span::styled(
        status_label(locale, row.status),
        Style::default().fg(theme::status_color(row.status)),
    )];
    if row.has_error {
        status.push(Span::styled(" ⚠", Style::default().fg(theme::WARNING)));
    }

    Row::new(vec![
        Cell::from(row.label.clone()),
        Cell::from(row.summary.clone()),
        Cell::from(Line::from(status)),
        Cell::from(optional_number(row.content_length)),
        Cell::from(optional_number(row.chunks_count)),
        Cell::from(format_timestamp(&row.created_at)),
        Cell::from(format_timestamp(&row.updated_at)),
    ])
    .style(theme::text())
}

/// Full path, summary and error of the selected row.
fn render_detail(frame: &mut Frame, area: Rect, locale: Locale, detail: &DocumentDetailView) {
    let mut lines = vec![labelled(
        tr(locale, Text::DetailFilePath),
        detail.file_path.as_deref().unwrap_or(PLACEHOLDER),
    )];
    lines.push(labelled(tr(locale, Text::DetailSummary), &detail.summary));
    if let Some(error) = &detail.error {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", tr(locale, Text::DetailError)), theme::muted()),
            Span::styled(error.clone(), Style::default().fg(theme::ERROR)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::block(&detail.id)),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let locale = view.locale;
    let unknown = tr(locale, Text::StatusUnknown);
    let info = view.health_info.as_ref();
    let working_directory = info.and_then(|i| i.working_directory.as_ref());
    let input_directory = info.and_then(|i| i.input_directory.as_ref());
    let llm_model = info.and_then(|i| i.llm_model.as_ref());
    let embedding_model = info.and_then(|i| i.embedding_model.as_ref());

    let health = if view.health {
        Span::styled(tr(locale, Text::HealthHealthy), Style::default().fg(theme::SUCCESS))
    } else {
        Span::styled(tr(locale, Text::HealthUnreachable), Style::default().fg(theme::ERROR))
    };
    let mut lines = vec![
        Line::from(health),
        Line::from(if view.pipeline_busy {
            tr(locale, Text::PipelineBusy)
        } else {
            tr(locale, Text::PipelineIdle)
        }),
        Line::from(""),
        labelled(
            tr(locale, Text::StatusWorkingDirectory),
            or_unknown(working_directory, unknown),
        ),
        labelled(
            tr(locale, Text::StatusInputDirectory),
            or_unknown(input_directory, unknown),
        ),
        labelled(tr(locale, Text::StatusLlmModel), or_unknown(llm_model, unknown)),
        labelled(
            tr(locale, Text::StatusEmbeddingModel),
            or_unknown(embedding_model, unknown),
        ),
        Line::from(""),
        Line::from(counts_summary(view)),
    ];
    if let Some(error) = &view.health_error {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", tr(locale, Text::StatusLastError)), theme::muted()),
            Span::styled(error.clone(), Style::default().fg(theme::ERROR)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::block(tr(locale, Text::TabStatus))),
        area,
    );
}

fn render_dialog(frame: &mut Frame, area: Rect, locale: Locale, dialog: &DialogView) {
    let popup = layout::centered_rect(60, layout::DIALOG_HEIGHT, area);
    let (title, lines) = match dialog {
        DialogView::Upload { path } => (
            tr(locale, Text::UploadTitle),
            vec![
                Line::from(tr(locale, Text::UploadPrompt)),
                Line::from(vec![
                    Span::styled(path.clone(), theme::text()),
                    Span::styled("_", theme::title()),
                ]),
            ],
        ),
        DialogView::Clear => (
            tr(locale, Text::ClearTitle),
            vec![Line::from(Span::styled(
                tr(locale, Text::ClearPrompt),
                Style::default().fg(theme::WARNING),
            ))],
        ),
    };

    let mut lines = lines;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        tr(locale, Text::DialogHint),
        theme::key_hint(),
    )));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::block_focused(title)),
        popup,
    );
}

fn render_notifications(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if view.notifications.is_empty() {
        return;
    }
    let strip = layout::notifications_area(area, view.notifications.len());
    let lines: Vec<Line> = view
        .notifications
        .iter()
        .map(|n| {
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(theme::notification_color(n.level))),
                Span::styled(n.message.clone(), theme::text()),
            ])
        })
        .collect();

    frame.render_widget(Clear, strip);
    frame.render_widget(Paragraph::new(lines), strip);
}

fn labelled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value, theme::text()),
    ])
}

fn or_unknown<'a>(value: Option<&'a String>, unknown: &'a str) -> &'a str {
    value.map(String::as_str).unwrap_or(unknown)
}

fn counts_summary(view: &AppViewModel) -> String {
    DocStatus::ALL
        .iter()
        .map(|status| {
            format!(
                "{} {}",
                status_label(view.locale, *status),
                view.counts.get(*status)
            )
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

fn status_label(locale: Locale, status: DocStatus) -> &'static str {
    let key = match status {
        DocStatus::Processed => Text::StatusProcessed,
        DocStatus::Processing => Text::StatusProcessing,
        DocStatus::Pending => Text::StatusPending,
        DocStatus::Failed => Text::StatusFailed,
    };
    tr(locale, key)
}

fn optional_number(value: Option<u64>) -> String {
    value
        .map(format_with_commas)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Backend timestamps in local time; unparseable values are shown verbatim.
fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(TIME_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        if let Some(local) = Local.from_local_datetime(&naive).earliest() {
            return local.format(TIME_FORMAT).to_string();
        }
    }
    raw.to_string()
}
