//! Frame regions: tab header, body, optional detail pane and key-hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const DETAIL_HEIGHT: u16 = 6;
/// Bodies shorter than this drop the detail pane.
pub const MIN_BODY_WITH_DETAIL: u16 = 12;
pub const DIALOG_HEIGHT: u16 = 7;
pub const NOTIFICATION_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl PanelLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
        Self {
            header: rows[0],
            body: rows[1],
            footer: rows[2],
        }
    }
}

/// Splits the documents body into table and detail pane.
pub fn split_documents(body: Rect, with_detail: bool) -> (Rect, Option<Rect>) {
    if !with_detail || body.height < MIN_BODY_WITH_DETAIL {
        return (body, None);
    }
    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(DETAIL_HEIGHT)]).split(body);
    (rows[0], Some(rows[1]))
}

/// A box `percent_x` wide and `height` rows tall in the middle of `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let rows = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height.min(area.height)),
        Constraint::Min(0),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(rows[1])[1]
}

/// Top-right strip for `count` one-line notifications, below the header.
pub fn notifications_area(area: Rect, count: usize) -> Rect {
    let width = NOTIFICATION_WIDTH.min(area.width.saturating_sub(2));
    let height = u16::try_from(count)
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(HEADER_HEIGHT));
    let x = area.x + area.width.saturating_sub(width + 1);
    Rect::new(x, area.y + HEADER_HEIGHT, width, height)
}
