//! Colors and styles for the panel. Widgets take styles from here rather than
//! inline `Color` literals.

use docpanel_core::{DocStatus, NotificationLevel};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

pub const PRIMARY: Color = Color::Rgb(0x3B, 0x82, 0xF6);
pub const ACCENT: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const BG_SELECTED: Color = Color::Rgb(0x1E, 0x29, 0x3B);

pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);

pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const WARNING: Color = Color::Rgb(0xEA, 0xB3, 0x08);
pub const INFO: Color = Color::Rgb(0x38, 0xBD, 0xF8);

/// Completed is green, processing blue, pending amber and failed red.
pub fn status_color(status: DocStatus) -> Color {
    match status {
        DocStatus::Processed => SUCCESS,
        DocStatus::Processing => INFO,
        DocStatus::Pending => WARNING,
        DocStatus::Failed => ERROR,
    }
}

pub fn notification_color(level: NotificationLevel) -> Color {
    match level {
        NotificationLevel::Info => INFO,
        NotificationLevel::Success => SUCCESS,
        NotificationLevel::Error => ERROR,
    }
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Table header row.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn selected_row() -> Style {
    Style::default().bg(BG_SELECTED).add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
}

pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY))
}
