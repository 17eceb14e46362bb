// Status bar component
//
// Renders session statistics at the bottom: uptime, loads, failures,
// average fetch latency, selection count.

use super::formatters::format_number;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with session statistics
///
/// Adapts to terminal width:
/// - Wide: full format with the record total
/// - Narrow: compact icon-based format
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.stats;
    let bp = Breakpoint::from_width(area.width);

    let failures = if stats.fetch_failures > 0 {
        format!(" ✗ {}", stats.fetch_failures)
    } else {
        String::new()
    };

    let status_text = if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ 📄 {}{} │ ~{}ms │ ☑ {}",
            app.uptime(),
            stats.pages_loaded,
            failures,
            stats.avg_fetch_time().as_millis(),
            app.selection.len(),
        )
    } else {
        format!(
            " {} │ 📄 {} pages{} │ ~{}ms │ ☑ {} selected │ {} artworks",
            app.uptime(),
            stats.pages_loaded,
            failures,
            stats.avg_fetch_time().as_millis(),
            app.selection.len(),
            format_number(app.total),
        )
    };

    // Transient notices (fetch failures, clipboard results) take priority
    let (text, style) = match app.notice() {
        Some(msg) => (format!(" {}", msg), app.theme.error_style()),
        None => (status_text, Style::default().fg(app.theme.status_bar)),
    };

    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
