// Logs panel component
//
// Displays entries captured by the tracing layer, color-coded by level,
// with auto-follow scrolling for streaming output.

use super::scrollbar::render_scrollbar;
use crate::logging::LogEntry;
use crate::tui::app::App;
use crate::tui::scroll::FocusablePanel;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the logs panel
///
/// The scroll state lives on App; this syncs its dimensions with the
/// current buffer contents each frame and renders the visible slice.
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    let focused = app.focused == FocusablePanel::Logs;

    app.logs_scroll.update_dimensions(entries.len(), height);

    let (start, end) = app.logs_scroll.visible_range();
    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(app.theme.log_style(entry.level))
        })
        .collect();

    let title = if app.logs_scroll.auto_follow {
        " Logs "
    } else {
        " Logs [scroll] "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(focused))
            .title(title),
    );

    f.render_widget(list, area);
    render_scrollbar(f, area, &app.logs_scroll);
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}
