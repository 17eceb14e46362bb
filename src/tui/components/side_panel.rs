// Selected artworks side panel
//
// Lists every selected artwork across all pages in the order they were
// first checked. Entries removed here disappear from the tracker, and the
// table checkbox clears if the row is on screen.

use super::scrollbar::render_scrollbar_raw;
use crate::tui::app::App;
use crate::tui::scroll::FocusablePanel;
use crate::util::truncate_to_width;
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the side panel with the cross-page selection
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused == FocusablePanel::Selected;
    let viewport = area.height.saturating_sub(2) as usize;
    let total = app.selection.len();

    // Keep the cursor entry visible
    let offset = if viewport > 0 && app.side_cursor >= viewport {
        app.side_cursor + 1 - viewport
    } else {
        0
    };

    let items: Vec<ListItem> = app
        .selection
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport)
        .map(|(i, art)| {
            let detail = match (&art.artist_display, art.year_range()) {
                (Some(artist), years) if !years.is_empty() => {
                    format!("{} · {}", artist.lines().next().unwrap_or(""), years)
                }
                (Some(artist), _) => artist.lines().next().unwrap_or("").to_string(),
                (None, years) => years,
            };

            // The title keeps priority; the detail gets whatever columns
            // remain and is trimmed by display width
            let title_text = art.display_title();
            let inner_width = area.width.saturating_sub(2) as usize;
            let remaining = inner_width.saturating_sub(title_text.width() + 2);

            let line = Line::from(vec![
                Span::styled(title_text, Style::default().fg(app.theme.panel_entry)),
                Span::styled(
                    if detail.is_empty() || remaining == 0 {
                        String::new()
                    } else {
                        format!("  {}", truncate_to_width(&detail, remaining))
                    },
                    Style::default().fg(app.theme.panel_detail),
                ),
            ]);

            let mut item = ListItem::new(line);
            if focused && i == app.side_cursor {
                item = item.style(app.theme.cursor_style());
            }
            item
        })
        .collect();

    let title = format!(" Selected ({}) ", total);
    let list = if total == 0 {
        List::new(vec![ListItem::new(Line::from(Span::styled(
            " nothing selected yet ",
            Style::default().fg(app.theme.panel_detail),
        )))])
    } else {
        List::new(items)
    };

    let list = list.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(focused))
            .title(title),
    );

    f.render_widget(list, area);
    render_scrollbar_raw(f, area, total, viewport, offset);
}
