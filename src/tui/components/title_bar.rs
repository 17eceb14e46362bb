// Title bar component
//
// Renders the app title with the current page position and loading indicator.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name
/// - Page position ("page 3/12") once the first page has loaded
/// - Loading indicator while a fetch is in flight
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let pager = if app.page_count() > 0 {
        format!(" ──── page {}/{}", app.page, app.page_count())
    } else {
        String::new()
    };

    let loading = match app.loading {
        Some(page) => format!("  ⟳ loading page {}", page),
        None => String::new(),
    };

    let title_text = format!(" 🖼 Artdeck{}{}", pager, loading);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(ratatui::text::Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
