// Frame layout and view dispatch
//
// Splits the frame into title, content, optional logs and status bar,
// and renders whichever view is active.

use super::app::{App, View};
use super::components::{logs_panel, side_panel, status_bar, table_panel, title_bar};
use super::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole frame
pub fn draw(f: &mut Frame, app: &mut App) {
    if app.use_theme_background {
        let bg = Block::default().style(Style::default().bg(app.theme.bg));
        f.render_widget(bg, f.area());
    }

    let logs_height = if app.show_logs { 10 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_content(f, chunks[1], app);
    if app.show_logs {
        logs_panel::render(f, chunks[2], app);
    }
    status_bar::render(f, chunks[3], app);

    if app.view == View::Help {
        render_help(f, app);
    }
}

fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    // The side panel needs room; below Normal the table takes everything
    if app.show_side_panel && bp.at_least(Breakpoint::Normal) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        table_panel::render(f, halves[0], app);
        side_panel::render(f, halves[1], app);
    } else {
        table_panel::render(f, area, app);
    }
}

/// Centered help overlay with all keybindings
fn render_help(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 22, f.area());

    let key_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.fg);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::styled(desc, text_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("↑/↓ j/k", "move cursor"),
        entry("g/G", "jump to first/last row"),
        entry("←/→ p/n", "previous/next page"),
        entry("Home/End", "first/last page"),
        entry("Space", "toggle row selection"),
        entry("a / c", "select / clear the page"),
        entry("x", "remove entry (side panel)"),
        entry("Tab", "cycle panel focus"),
        entry("s / l", "toggle side panel / logs"),
        entry("y", "copy selection to clipboard"),
        entry("t", "cycle theme"),
        entry("r", "reload current page"),
        entry("q / Esc", "quit / close help"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focused))
            .title(" Help ")
            .title_style(app.theme.title_style()),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// A rect of fixed size centered in `r`, clamped to fit
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
