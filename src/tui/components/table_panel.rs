// Artwork table component
//
// The main browsing surface: one row per artwork in the page window, a
// checkbox column reflecting the cross-page selection, and columns that
// collapse as the terminal narrows.

use crate::api::models::Artwork;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::FocusablePanel;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Render the artwork table for the current page window
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let focused = app.focused == FocusablePanel::Table;
    let checked = app.checked_ids();

    let header_cells: Vec<&str> = match bp {
        Breakpoint::Compact => vec!["", "Title", "Artist"],
        Breakpoint::Normal => vec!["", "Title", "Artist", "Origin", "Date"],
        Breakpoint::Wide => vec!["", "Title", "Artist", "Origin", "Date", "Inscriptions"],
    };
    let header = Row::new(header_cells)
        .style(
            Style::default()
                .fg(app.theme.header)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .artworks
        .iter()
        .enumerate()
        .map(|(i, art)| {
            let is_checked = checked.contains(&art.id);
            let mut style = Style::default().fg(app.theme.fg);
            if is_checked {
                style = Style::default().fg(app.theme.row_checked);
            }
            if i == app.cursor && focused {
                style = app.theme.cursor_style();
            }
            Row::new(row_cells(art, is_checked, bp)).style(style)
        })
        .collect();

    let widths = match bp {
        Breakpoint::Compact => vec![
            Constraint::Length(3),
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ],
        Breakpoint::Normal => vec![
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Length(11),
        ],
        Breakpoint::Wide => vec![
            Constraint::Length(3),
            Constraint::Percentage(28),
            Constraint::Percentage(24),
            Constraint::Percentage(16),
            Constraint::Length(11),
            Constraint::Percentage(32),
        ],
    };

    let title = format!(
        " Artworks ({}/{} checked) ",
        checked.len(),
        app.artworks.len()
    );

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(focused))
            .title(title),
    );

    f.render_widget(table, area);
}

fn row_cells(art: &Artwork, is_checked: bool, bp: Breakpoint) -> Vec<Cell<'static>> {
    let checkbox = if is_checked { CHECKED } else { UNCHECKED };

    let mut cells = vec![
        Cell::from(checkbox),
        Cell::from(art.display_title()),
        Cell::from(artist_line(art)),
    ];

    if bp.at_least(Breakpoint::Normal) {
        cells.push(Cell::from(
            art.place_of_origin.clone().unwrap_or_default(),
        ));
        cells.push(Cell::from(art.year_range()));
    }

    if bp.at_least(Breakpoint::Wide) {
        cells.push(Cell::from(
            art.inscriptions.clone().unwrap_or_default(),
        ));
    }

    cells
}

/// Artist displays are often multi-line ("Claude Monet\nFrench, 1840-1926");
/// keep the first line for the table
fn artist_line(art: &Artwork) -> String {
    art.artist_display
        .as_deref()
        .map(|a| a.lines().next().unwrap_or("").to_string())
        .unwrap_or_default()
}
