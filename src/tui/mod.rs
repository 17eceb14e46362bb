// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Receiving fetch-task events and updating the display

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::events::{FetchCommand, GalleryEvent};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scroll::FocusablePanel;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, requests the first page, runs the event loop and
/// restores the terminal when done.
pub async fn run_tui(
    mut event_rx: mpsc::Receiver<GalleryEvent>,
    command_tx: mpsc::Sender<FetchCommand>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer, command_tx);
    app.request_page(1);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!: keyboard/mouse input,
/// a periodic tick for redraws, and fetch-task events. Fetch events are
/// applied in arrival order; a stale slow response can overwrite a newer
/// page (see App::request_page).
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<GalleryEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redraws (notices expire, logs stream in)
            _ = tick_interval.tick() => {}

            // Fetch task events
            Some(gallery_event) = event_rx.recv() => {
                app.handle_gallery_event(gallery_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {
            // Debounce and hold-to-repeat via InputHandler
            if !app.handle_key_press(key_event.code) {
                return;
            }
            dispatch_key(app, key_event.code);
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

fn dispatch_key(app: &mut App, key: KeyCode) {
    // Help overlay absorbs everything except its own dismissal
    if app.view == View::Help {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => app.view = View::Browse,
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.view = View::Help,

        // Cursor movement within the focused panel
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char('g') => app.cursor_top(),
        KeyCode::Char('G') => app.cursor_bottom(),

        // Page turns
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Home => app.first_page(),
        KeyCode::End => app.last_page(),
        KeyCode::Char('r') => {
            let page = app.page;
            app.request_page(page);
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => match app.focused {
            FocusablePanel::Table => app.toggle_cursor_row(),
            FocusablePanel::Selected => app.remove_side_entry(),
            FocusablePanel::Logs => {}
        },
        KeyCode::Char('a') => app.select_page(),
        KeyCode::Char('c') => app.clear_page(),
        KeyCode::Char('x') => {
            if app.focused == FocusablePanel::Selected {
                app.remove_side_entry();
            }
        }

        // Panels and appearance
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Char('s') => app.toggle_side_panel(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('t') => {
            app.next_theme();
            app.show_notice(format!("Theme: {}", app.theme_kind.name()));
        }

        // Copy selection (or the cursor row when nothing is selected)
        KeyCode::Char('y') => copy_selection(app),

        _ => {}
    }
}

/// Handle mouse input: scroll wheel moves the focused panel's cursor
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.cursor_up(),
        MouseEventKind::ScrollDown => app.cursor_down(),
        _ => {}
    }
}

fn copy_selection(app: &mut App) {
    let text = if app.selection.is_empty() {
        match app.cursor_artwork() {
            Some(art) => artwork_line(art),
            None => return,
        }
    } else {
        app.selection
            .iter()
            .map(artwork_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.show_notice("✓ Copied to clipboard"),
        Err(err) => {
            tracing::warn!("Clipboard copy failed: {:#}", err);
            app.show_notice("✗ Failed to copy");
        }
    }
}

fn artwork_line(art: &crate::api::models::Artwork) -> String {
    let mut line = art.display_title();
    if let Some(artist) = art.artist_display.as_deref() {
        line.push_str(" | ");
        line.push_str(artist.lines().next().unwrap_or(""));
    }
    let years = art.year_range();
    if !years.is_empty() {
        line.push_str(" | ");
        line.push_str(&years);
    }
    line
}
