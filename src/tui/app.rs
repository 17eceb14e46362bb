// TUI application state
//
// App is the explicitly-owned view state: the current page window, the
// cross-page selection, cursor positions and panel visibility. All updates
// are driven by named events (page-changed, selection-changed,
// remove-requested) processed one at a time on the UI task.

use super::input::InputHandler;
use super::scroll::{FocusablePanel, ScrollState};
use super::theme::{Theme, ThemeKind};
use crate::api::models::Artwork;
use crate::config::Config;
use crate::events::{FetchCommand, GalleryEvent, Stats};
use crate::logging::LogBuffer;
use crate::selection::SelectionSet;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Artwork table with side panel
    #[default]
    Browse,
    /// Help and keybindings
    Help,
}

/// How long a transient notice stays in the status bar
const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Main application state for the TUI
pub struct App {
    /// Rows fetched for the active page (the page window)
    pub artworks: Vec<Artwork>,

    /// 1-based page currently displayed
    pub page: u32,

    /// Total record count reported by the listing API
    pub total: u64,

    /// Rows per page
    pub page_size: u32,

    /// Cross-page selection, unique by id
    pub selection: SelectionSet,

    /// Cursor row within the page window
    pub cursor: usize,

    /// Cursor within the side panel
    pub side_cursor: usize,

    /// Which panel receives navigation input
    pub focused: FocusablePanel,

    /// Side panel visibility toggle
    pub show_side_panel: bool,

    /// Logs panel visibility toggle
    pub show_logs: bool,

    /// Page currently being fetched, if any
    pub loading: Option<u32>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current view being displayed
    pub view: View,

    /// Session counters for the status bar
    pub stats: Stats,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Scroll state for the logs panel
    pub logs_scroll: ScrollState,

    /// Current color theme
    pub theme: Theme,
    pub theme_kind: ThemeKind,

    /// Use theme background or the terminal's own
    pub use_theme_background: bool,

    /// Log buffer shared with the tracing layer
    pub log_buffer: LogBuffer,

    /// Transient status-bar notice (message, shown-at)
    notice: Option<(String, Instant)>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Channel to the fetch task
    command_tx: mpsc::Sender<FetchCommand>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, command_tx: mpsc::Sender<FetchCommand>) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            artworks: Vec::new(),
            page: 1,
            total: 0,
            page_size: config.page_size,
            selection: SelectionSet::new(),
            cursor: 0,
            side_cursor: 0,
            focused: FocusablePanel::default(),
            show_side_panel: true,
            show_logs: false,
            loading: None,
            should_quit: false,
            view: View::default(),
            stats: Stats::default(),
            start_time: Instant::now(),
            logs_scroll: ScrollState::new(),
            theme: theme_kind.theme(),
            theme_kind,
            use_theme_background: config.use_theme_background,
            log_buffer,
            notice: None,
            input_handler: InputHandler::default(),
            command_tx,
        }
    }

    // ── Fetching ────────────────────────────────────────────────────────

    /// Number of pages implied by the total count; 0 until the first load
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64)
    }

    /// Request a page from the fetch task (fire-and-forget).
    ///
    /// Requests are neither de-duplicated nor cancelled; with rapid paging a
    /// slow earlier response can land after a faster later one and win.
    pub fn request_page(&mut self, page: u32) {
        let page = page.max(1);

        // Don't run past the last known page (unknown before first load)
        let last = self.page_count();
        if last > 0 && page as u64 > last {
            return;
        }

        self.loading = Some(page);
        let command = FetchCommand {
            page,
            limit: self.page_size,
        };
        if self.command_tx.try_send(command).is_err() {
            tracing::warn!("Fetch task busy, page {} request dropped", page);
            self.loading = None;
        }
    }

    pub fn next_page(&mut self) {
        self.request_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.request_page(self.page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.request_page(1);
    }

    pub fn last_page(&mut self) {
        let last = self.page_count();
        if last > 0 {
            self.request_page(last as u32);
        }
    }

    /// Apply an event from the fetch task
    pub fn handle_gallery_event(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::PageLoaded {
                page,
                artworks,
                total,
                elapsed,
            } => {
                self.artworks = artworks;
                self.page = page;
                self.total = total;
                self.cursor = self.cursor.min(self.artworks.len().saturating_sub(1));
                if self.loading == Some(page) {
                    self.loading = None;
                }
                self.stats.record_load(elapsed);
                tracing::info!(
                    "Page {}/{} loaded ({} rows)",
                    page,
                    self.page_count(),
                    self.artworks.len()
                );
            }
            GalleryEvent::FetchFailed { page } => {
                // Keep prior rows; the failure is already logged at the
                // fetch boundary
                if self.loading == Some(page) {
                    self.loading = None;
                }
                self.stats.record_failure();
                self.show_notice(format!("Page {} failed to load", page));
            }
        }
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// Ids in the page window that are currently checked
    pub fn checked_ids(&self) -> std::collections::HashSet<u64> {
        self.selection.page_selection(&self.artworks)
    }

    /// Report a new checked set for the visible page to the tracker
    fn apply_page_selection(&mut self, checked_ids: &std::collections::HashSet<u64>) {
        let checked: Vec<Artwork> = self
            .artworks
            .iter()
            .filter(|a| checked_ids.contains(&a.id))
            .cloned()
            .collect();
        self.selection.reconcile(&self.artworks, &checked);
        self.side_cursor = self.side_cursor.min(self.selection.len().saturating_sub(1));
    }

    /// Toggle the checkbox of the cursor row
    pub fn toggle_cursor_row(&mut self) {
        let Some(art) = self.artworks.get(self.cursor) else {
            return;
        };
        let id = art.id;

        let mut checked = self.checked_ids();
        if !checked.insert(id) {
            checked.remove(&id);
        }
        self.apply_page_selection(&checked);
    }

    /// Check every row on the current page
    pub fn select_page(&mut self) {
        let checked = self.artworks.iter().map(|a| a.id).collect();
        self.apply_page_selection(&checked);
    }

    /// Uncheck every row on the current page (out-of-page entries survive)
    pub fn clear_page(&mut self) {
        self.apply_page_selection(&std::collections::HashSet::new());
    }

    /// Remove the side panel's cursor entry from the selection
    pub fn remove_side_entry(&mut self) {
        if let Some(art) = self.selection.get(self.side_cursor) {
            let id = art.id;
            self.selection.remove(id);
            self.side_cursor = self.side_cursor.min(self.selection.len().saturating_sub(1));
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn cursor_up(&mut self) {
        match self.focused {
            FocusablePanel::Table => self.cursor = self.cursor.saturating_sub(1),
            FocusablePanel::Selected => self.side_cursor = self.side_cursor.saturating_sub(1),
            FocusablePanel::Logs => self.logs_scroll.scroll_up(),
        }
    }

    pub fn cursor_down(&mut self) {
        match self.focused {
            FocusablePanel::Table => {
                if self.cursor + 1 < self.artworks.len() {
                    self.cursor += 1;
                }
            }
            FocusablePanel::Selected => {
                if self.side_cursor + 1 < self.selection.len() {
                    self.side_cursor += 1;
                }
            }
            FocusablePanel::Logs => self.logs_scroll.scroll_down(),
        }
    }

    pub fn cursor_top(&mut self) {
        match self.focused {
            FocusablePanel::Table => self.cursor = 0,
            FocusablePanel::Selected => self.side_cursor = 0,
            FocusablePanel::Logs => self.logs_scroll.scroll_to_top(),
        }
    }

    pub fn cursor_bottom(&mut self) {
        match self.focused {
            FocusablePanel::Table => self.cursor = self.artworks.len().saturating_sub(1),
            FocusablePanel::Selected => self.side_cursor = self.selection.len().saturating_sub(1),
            FocusablePanel::Logs => self.logs_scroll.scroll_to_bottom(),
        }
    }

    /// Cycle panel focus, skipping hidden panels
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next(self.show_side_panel, self.show_logs);
    }

    pub fn toggle_side_panel(&mut self) {
        self.show_side_panel = !self.show_side_panel;
        if !self.show_side_panel && self.focused == FocusablePanel::Selected {
            self.focused = FocusablePanel::Table;
        }
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == FocusablePanel::Logs {
            self.focused = FocusablePanel::Table;
        }
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    // ── Status bar ──────────────────────────────────────────────────────

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some((message.into(), Instant::now()));
    }

    /// Current notice, if it hasn't expired
    pub fn notice(&self) -> Option<&str> {
        match &self.notice {
            Some((msg, at)) if at.elapsed() < NOTICE_DURATION => Some(msg),
            _ => None,
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    /// The artwork under the table cursor
    pub fn cursor_artwork(&self) -> Option<&Artwork> {
        self.artworks.get(self.cursor)
    }

    // ── Input delegation ────────────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: u64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("Artwork {}", id)),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    fn test_app() -> (App, mpsc::Receiver<FetchCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let app = App::new(&Config::default(), LogBuffer::new(), tx);
        (app, rx)
    }

    fn loaded(page: u32, ids: &[u64], total: u64) -> GalleryEvent {
        GalleryEvent::PageLoaded {
            page,
            artworks: ids.iter().map(|&id| art(id)).collect(),
            total,
            elapsed: Duration::from_millis(50),
        }
    }

    #[test]
    fn page_loaded_replaces_window_and_derives_pager() {
        let (mut app, _rx) = test_app();
        app.handle_gallery_event(loaded(1, &[1, 2, 3], 140));

        assert_eq!(app.artworks.len(), 3);
        assert_eq!(app.total, 140);
        // 140 records at 12 per page -> 12 pages
        assert_eq!(app.page_count(), 12);
    }

    #[test]
    fn fetch_failure_preserves_rows_and_selection() {
        let (mut app, _rx) = test_app();
        app.handle_gallery_event(loaded(1, &[1, 2, 3], 36));
        app.toggle_cursor_row(); // select artwork 1

        app.handle_gallery_event(GalleryEvent::FetchFailed { page: 2 });

        assert_eq!(app.artworks.len(), 3);
        assert!(app.selection.contains(1));
        assert_eq!(app.stats.fetch_failures, 1);
        assert!(app.notice().is_some());
    }

    #[test]
    fn selection_survives_simulated_page_turns() {
        let (mut app, _rx) = test_app();

        app.handle_gallery_event(loaded(1, &[1, 2, 3], 72));
        app.cursor = 1;
        app.toggle_cursor_row(); // check artwork 2

        app.handle_gallery_event(loaded(2, &[4, 5, 6], 72));
        assert!(app.selection.contains(2));
        assert!(app.checked_ids().is_empty()); // nothing checked on page 2

        app.handle_gallery_event(loaded(1, &[1, 2, 3], 72));
        assert!(app.checked_ids().contains(&2)); // re-checked on revisit

        // Unchecking on the revisited page drops it
        app.cursor = 1;
        app.toggle_cursor_row();
        assert!(!app.selection.contains(2));
        assert!(app.selection.is_empty());
    }

    #[test]
    fn select_and_clear_page_leave_other_pages_untouched() {
        let (mut app, _rx) = test_app();

        app.handle_gallery_event(loaded(1, &[1, 2, 3], 72));
        app.select_page();
        assert_eq!(app.selection.len(), 3);

        app.handle_gallery_event(loaded(2, &[4, 5], 72));
        app.select_page();
        assert_eq!(app.selection.len(), 5);

        app.clear_page(); // clears only page 2 entries
        assert_eq!(app.selection.len(), 3);
        assert!(app.selection.contains(1));
        assert!(!app.selection.contains(4));
    }

    #[test]
    fn remove_side_entry_targets_cursor_and_clamps() {
        let (mut app, _rx) = test_app();
        app.handle_gallery_event(loaded(1, &[1, 2, 3], 36));
        app.select_page();

        app.side_cursor = 2;
        app.remove_side_entry();
        assert_eq!(app.selection.len(), 2);
        assert_eq!(app.side_cursor, 1); // clamped to the new last entry

        app.remove_side_entry();
        app.remove_side_entry();
        assert!(app.selection.is_empty());
        app.remove_side_entry(); // no-op on empty panel
    }

    #[test]
    fn request_page_clamps_to_known_range() {
        let (mut app, mut rx) = test_app();
        app.handle_gallery_event(loaded(1, &[1], 24)); // 2 pages

        app.request_page(3); // beyond the last page
        assert!(rx.try_recv().is_err());

        app.request_page(2);
        assert_eq!(rx.try_recv().unwrap(), FetchCommand { page: 2, limit: 12 });
    }

    #[test]
    fn stale_response_overwrites_window_unmitigated() {
        // Documents the known race: a slow page 1 response arriving after
        // page 2 wins the window
        let (mut app, _rx) = test_app();
        app.handle_gallery_event(loaded(2, &[4, 5, 6], 72));
        app.handle_gallery_event(loaded(1, &[1, 2, 3], 72));
        assert_eq!(app.page, 1);
        assert_eq!(app.artworks[0].id, 1);
    }
}
