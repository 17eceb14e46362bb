// Scroll state shared by the log panel and side panel
//
// Each panel owns its scroll state; App just renders and routes input.
// Auto-follow keeps streaming content (logs) pinned to the bottom until the
// user scrolls, and re-engages when they scroll back down.

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line/item index at top of viewport)
    offset: usize,

    /// Total number of items/lines in content
    total: usize,

    /// Number of items/lines visible in viewport
    viewport: usize,

    /// Whether to auto-follow new content (scroll to bottom)
    pub auto_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Create scroll state with auto-follow disabled (manual scroll)
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions.
    /// Call this each render frame with current sizes.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Scroll up by one unit; disables auto-follow (user took control)
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    /// Scroll down by one unit; re-enables auto-follow at the bottom
    pub fn scroll_down(&mut self) {
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }

        if self.total > 0 && self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom (and enable auto-follow)
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Panels that can be focused for input routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Artwork table (default focus)
    #[default]
    Table,
    /// Selected artworks side panel
    Selected,
    /// System logs panel
    Logs,
}

impl FocusablePanel {
    /// Next panel in the focus cycle, skipping hidden ones
    pub fn next(self, side_visible: bool, logs_visible: bool) -> Self {
        let mut panel = self;
        loop {
            panel = match panel {
                FocusablePanel::Table => FocusablePanel::Selected,
                FocusablePanel::Selected => FocusablePanel::Logs,
                FocusablePanel::Logs => FocusablePanel::Table,
            };
            let visible = match panel {
                FocusablePanel::Table => true,
                FocusablePanel::Selected => side_visible,
                FocusablePanel::Logs => logs_visible,
            };
            if visible {
                return panel;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5); // At bottom

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10); // Still at bottom
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        assert!(scroll.auto_follow);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_scroll_to_bottom_enables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        scroll.scroll_up();
        assert!(!scroll.auto_follow);

        scroll.scroll_to_bottom();
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_focus_cycle_skips_hidden_panels() {
        let table = FocusablePanel::Table;
        assert_eq!(table.next(true, true), FocusablePanel::Selected);
        assert_eq!(table.next(false, true), FocusablePanel::Logs);
        assert_eq!(table.next(false, false), FocusablePanel::Table);
        assert_eq!(
            FocusablePanel::Selected.next(true, false),
            FocusablePanel::Table
        );
    }
}
