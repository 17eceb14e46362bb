//! Scrollbar rendering helper
//!
//! One scrollbar function shared by every panel, driven by `ScrollState`.

use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a vertical scrollbar on the right edge of a panel.
///
/// Only renders if content exceeds the viewport.
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState) {
    if !scroll.needs_scrollbar() {
        return;
    }

    render_scrollbar_raw(f, area, scroll.total(), scroll.viewport(), scroll.offset());
}

/// Render a scrollbar from raw values, for panels without a `ScrollState`
pub fn render_scrollbar_raw(f: &mut Frame, area: Rect, total: usize, viewport: usize, offset: usize) {
    if total <= viewport {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);

    // ScrollbarState wants: content_length (how much can scroll) and position
    let content_length = total.saturating_sub(viewport);
    let mut scrollbar_state = ScrollbarState::new(content_length).position(offset);

    f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
