//! Reusable TUI components
//!
//! Each component is a render function taking the frame, its area and the
//! app state. Components never mutate the selection or page window; input
//! handling lives on `App`.

pub mod formatters;
pub mod logs_panel;
pub mod scrollbar;
pub mod side_panel;
pub mod status_bar;
pub mod table_panel;
pub mod title_bar;
