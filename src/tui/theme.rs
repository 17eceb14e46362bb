// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime.
// Each theme defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    /// Warm palette fitting the subject matter (default)
    #[default]
    Gallery,
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Gallery,
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Resolve a configured theme name, falling back to the default
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => ThemeKind::Dark,
            "light" => ThemeKind::Light,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Gallery,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Gallery => "Gallery",
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Gallery => Theme::gallery(),
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Table rows
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub row_checked: Color,
    pub header: Color,

    // Side panel
    pub panel_entry: Color,
    pub panel_detail: Color,

    // Notices
    pub error: Color,
    pub loading: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gallery()
    }
}

impl Theme {
    /// Gallery theme (default): warm golds against a dark ground
    pub fn gallery() -> Self {
        Self {
            bg: Color::Rgb(24, 20, 18),
            fg: Color::Rgb(230, 222, 210),
            border: Color::Rgb(110, 95, 75),
            border_focused: Color::Rgb(212, 175, 55),

            title: Color::Rgb(212, 175, 55),
            status_bar: Color::Rgb(160, 150, 130),

            cursor_bg: Color::Rgb(62, 52, 40),
            cursor_fg: Color::Rgb(240, 220, 170),
            row_checked: Color::Rgb(212, 175, 55),
            header: Color::Rgb(190, 160, 110),

            panel_entry: Color::Rgb(230, 222, 210),
            panel_detail: Color::Rgb(150, 140, 125),

            error: Color::Rgb(205, 92, 92),
            loading: Color::Rgb(176, 196, 222),

            log_error: Color::Rgb(205, 92, 92),
            log_warn: Color::Rgb(218, 165, 32),
            log_info: Color::Rgb(176, 196, 222),
            log_debug: Color::Rgb(128, 118, 105),
            log_trace: Color::Rgb(90, 82, 72),
        }
    }

    /// Dark theme on default terminal colors
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            cursor_bg: Color::DarkGray,
            cursor_fg: Color::Yellow,
            row_checked: Color::Yellow,
            header: Color::Cyan,

            panel_entry: Color::White,
            panel_detail: Color::Gray,

            error: Color::Red,
            loading: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            cursor_bg: Color::LightBlue,
            cursor_fg: Color::Black,
            row_checked: Color::Rgb(184, 134, 11), // Dark goldenrod
            header: Color::Blue,

            panel_entry: Color::Black,
            panel_detail: Color::DarkGray,

            error: Color::Red,
            loading: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208), // Frost

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),

            cursor_bg: Color::Rgb(67, 76, 94),
            cursor_fg: Color::Rgb(235, 203, 139),
            row_checked: Color::Rgb(235, 203, 139),
            header: Color::Rgb(129, 161, 193),

            panel_entry: Color::Rgb(236, 239, 244),
            panel_detail: Color::Rgb(129, 161, 193),

            error: Color::Rgb(191, 97, 106),
            loading: Color::Rgb(129, 161, 193),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style, highlighted when the panel has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Cursor row style
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor_fg)
            .bg(self.cursor_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Error notice style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for a log level
    pub fn log_style(&self, level: crate::logging::LogLevel) -> Style {
        use crate::logging::LogLevel;
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_wraps_around() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
    }

    #[test]
    fn unknown_name_falls_back_to_gallery() {
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("Nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Gallery);
    }
}
