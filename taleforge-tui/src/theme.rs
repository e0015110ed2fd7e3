//! Ember theme tokens for the Taleforge shell.
//!
//! # Color Palette
//! - **Background**: deep charcoal
//! - **Accent**: amber (focus, slider tracks, active route)
//! - **Positive**: sage green (success)
//! - **Warning**: orange
//! - **Muted**: slate (hints, disabled controls)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ember()
    }
}

impl Theme {
    pub const fn ember() -> Self {
        Self {
            background: Color::Rgb(22, 20, 18),
            accent: Color::Rgb(255, 176, 0),
            positive: Color::Rgb(134, 194, 120),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(112, 128, 144),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }
}

const THEME: Theme = Theme::ember();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Active route in the nav bar.
pub fn nav_active() -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(THEME.accent)
        .add_modifier(Modifier::BOLD)
}

/// Fixed slider track treatment. Callers may patch on top of it.
pub fn slider_track() -> Style {
    accent()
}

pub fn slider_label() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn slider_value() -> Style {
    secondary()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(22, 20, 18));
        assert_eq!(theme.accent, Color::Rgb(255, 176, 0));
    }

    #[test]
    fn test_panel_styles_follow_activity() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
        assert!(panel_title(true).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_slider_track_uses_accent() {
        assert_eq!(slider_track().fg, Some(THEME.accent));
    }
}
