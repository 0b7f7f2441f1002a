// src/theme.rs

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the UI. Dark is the default; the persisted preference
/// is the string "light" or "dark".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn base(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::White).bg(Color::Black),
            Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
        }
    }

    pub fn border(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::DarkGray),
            Theme::Light => Style::default().fg(Color::Gray),
        }
    }

    pub fn meta(self) -> Style {
        Style::default().fg(match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        })
    }

    pub fn sent(self) -> Style {
        Style::default().fg(match self {
            Theme::Dark => Color::LightGreen,
            Theme::Light => Color::Green,
        })
    }

    pub fn received(self) -> Style {
        Style::default().fg(match self {
            Theme::Dark => Color::LightBlue,
            Theme::Light => Color::Blue,
        })
    }

    pub fn highlight(self) -> Style {
        match self {
            Theme::Dark => Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            Theme::Light => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn input(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::White),
            Theme::Light => Style::default().fg(Color::Black),
        }
    }
}
