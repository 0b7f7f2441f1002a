use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

/// Draws the footer with key hints for whatever owns the keyboard.
pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.mode {
        Mode::Chat => {
            "Enter send · ↑/↓ switch chat · ^N new · ^R rename · ^D delete · ^L clear · ^X clear all · ^T theme · Esc quit"
        }
        Mode::Confirm(_) | Mode::QuitConfirm => "Press 'y' to confirm or 'n' to cancel.",
        Mode::Rename { .. } => "Enter to save, Esc to cancel.",
    };

    let footer = Paragraph::new(hints)
        .style(app.theme.meta())
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
