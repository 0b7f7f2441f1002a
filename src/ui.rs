// src/ui.rs

pub mod chat;
pub mod footer;
pub mod modal;
pub mod sidebar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

use crate::app::{App, Mode};

/// Renders the whole frame: sidebar, message view, footer, and any modal
/// overlay on top.
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    f.render_widget(Block::default().style(app.theme.base()), size);

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)].as_ref())
        .split(vertical_chunks[0]);

    sidebar::draw_sidebar(f, horizontal_chunks[0], app);
    chat::draw_chat(f, horizontal_chunks[1], app);
    footer::draw_footer(f, vertical_chunks[1], app);

    match app.mode.clone() {
        Mode::Chat => {}
        Mode::Confirm(action) => {
            modal::draw_confirm(f, size, app.theme, action.message());
        }
        Mode::Rename { buffer, .. } => {
            modal::draw_rename(f, size, app.theme, &buffer);
        }
        Mode::QuitConfirm => {
            modal::draw_confirm(f, size, app.theme, "Quit parley?");
        }
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
