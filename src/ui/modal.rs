use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;
use crate::ui::centered_rect;

/// Draws a centered yes/no confirmation box over the main view.
pub fn draw_confirm(f: &mut Frame, screen: Rect, theme: Theme, message: &str) {
    let area = centered_rect(44, 5, screen);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Confirm")
        .border_style(theme.highlight())
        .style(theme.base());
    f.render_widget(block, area);

    let text = format!("{message}\n\nPress 'y' to confirm or 'n' to cancel.");
    let paragraph = Paragraph::new(text)
        .style(theme.base())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(
        paragraph,
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        },
    );
}

/// Draws the rename prompt with its editable buffer.
pub fn draw_rename(f: &mut Frame, screen: Rect, theme: Theme, buffer: &str) {
    let area = centered_rect(44, 5, screen);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Rename chat")
        .border_style(theme.highlight())
        .style(theme.base());
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(buffer.to_string(), theme.input())),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to save, Esc to cancel.",
            theme.meta(),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left),
        Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        },
    );
}
