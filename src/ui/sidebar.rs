use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Draws the conversation list: name plus a message-count meta line, with
/// the current conversation highlighted.
pub fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Conversations")
        .border_style(app.theme.border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for conv in app.registry.conversations() {
        let is_current = app.registry.current_id() == Some(&conv.id);
        let marker = if is_current { "› " } else { "  " };
        let name_style = if is_current {
            app.theme.highlight()
        } else {
            app.theme.base()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, name_style),
            Span::styled(conv.name.clone(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {} messages", conv.messages.len()),
            app.theme.meta(),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
