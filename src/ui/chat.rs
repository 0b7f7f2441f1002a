use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::{Message, Sender};
use crate::theme::Theme;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Draws the message view, the typing indicator, and the input line for the
/// current conversation.
pub fn draw_chat(f: &mut Frame, area: Rect, app: &mut App) {
    let title = app
        .registry
        .current()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Chat".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(app.theme.border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(1), // Typing indicator
                Constraint::Length(1), // Input
            ]
            .as_ref(),
        )
        .split(inner);

    draw_messages(f, chunks[0], app);
    draw_typing_indicator(f, chunks[1], app);
    draw_input(f, chunks[2], app);
}

fn draw_messages(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let mut lines: Vec<Line> = Vec::new();
    if let Some(conv) = app.registry.current() {
        for message in &conv.messages {
            lines.extend(render_message(message, theme, area));
        }
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    // Clamp in place so scroll_to_bottom can simply request the maximum.
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph.scroll((app.chat_scroll, 0)), area);
}

fn render_message(message: &Message, theme: Theme, area: Rect) -> Vec<Line<'static>> {
    let (prefix, style) = match message.sender {
        Sender::Sent => ("You: ", theme.sent()),
        Sender::Received => ("Bot: ", theme.received()),
    };
    let stamp = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();

    let wrap_width = (area.width as usize).saturating_sub(prefix.len()).max(1);
    let mut lines = Vec::new();
    for (i, piece) in wrap(&message.text, wrap_width).iter().enumerate() {
        if i == 0 {
            lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), style),
                Span::styled(piece.to_string(), style),
                Span::styled(format!("  {stamp}"), theme.meta()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(" ".repeat(prefix.len()), style),
                Span::styled(piece.to_string(), style),
            ]));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(prefix.to_string(), style)));
    }
    lines
}

fn draw_typing_indicator(f: &mut Frame, area: Rect, app: &mut App) {
    let frame_idx = app.spinner_frame;
    if !app.bot_typing() {
        return;
    }
    let spinner = SPINNER_FRAMES[frame_idx % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner.to_string(), app.theme.meta()),
        Span::styled(" Bot is typing...", app.theme.meta()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_input(f: &mut Frame, area: Rect, app: &App) {
    let prefix = "→ ";
    let line = Line::from(vec![
        Span::styled(prefix, app.theme.meta()),
        Span::styled(app.input.clone(), app.theme.input()),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(Paragraph::new(line).scroll((0, scroll_offset)), area);

    let cursor_x = area.x + 2 + text_width - scroll_offset;
    f.set_cursor_position((cursor_x, area.y));
}
