use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// One-line search box. While editing it shows the in-progress input with a
/// cursor mark; otherwise the stored query, or the placeholder when none.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    editing: Option<&str>,
    stored_query: &str,
    placeholder: &str,
) {
    let (line, border_color) = match editing {
        Some(input) => (
            Line::from(vec![
                Span::raw(input.to_string()),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ]),
            Color::Yellow,
        ),
        None if stored_query.is_empty() => (
            Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Color::DarkGray,
        ),
        None => (Line::from(stored_query.to_string()), Color::DarkGray),
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search "),
    );
    frame.render_widget(input, area);
}
