use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::{search_bar, truncate};
use crate::app::App;
use crate::pane::ListPane;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    search_bar::render(
        frame,
        chunks[0],
        app.search_input.as_deref(),
        app.users.query(),
        "Search GitHub Users",
    );
    render_results(frame, app, chunks[1]);
    super::render_pagination(frame, &app.users, chunks[2]);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let pane = &app.users;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Users ({}) ", pane.items().len()));

    if pane.items().is_empty() {
        let empty = Paragraph::new(empty_message(pane))
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let w = area.width.saturating_sub(2) as usize;
    let fixed = 27; // login(25) + spaces(2)
    let flex = w.saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = pane
        .items()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let style = if i == pane.selected() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(format!("{:<25}", truncate(&user.login, 25)), style),
                Span::raw("  "),
                Span::styled(
                    format!("{:<flex$}", truncate(&user.avatar_url, flex)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(pane.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Empty-region copy: a hint until a search has come back empty, then the
/// not-found message, verbatim.
fn empty_message<T>(pane: &ListPane<T>) -> &'static str {
    if pane.has_searched() && !pane.is_loading() {
        "Users with your search param not found"
    } else {
        "Press / to search GitHub users"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PaneId;
    use crate::types::{Page, UserSummary};

    #[test]
    fn empty_message_follows_search_state() {
        let mut pane: ListPane<UserSummary> = ListPane::new(PaneId::UsersList, 20);
        assert_eq!(empty_message(&pane), "Press / to search GitHub users");

        let seq = pane.begin_search("nobody");
        // Still loading: the hint stays up, not a premature not-found.
        assert_eq!(empty_message(&pane), "Press / to search GitHub users");

        pane.apply_page(Page::complete(Vec::new(), Some(0)), seq);
        assert_eq!(empty_message(&pane), "Users with your search param not found");
    }
}
