use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::{format_age, search_bar, truncate};
use crate::app::App;
use crate::pane::ListPane;
use crate::types::RepoSummary;

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
        app.repos.query(),
        "Search Repositories",
    );

    render_pane(
        frame,
        &app.repos,
        chunks[1],
        " Repositories ",
        empty_message(&app.repos),
    );
    super::render_pagination(frame, &app.repos, chunks[2]);
}

/// Repo list renderer shared between the Repositories tab and the repos
/// region of a user's profile.
pub fn render_pane(
    frame: &mut Frame,
    pane: &ListPane<RepoSummary>,
    area: Rect,
    title: &str,
    empty_message: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}({}) ", title, pane.items().len()));

    if pane.items().is_empty() {
        let empty = Paragraph::new(empty_message.to_string())
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let w = area.width.saturating_sub(2) as usize;
    let fixed = 45; // name(30) + space(1) + stars(7) + spaces(2) + age(4) + space(1)
    let flex = w.saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = pane
        .items()
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            let style = if i == pane.selected() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let age = repo
                .updated_at
                .map(format_age)
                .unwrap_or_else(|| "-".to_string());

            // Description fills the flex column; repos without one show the
            // clone URL instead.
            let detail = repo.description.as_deref().unwrap_or(&repo.clone_url);

            let line = Line::from(vec![
                Span::styled(format!("{:<30}", truncate(&repo.full_name, 30)), style),
                Span::raw(" "),
                Span::styled(
                    format!("★ {:>5}", repo.stars),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(format!("{:>4}", age), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(
                    format!("{:<flex$}", truncate(detail, flex)),
                    Style::default().fg(Color::Gray),
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

/// Empty-region copy for the Repositories tab: a hint until a search has
/// come back empty, then the not-found message, verbatim.
fn empty_message(pane: &ListPane<RepoSummary>) -> &'static str {
    if pane.has_searched() && !pane.is_loading() {
        "Repositories with your search param not found"
    } else {
        "Press / to search repositories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PaneId;
    use crate::types::Page;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn repo(full_name: &str, description: Option<&str>) -> RepoSummary {
        RepoSummary {
            full_name: full_name.to_string(),
            clone_url: format!("https://github.com/{}.git", full_name),
            description: description.map(String::from),
            stars: 0,
            updated_at: None,
        }
    }

    fn render_to_text(pane: &ListPane<RepoSummary>, empty: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| render_pane(frame, pane, frame.area(), " Repositories ", empty))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_message_follows_search_state() {
        let mut pane: ListPane<RepoSummary> = ListPane::new(PaneId::ReposList, 20);
        assert_eq!(empty_message(&pane), "Press / to search repositories");

        let seq = pane.begin_search("nothing");
        assert_eq!(empty_message(&pane), "Press / to search repositories");

        pane.apply_page(Page::complete(Vec::new(), Some(0)), seq);
        assert_eq!(
            empty_message(&pane),
            "Repositories with your search param not found"
        );
    }

    #[test]
    fn empty_pane_renders_the_message_verbatim() {
        let mut pane: ListPane<RepoSummary> = ListPane::new(PaneId::ReposList, 20);
        let seq = pane.begin_search("nothing");
        pane.apply_page(Page::complete(Vec::new(), Some(0)), seq);

        let text = render_to_text(&pane, empty_message(&pane));
        assert!(text.contains("Repositories with your search param not found"));
    }

    #[test]
    fn rows_show_description_or_fall_back_to_clone_url() {
        let mut pane: ListPane<RepoSummary> = ListPane::new(PaneId::ReposList, 20);
        let seq = pane.begin_search("x");
        pane.apply_page(
            Page::complete(
                vec![
                    repo("a/described", Some("a tiny parser")),
                    repo("b/bare", None),
                ],
                Some(2),
            ),
            seq,
        );

        let text = render_to_text(&pane, "");
        assert!(text.contains("a tiny parser"));
        assert!(text.contains("github.com/b/bare"));
    }
}
