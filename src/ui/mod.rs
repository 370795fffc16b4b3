mod repos_list;
mod search_bar;
mod user_detail;
mod users_list;

use chrono::{DateTime, Utc};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;

use crate::action::TabKind;
use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tab_bar(frame, app, chunks[1]);

    match app.screen {
        Screen::Root => render_root(frame, chunks[2]),
        Screen::Users => users_list::render(frame, app, chunks[2]),
        Screen::Repos => repos_list::render(frame, app, chunks[2]),
        Screen::UserDetail => user_detail::render(frame, app, chunks[2]),
    }

    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        format!("hubseek - {}", app.title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles = vec![
        format!("[1] {}", TabKind::Users.label()),
        format!("[2] {}", TabKind::Repos.label()),
    ];

    let mut tabs = Tabs::new(titles)
        .block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .title(" Tabs "),
        )
        .style(Style::default().fg(Color::Gray));

    // No tab is marked active on the bare root view or inside a profile.
    if let Some(active) = app.active_tab() {
        tabs = tabs
            .select(match active {
                TabKind::Users => 0,
                TabKind::Repos => 1,
            })
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
    }

    frame.render_widget(tabs, area);
}

fn render_root(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Search GitHub users and repositories",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1/2 or Tab: pick a tab    /: search    q: quit"),
    ];
    let hint = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(hint, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error {
        Line::from(vec![Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )])
    } else if app.is_loading() {
        Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )])
    } else if let Some(status) = &app.status {
        Line::from(vec![Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )])
    } else {
        let help = if app.search_input.is_some() {
            "type to edit | Enter: search | Esc: cancel"
        } else {
            match app.screen {
                Screen::Root => "1/2: tabs | q: quit",
                Screen::Users => {
                    "/: search | j/k: nav | Enter: profile | h/l: page | [/]: history | o: open | y: yank | q: quit"
                }
                Screen::Repos => {
                    "/: search | j/k: nav | h/l: page | [/]: history | o: open | y: yank | q: quit"
                }
                Screen::UserDetail => {
                    "b/q: back to users | j/k: nav | h/l: page | o: open | y: yank"
                }
            }
        };
        Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

/// Footer with prev/next affordances. Shown only when the current page is
/// full; a short page is the last one and gets no controls at all.
fn render_pagination<T>(frame: &mut Frame, pane: &crate::pane::ListPane<T>, area: Rect) {
    use crate::pagination::Direction as PageDirection;

    if !pane.has_pagination_controls() {
        return;
    }

    let arrow = |enabled: bool, text: &str| {
        Span::styled(
            text.to_string(),
            if enabled {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )
    };

    let position = match pane.cursor().total_count() {
        Some(total) => format!("  offset {} of {}  ", pane.cursor().page(), total),
        None => format!("  offset {}  ", pane.cursor().page()),
    };

    let line = Line::from(vec![
        arrow(pane.cursor().can_go(PageDirection::Prev), "← Prev"),
        Span::styled(position, Style::default().fg(Color::Gray)),
        arrow(pane.cursor().can_go(PageDirection::Next), "Next →"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate with a trailing ellipsis to fit a column.
fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        format!("{}...", &s[..max.saturating_sub(3)])
    } else {
        s.to_string()
    }
}

fn format_age(time: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(time);
    if delta.num_days() >= 365 {
        format!("{}y", delta.num_days() / 365)
    } else if delta.num_days() >= 1 {
        format!("{}d", delta.num_days())
    } else if delta.num_hours() >= 1 {
        format!("{}h", delta.num_hours())
    } else {
        format!("{}m", delta.num_minutes().max(0))
    }
}
