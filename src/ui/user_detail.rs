use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::repos_list;
use crate::app::App;
use crate::types::UserProfile;

const NO_REPOS_MESSAGE: &str = "User does not have repository";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(user) = &app.user else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let back = Paragraph::new(Line::from(vec![
        Span::styled("← ", Style::default().fg(Color::Cyan)),
        Span::raw("Back To Users (b)"),
    ]));
    frame.render_widget(back, chunks[0]);

    // The profile and repos regions fill in independently as their fetches
    // land; a missing profile paints nothing in its region.
    if let Some(profile) = &user.profile {
        render_profile(frame, profile, chunks[1]);
    }

    let title = format!(" {} repositories ", user.username);
    repos_list::render_pane(frame, &user.repos, chunks[2], &title, NO_REPOS_MESSAGE);
    super::render_pagination(frame, &user.repos, chunks[3]);
}

fn render_profile(frame: &mut Frame, profile: &UserProfile, area: Rect) {
    let field = |label: &str, value: &Option<String>| {
        Line::from(vec![
            Span::styled(
                format!("{:<10}", label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(value.clone().unwrap_or_default()),
        ])
    };

    let display_name = profile.name.clone().unwrap_or_else(|| profile.login.clone());
    let lines = vec![
        Line::from(vec![
            Span::styled(
                display_name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  @{}", profile.login),
                Style::default().fg(Color::Gray),
            ),
        ]),
        field("BIO", &profile.bio),
        field("Blog", &profile.blog),
        field("Company", &profile.company),
        field("Location", &profile.location),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
