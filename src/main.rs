mod action;
mod app;
mod auth;
mod backend;
mod config;
mod error;
mod event;
mod github;
mod history;
mod pagination;
mod pane;
mod tui;
mod types;
mod ui;

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::{Action, TabKind};
use crate::app::App;
use crate::backend::Backend;
use crate::config::Config;
use crate::event::Event;
use crate::github::GitHub;
use crate::tui::EventHandler;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TabArg {
    Users,
    Repos,
}

impl From<TabArg> for TabKind {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Users => TabKind::Users,
            TabArg::Repos => TabKind::Repos,
        }
    }
}

/// Search GitHub users and repositories from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Tab to open on start
    #[arg(long, value_enum)]
    tab: Option<TabArg>,

    /// Jump straight to a user's profile
    #[arg(long, value_name = "LOGIN")]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Restore the terminal before the panic message prints
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();
    let config = Config::load();
    let token = auth::resolve_token(&config);
    if token.is_none() {
        tracing::info!("no API token found, using unauthenticated rate limits");
    }
    let github = GitHub::new(config.api_host.clone(), token)?;

    let result = run(Arc::new(github), &config, cli).await;

    tui::restore()?;
    result
}

async fn run(
    backend: Arc<dyn Backend>,
    config: &Config,
    cli: Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = tui::init()?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut app = App::new(backend, action_tx.clone(), config.per_page);
    app.deep_link(cli.tab.map(Into::into), cli.user);

    let tick_rate = Duration::from_millis(250);
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(tick_rate, render_rate);

    let mut title = app.title.clone();
    tui::set_title(&title)?;

    loop {
        tokio::select! {
            Some(event) = events.next() => {
                if event.is_quit() {
                    break;
                }

                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
                if app.title != title {
                    title = app.title.clone();
                    tui::set_title(&title)?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
