use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::action::{Action, PaneId, TabKind};
use crate::backend::Backend;
use crate::event::Event;
use crate::history::{History, Location, NavState};
use crate::pagination::Direction;
use crate::pane::ListPane;
use crate::types::{RepoSummary, UserProfile, UserSummary};

const ROOT_TITLE: &str = "GitHub Data Search";
const USER_TITLE: &str = "User info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Root,       // Bare landing view, no tab selected yet
    Users,      // Global user search
    Repos,      // Global repository search
    UserDetail, // Profile overlay reached from the users list
}

/// Whether a view transition writes to the navigation history, and how.
/// Replaying a popped entry must not write again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavMode {
    Push,
    Replace,
    Silent,
}

/// The profile overlay: a fresh repos pane per opened user, plus the profile
/// fields once their independent fetch lands.
pub struct UserDetail {
    pub username: String,
    pub profile: Option<UserProfile>,
    pub repos: ListPane<RepoSummary>,
    profile_seq: u64,
    profile_loading: bool,
}

impl UserDetail {
    fn new(username: String, per_page: u64) -> Self {
        Self {
            username,
            profile: None,
            repos: ListPane::new(PaneId::UserRepos, per_page),
            profile_seq: 0,
            profile_loading: false,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub users: ListPane<UserSummary>,
    pub repos: ListPane<RepoSummary>,
    pub user: Option<UserDetail>,
    /// Search box contents while editing; `None` when the box is idle.
    pub search_input: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
    pub title: String,
    pub should_quit: bool,
    history: History,
    per_page: u64,
    backend: Arc<dyn Backend>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        backend: Arc<dyn Backend>,
        action_tx: mpsc::UnboundedSender<Action>,
        per_page: u64,
    ) -> Self {
        Self {
            screen: Screen::Root,
            users: ListPane::new(PaneId::UsersList, per_page),
            repos: ListPane::new(PaneId::ReposList, per_page),
            user: None,
            search_input: None,
            error: None,
            status: None,
            title: ROOT_TITLE.to_string(),
            should_quit: false,
            history: History::new(),
            per_page,
            backend,
            action_tx,
        }
    }

    /// Apply deep-link arguments before the first render: `--tab` selects a
    /// tab, `--user` jumps straight into a profile.
    pub fn deep_link(&mut self, tab: Option<TabKind>, user: Option<String>) {
        if let Some(kind) = tab {
            self.activate_tab(kind, NavMode::Push);
        }
        if let Some(username) = user {
            if self.history.current().is_none() {
                self.history.push(NavState::tab(TabKind::Users));
                self.screen = Screen::Users;
            }
            self.open_user(username, NavMode::Replace);
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Init | Event::Tick | Event::Render | Event::Resize => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        // Search box editing captures everything until submit or cancel.
        if self.search_input.is_some() {
            return match key.code {
                KeyCode::Enter => Action::SearchSubmit,
                KeyCode::Esc => Action::SearchCancel,
                KeyCode::Backspace => Action::SearchBackspace,
                KeyCode::Char(c) => Action::SearchInput(c),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.screen == Screen::UserDetail {
                    Action::Back
                } else {
                    Action::Quit
                }
            }
            KeyCode::Char('b') if self.screen == Screen::UserDetail => Action::Back,
            KeyCode::Char('1') => Action::SwitchTab(TabKind::Users),
            KeyCode::Char('2') => Action::SwitchTab(TabKind::Repos),
            KeyCode::Tab => match self.screen {
                Screen::Repos => Action::SwitchTab(TabKind::Users),
                _ => Action::SwitchTab(TabKind::Repos),
            },
            KeyCode::Char('/') => match self.screen {
                Screen::Users | Screen::Repos => Action::EnterSearch,
                _ => Action::None,
            },
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('h') | KeyCode::Left => Action::Paginate(Direction::Prev),
            KeyCode::Char('l') | KeyCode::Right => Action::Paginate(Direction::Next),
            KeyCode::Char('[') | KeyCode::Backspace => Action::HistoryBack,
            KeyCode::Char(']') => Action::HistoryForward,
            KeyCode::Char('o') => Action::OpenInBrowser,
            KeyCode::Char('y') => Action::YankUrl,
            KeyCode::Enter => {
                if self.screen == Screen::Users {
                    match self.users.selected_item() {
                        Some(user) => Action::OpenUser(user.login.clone()),
                        None => Action::None,
                    }
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        if self.error.is_some() && !matches!(action, Action::Quit | Action::Error(_)) {
            self.error = None;
        }
        self.status = None;

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => {
                if self.screen == Screen::UserDetail {
                    self.back_to_users();
                }
            }
            Action::HistoryBack => {
                if let Some(state) = self.history.back() {
                    self.apply_nav_state(state);
                }
            }
            Action::HistoryForward => {
                if let Some(state) = self.history.forward() {
                    self.apply_nav_state(state);
                }
            }

            Action::SwitchTab(kind) => {
                self.activate_tab(kind, NavMode::Push);
            }
            Action::OpenUser(username) => {
                // Replace, not push: the users-tab entry keeps its spot so
                // history back lands before the list, never inside it.
                self.open_user(username, NavMode::Replace);
            }

            Action::ScrollUp => match self.screen {
                Screen::Users => self.users.select_up(),
                Screen::Repos => self.repos.select_up(),
                Screen::UserDetail => {
                    if let Some(user) = &mut self.user {
                        user.repos.select_up();
                    }
                }
                Screen::Root => {}
            },
            Action::ScrollDown => match self.screen {
                Screen::Users => self.users.select_down(),
                Screen::Repos => self.repos.select_down(),
                Screen::UserDetail => {
                    if let Some(user) = &mut self.user {
                        user.repos.select_down();
                    }
                }
                Screen::Root => {}
            },

            Action::EnterSearch => {
                self.search_input = Some(String::new());
            }
            Action::SearchInput(c) => {
                if let Some(input) = &mut self.search_input {
                    input.push(c);
                }
            }
            Action::SearchBackspace => {
                if let Some(input) = &mut self.search_input {
                    input.pop();
                }
            }
            Action::SearchCancel => {
                self.search_input = None;
            }
            Action::SearchSubmit => {
                if let Some(query) = self.search_input.take() {
                    self.submit_search(query);
                }
            }

            Action::Paginate(dir) => match self.screen {
                Screen::Users => {
                    if let Some(seq) = self.users.begin_paginate(dir) {
                        self.spawn_search_users(seq);
                    }
                }
                Screen::Repos => {
                    if let Some(seq) = self.repos.begin_paginate(dir) {
                        self.spawn_search_repos(seq);
                    }
                }
                Screen::UserDetail => {
                    if let Some(user) = &mut self.user {
                        if let Some(seq) = user.repos.begin_paginate(dir) {
                            let username = user.username.clone();
                            let page = user.repos.cursor().page();
                            self.spawn_user_repos(username, page, seq);
                        }
                    }
                }
                Screen::Root => {}
            },

            Action::OpenInBrowser => {
                if let Some(url) = self.context_html_url() {
                    if let Err(e) = open::that(&url) {
                        self.error = Some(format!("Could not open browser: {}", e));
                    } else {
                        self.status = Some(format!("Opened {}", url));
                    }
                }
            }
            Action::YankUrl => {
                if let Some(url) = self.context_yank_url() {
                    match arboard::Clipboard::new().and_then(|mut c| c.set_text(url.clone())) {
                        Ok(()) => self.status = Some(format!("Copied {}", url)),
                        Err(e) => self.error = Some(format!("Clipboard error: {}", e)),
                    }
                }
            }

            Action::UsersPageLoaded { page, seq } => {
                self.users.apply_page(page, seq);
            }
            Action::ReposPageLoaded { page, seq } => {
                self.repos.apply_page(page, seq);
            }
            Action::UserReposPageLoaded {
                username,
                page,
                seq,
            } => match &mut self.user {
                Some(user) if user.username == username => {
                    user.repos.apply_page(page, seq);
                }
                _ => {
                    tracing::debug!(%username, "dropping repos for a closed overlay");
                }
            },
            Action::ProfileLoaded {
                username,
                profile,
                seq,
            } => match &mut self.user {
                Some(user) if user.username == username && seq == user.profile_seq => {
                    user.profile_loading = false;
                    // The repos endpoint reports no total; the profile's
                    // public repo count is the pagination bound.
                    user.repos.set_total(profile.public_repos);
                    user.profile = Some(*profile);
                }
                _ => {
                    tracing::debug!(%username, "dropping profile for a closed overlay");
                }
            },

            Action::Error(msg) => {
                self.error = Some(msg);
                self.abort_loads();
            }
            Action::None => {}
        }
    }

    pub fn is_loading(&self) -> bool {
        self.users.is_loading()
            || self.repos.is_loading()
            || self
                .user
                .as_ref()
                .is_some_and(|u| u.repos.is_loading() || u.profile_loading)
    }

    pub fn active_tab(&self) -> Option<TabKind> {
        match self.screen {
            Screen::Users => Some(TabKind::Users),
            Screen::Repos => Some(TabKind::Repos),
            Screen::Root | Screen::UserDetail => None,
        }
    }

    fn activate_tab(&mut self, kind: TabKind, mode: NavMode) {
        self.user = None;
        self.search_input = None;
        self.screen = match kind {
            TabKind::Users => Screen::Users,
            TabKind::Repos => Screen::Repos,
        };
        self.title = kind.title().to_string();
        self.record_nav(NavState::tab(kind), mode);
    }

    fn open_user(&mut self, username: String, mode: NavMode) {
        self.search_input = None;
        self.record_nav(NavState::user(&username), mode);
        self.screen = Screen::UserDetail;
        self.title = USER_TITLE.to_string();

        let mut detail = UserDetail::new(username.clone(), self.per_page);
        detail.profile_seq = 1;
        detail.profile_loading = true;
        let repos_seq = detail.repos.begin_refresh();
        self.user = Some(detail);

        self.spawn_profile(username.clone(), 1);
        self.spawn_user_repos(username, 0, repos_seq);
    }

    /// Back out of the profile overlay. Replaces the current history entry
    /// rather than pushing; the users pane's query and cursor are untouched.
    fn back_to_users(&mut self) {
        self.user = None;
        self.screen = Screen::Users;
        self.title = TabKind::Users.title().to_string();
        self.record_nav(NavState::tab(TabKind::Users), NavMode::Replace);
    }

    fn apply_nav_state(&mut self, state: NavState) {
        match state.location {
            Location::Tab(kind) => self.activate_tab(kind, NavMode::Silent),
            Location::User { username } => self.open_user(username, NavMode::Silent),
        }
    }

    fn record_nav(&mut self, state: NavState, mode: NavMode) {
        match mode {
            NavMode::Push => self.history.push(state),
            NavMode::Replace => self.history.replace(state),
            NavMode::Silent => {}
        }
    }

    /// Route a submitted query to the pane whose tab is active. The other
    /// tab's pane keeps its own query and results.
    fn submit_search(&mut self, query: String) {
        match self.screen {
            Screen::Users => {
                let seq = self.users.begin_search(&query);
                self.spawn_search_users(seq);
            }
            Screen::Repos => {
                let seq = self.repos.begin_search(&query);
                self.spawn_search_repos(seq);
            }
            Screen::Root | Screen::UserDetail => {}
        }
    }

    fn context_html_url(&self) -> Option<String> {
        match self.screen {
            Screen::Users => self.users.selected_item().map(UserSummary::html_url),
            Screen::Repos => self
                .repos
                .selected_item()
                .map(|r| format!("https://github.com/{}", r.full_name)),
            Screen::UserDetail => {
                let user = self.user.as_ref()?;
                match user.repos.selected_item() {
                    Some(repo) => Some(format!("https://github.com/{}", repo.full_name)),
                    None => Some(format!("https://github.com/{}", user.username)),
                }
            }
            Screen::Root => None,
        }
    }

    fn context_yank_url(&self) -> Option<String> {
        match self.screen {
            Screen::Users => self.users.selected_item().map(UserSummary::html_url),
            Screen::Repos => self.repos.selected_item().map(|r| r.clone_url.clone()),
            Screen::UserDetail => self
                .user
                .as_ref()?
                .repos
                .selected_item()
                .map(|r| r.clone_url.clone()),
            Screen::Root => None,
        }
    }

    fn abort_loads(&mut self) {
        self.users.finish_loading();
        self.repos.finish_loading();
        if let Some(user) = &mut self.user {
            user.repos.finish_loading();
            user.profile_loading = false;
        }
    }

    fn spawn_search_users(&self, seq: u64) {
        let tx = self.action_tx.clone();
        let backend = Arc::clone(&self.backend);
        let query = self.users.query().to_string();
        let (page, per_page) = (self.users.cursor().page(), self.users.cursor().per_page());
        tokio::spawn(async move {
            match backend.search_users(&query, page, per_page).await {
                Ok(result) => {
                    tx.send(Action::UsersPageLoaded { page: result, seq }).ok();
                }
                Err(e) => {
                    tx.send(e.into()).ok();
                }
            }
        });
    }

    fn spawn_search_repos(&self, seq: u64) {
        let tx = self.action_tx.clone();
        let backend = Arc::clone(&self.backend);
        let query = self.repos.query().to_string();
        let (page, per_page) = (self.repos.cursor().page(), self.repos.cursor().per_page());
        tokio::spawn(async move {
            match backend.search_repos(&query, page, per_page).await {
                Ok(result) => {
                    tx.send(Action::ReposPageLoaded { page: result, seq }).ok();
                }
                Err(e) => {
                    tx.send(e.into()).ok();
                }
            }
        });
    }

    fn spawn_user_repos(&self, username: String, page: u64, seq: u64) {
        let tx = self.action_tx.clone();
        let backend = Arc::clone(&self.backend);
        let per_page = self.per_page;
        tokio::spawn(async move {
            match backend.list_user_repos(&username, page, per_page).await {
                Ok(result) => {
                    tx.send(Action::UserReposPageLoaded {
                        username,
                        page: result,
                        seq,
                    })
                    .ok();
                }
                Err(e) => {
                    tx.send(e.into()).ok();
                }
            }
        });
    }

    fn spawn_profile(&self, username: String, seq: u64) {
        let tx = self.action_tx.clone();
        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            match backend.get_user(&username).await {
                Ok(profile) => {
                    tx.send(Action::ProfileLoaded {
                        username,
                        profile: Box::new(profile),
                        seq,
                    })
                    .ok();
                }
                Err(e) => {
                    tx.send(e.into()).ok();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubseekError;
    use crate::types::Page;
    use async_trait::async_trait;

    #[derive(Debug, Default)]
    struct MockBackend {
        fail: bool,
    }

    fn user(login: &str) -> UserSummary {
        UserSummary {
            login: login.to_string(),
            avatar_url: format!("https://example.com/{}.png", login),
        }
    }

    fn repo(full_name: &str) -> RepoSummary {
        RepoSummary {
            full_name: full_name.to_string(),
            clone_url: format!("https://github.com/{}.git", full_name),
            description: None,
            stars: 0,
            updated_at: None,
        }
    }

    fn profile(login: &str, public_repos: u64) -> UserProfile {
        UserProfile {
            login: login.to_string(),
            name: None,
            avatar_url: String::new(),
            html_url: format!("https://github.com/{}", login),
            bio: None,
            blog: None,
            company: None,
            location: None,
            public_repos,
        }
    }

    #[async_trait]
    impl Backend for MockBackend {
        async fn search_users(
            &self,
            query: &str,
            _page: u64,
            _per_page: u64,
        ) -> crate::error::Result<Page<UserSummary>> {
            if self.fail {
                return Err(HubseekError::Api("boom".to_string()));
            }
            Ok(Page::complete(vec![user(query)], Some(1)))
        }

        async fn search_repos(
            &self,
            query: &str,
            _page: u64,
            _per_page: u64,
        ) -> crate::error::Result<Page<RepoSummary>> {
            Ok(Page::complete(vec![repo(query)], Some(1)))
        }

        async fn get_user(&self, username: &str) -> crate::error::Result<UserProfile> {
            Ok(UserProfile {
                login: username.to_string(),
                name: Some("Test".to_string()),
                avatar_url: String::new(),
                html_url: format!("https://github.com/{}", username),
                bio: None,
                blog: None,
                company: None,
                location: None,
                public_repos: 45,
            })
        }

        async fn list_user_repos(
            &self,
            username: &str,
            _page: u64,
            _per_page: u64,
        ) -> crate::error::Result<Page<RepoSummary>> {
            Ok(Page::complete(vec![repo(&format!("{}/r", username))], None))
        }
    }

    fn app() -> (App, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(Arc::new(MockBackend::default()), tx, 20), rx)
    }

    fn users_page(count: usize, total: u64) -> Page<UserSummary> {
        Page::complete(
            (0..count).map(|i| user(&format!("u{}", i))).collect(),
            Some(total),
        )
    }

    #[tokio::test]
    async fn search_goes_to_the_active_tab_only() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::EnterSearch);
        for c in "torvalds".chars() {
            app.update(Action::SearchInput(c));
        }
        app.update(Action::SearchSubmit);

        assert_eq!(app.users.query(), "torvalds");
        assert_eq!(app.repos.query(), "");
        assert!(app.users.is_loading());
        assert!(!app.repos.is_loading());
    }

    #[tokio::test]
    async fn single_result_renders_without_pagination_controls() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::EnterSearch);
        app.update(Action::SearchInput('t'));
        app.update(Action::SearchSubmit);

        let page = Page::complete(vec![user("torvalds")], Some(1));
        app.update(Action::UsersPageLoaded { page, seq: 1 });

        assert_eq!(app.users.items().len(), 1);
        assert_eq!(app.users.items()[0].login, "torvalds");
        assert!(!app.users.has_pagination_controls());
    }

    #[tokio::test]
    async fn opening_a_profile_and_backing_out_preserves_users_state() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::EnterSearch);
        for c in "linus".chars() {
            app.update(Action::SearchInput(c));
        }
        app.update(Action::SearchSubmit);
        app.update(Action::UsersPageLoaded {
            page: users_page(20, 100),
            seq: 1,
        });
        app.update(Action::Paginate(Direction::Next));
        app.update(Action::UsersPageLoaded {
            page: users_page(20, 100),
            seq: 2,
        });
        assert_eq!(app.users.cursor().page(), 20);

        app.update(Action::OpenUser("u3".to_string()));
        assert_eq!(app.screen, Screen::UserDetail);
        assert_eq!(app.title, "User info");

        app.update(Action::Back);
        assert_eq!(app.screen, Screen::Users);
        assert_eq!(app.users.query(), "linus");
        assert_eq!(app.users.cursor().page(), 20);
        assert!(app.user.is_none());
    }

    #[tokio::test]
    async fn profile_open_and_back_replace_instead_of_pushing() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::OpenUser("octocat".to_string()));
        app.update(Action::Back);

        // Still one entry deep: history back has nowhere to go.
        app.update(Action::HistoryBack);
        assert_eq!(app.screen, Screen::Users);
    }

    #[tokio::test]
    async fn history_back_replays_the_previous_tab_without_repushing() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::SwitchTab(TabKind::Repos));

        app.update(Action::HistoryBack);
        assert_eq!(app.screen, Screen::Users);
        assert_eq!(app.title, "Users List");

        app.update(Action::HistoryForward);
        assert_eq!(app.screen, Screen::Repos);
        assert_eq!(app.title, "Repository List");

        // Replaying did not grow the stack: back still reaches users.
        app.update(Action::HistoryBack);
        assert_eq!(app.screen, Screen::Users);
        app.update(Action::HistoryBack);
        assert_eq!(app.screen, Screen::Users);
    }

    #[tokio::test]
    async fn profile_total_bounds_user_repos_pagination() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::OpenUser("octocat".to_string()));

        let repos: Vec<RepoSummary> = (0..20).map(|i| repo(&format!("octocat/r{}", i))).collect();
        app.update(Action::UserReposPageLoaded {
            username: "octocat".to_string(),
            page: Page::complete(repos, None),
            seq: 1,
        });
        app.update(Action::ProfileLoaded {
            username: "octocat".to_string(),
            profile: Box::new(profile("octocat", 45)),
            seq: 1,
        });

        let user = app.user.as_ref().unwrap();
        assert_eq!(user.repos.cursor().total_count(), Some(45));
        assert!(user.profile.is_some());

        // 45 total, offsets 20 and 40 are reachable; 60 is not.
        app.update(Action::Paginate(Direction::Next));
        app.update(Action::UserReposPageLoaded {
            username: "octocat".to_string(),
            page: Page::complete(vec![repo("octocat/x")], None),
            seq: 2,
        });
        let user = app.user.as_ref().unwrap();
        assert_eq!(user.repos.cursor().page(), 20);
    }

    #[tokio::test]
    async fn responses_for_a_previous_profile_are_discarded() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::OpenUser("alice".to_string()));
        app.update(Action::Back);
        app.update(Action::OpenUser("bob".to_string()));

        // Alice's slow responses arrive carrying the same token values a
        // freshly opened overlay hands out; only the username tells them
        // apart from bob's.
        app.update(Action::UserReposPageLoaded {
            username: "alice".to_string(),
            page: Page::complete(vec![repo("alice/secret")], None),
            seq: 1,
        });
        app.update(Action::ProfileLoaded {
            username: "alice".to_string(),
            profile: Box::new(profile("alice", 99)),
            seq: 1,
        });

        let user = app.user.as_ref().unwrap();
        assert!(user.repos.items().is_empty());
        assert!(user.profile.is_none());
        assert_eq!(user.repos.cursor().total_count(), None);

        app.update(Action::UserReposPageLoaded {
            username: "bob".to_string(),
            page: Page::complete(vec![repo("bob/dotfiles")], None),
            seq: 1,
        });
        app.update(Action::ProfileLoaded {
            username: "bob".to_string(),
            profile: Box::new(profile("bob", 1)),
            seq: 1,
        });
        let user = app.user.as_ref().unwrap();
        assert_eq!(user.repos.items()[0].full_name, "bob/dotfiles");
        assert_eq!(user.profile.as_ref().unwrap().login, "bob");
        assert_eq!(user.repos.cursor().total_count(), Some(1));
    }

    #[tokio::test]
    async fn incomplete_search_result_keeps_stale_view() {
        let (mut app, _rx) = app();
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::EnterSearch);
        app.update(Action::SearchInput('a'));
        app.update(Action::SearchSubmit);
        app.update(Action::UsersPageLoaded {
            page: users_page(5, 5),
            seq: 1,
        });

        app.update(Action::EnterSearch);
        app.update(Action::SearchInput('b'));
        app.update(Action::SearchSubmit);
        let partial = Page {
            items: vec![user("partial")],
            total_count: Some(999),
            incomplete: true,
        };
        app.update(Action::UsersPageLoaded {
            page: partial,
            seq: 2,
        });

        // The stale page stays up; the partial one was never rendered and
        // the reset cursor's unknown total was not overwritten.
        assert_eq!(app.users.items().len(), 5);
        assert_eq!(app.users.query(), "b");
        assert_eq!(app.users.cursor().total_count(), None);
    }

    #[tokio::test]
    async fn fetch_error_surfaces_in_status_and_clears_loading() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(Arc::new(MockBackend { fail: true }), tx, 20);
        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::EnterSearch);
        app.update(Action::SearchInput('x'));
        app.update(Action::SearchSubmit);

        let action = rx.recv().await.expect("error action");
        assert!(matches!(action, Action::Error(_)));
        app.update(action);
        assert!(app.error.is_some());
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn deep_link_to_user_seeds_history_under_the_overlay() {
        let (mut app, _rx) = app();
        app.deep_link(None, Some("octocat".to_string()));
        assert_eq!(app.screen, Screen::UserDetail);

        app.update(Action::Back);
        assert_eq!(app.screen, Screen::Users);
    }

    #[tokio::test]
    async fn keys_route_by_screen() {
        let (mut app, _rx) = app();
        let press =
            |code| Event::Key(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE));

        assert!(matches!(
            app.handle_event(press(KeyCode::Char('1'))),
            Action::SwitchTab(TabKind::Users)
        ));
        assert!(matches!(
            app.handle_event(press(KeyCode::Char('q'))),
            Action::Quit
        ));

        app.update(Action::SwitchTab(TabKind::Users));
        app.update(Action::UsersPageLoaded {
            page: users_page(1, 1),
            seq: 0,
        });
        assert!(matches!(
            app.handle_event(press(KeyCode::Enter)),
            Action::OpenUser(_)
        ));

        app.update(Action::EnterSearch);
        assert!(matches!(
            app.handle_event(press(KeyCode::Char('q'))),
            Action::SearchInput('q')
        ));
    }
}
