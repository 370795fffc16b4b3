use crate::error::HubseekError;
use crate::pagination::Direction;
use crate::types::{Page, RepoSummary, UserProfile, UserSummary};

/// Top-level tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Users,
    Repos,
}

impl TabKind {
    /// Logical page name, as it would appear in a `?page=` query string.
    pub fn page_name(&self) -> &'static str {
        match self {
            TabKind::Users => "users",
            TabKind::Repos => "repos",
        }
    }

    /// Terminal title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            TabKind::Users => "Users List",
            TabKind::Repos => "Repository List",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabKind::Users => "Users",
            TabKind::Repos => "Repositories",
        }
    }
}

/// Identity of a list pane. The global repos search and a user's repos list
/// render the same way but carry distinct markers, so their pagination never
/// cross-talks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneId {
    UsersList,
    ReposList,
    UserRepos,
}

#[derive(Debug)]
pub enum Action {
    Quit,
    /// Leave the current view (user detail backs out to the users list).
    Back,
    /// Browser-style history steps.
    HistoryBack,
    HistoryForward,

    SwitchTab(TabKind),
    ScrollUp,
    ScrollDown,
    /// Open a user's profile overlay.
    OpenUser(String),

    // Search box editing
    EnterSearch,
    SearchInput(char),
    SearchBackspace,
    SearchCancel,
    SearchSubmit,

    Paginate(Direction),

    OpenInBrowser,
    YankUrl,

    // Fetch results, tagged with the issuing pane's sequence token. Overlay
    // results also carry the requested username: each opened overlay starts
    // a fresh token sequence, so the token alone cannot distinguish users.
    UsersPageLoaded {
        page: Page<UserSummary>,
        seq: u64,
    },
    ReposPageLoaded {
        page: Page<RepoSummary>,
        seq: u64,
    },
    UserReposPageLoaded {
        username: String,
        page: Page<RepoSummary>,
        seq: u64,
    },
    ProfileLoaded {
        username: String,
        profile: Box<UserProfile>,
        seq: u64,
    },

    Error(String),
    None,
}

impl From<HubseekError> for Action {
    fn from(err: HubseekError) -> Self {
        Action::Error(err.to_string())
    }
}
