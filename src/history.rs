use crate::action::TabKind;

/// Where a history entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Tab(TabKind),
    User { username: String },
}

/// One navigation entry: a location plus the SPA-style query string it would
/// show in a browser address bar (`?page=users`, `?page=users&username=x`).
/// Kept so back/forward can replay the exact view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub location: Location,
    pub page_url: String,
}

impl NavState {
    pub fn tab(kind: TabKind) -> Self {
        Self {
            location: Location::Tab(kind),
            page_url: format!("?page={}", kind.page_name()),
        }
    }

    pub fn user(username: &str) -> Self {
        Self {
            location: Location::User {
                username: username.to_string(),
            },
            page_url: format!("?page=users&username={}", username),
        }
    }
}

/// Session-local navigation stack.
///
/// Push drops any forward entries, like a browser after navigating away from
/// the middle of its history. Replace swaps the current entry in place and
/// is used for transitions that should not grow the stack (opening a user
/// from the list, and backing out of it).
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<NavState>,
    index: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&NavState> {
        self.index.map(|i| &self.entries[i])
    }

    pub fn push(&mut self, state: NavState) {
        if let Some(i) = self.index {
            self.entries.truncate(i + 1);
        }
        self.entries.push(state);
        self.index = Some(self.entries.len() - 1);
    }

    pub fn replace(&mut self, state: NavState) {
        match self.index {
            Some(i) => self.entries[i] = state,
            None => self.push(state),
        }
    }

    /// Step back, returning the restored entry. `None` at the start of the
    /// stack; the caller treats that as a no-op.
    pub fn back(&mut self) -> Option<NavState> {
        let i = self.index?;
        if i == 0 {
            return None;
        }
        self.index = Some(i - 1);
        Some(self.entries[i - 1].clone())
    }

    /// Step forward after one or more `back`s.
    pub fn forward(&mut self) -> Option<NavState> {
        let i = self.index?;
        if i + 1 >= self.entries.len() {
            return None;
        }
        self.index = Some(i + 1);
        Some(self.entries[i + 1].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_and_forward_replay_entries() {
        let mut history = History::new();
        history.push(NavState::tab(TabKind::Users));
        history.push(NavState::tab(TabKind::Repos));

        let back = history.back().unwrap();
        assert_eq!(back.location, Location::Tab(TabKind::Users));
        let fwd = history.forward().unwrap();
        assert_eq!(fwd.location, Location::Tab(TabKind::Repos));
    }

    #[test]
    fn back_at_start_is_noop() {
        let mut history = History::new();
        assert!(history.back().is_none());
        history.push(NavState::tab(TabKind::Users));
        assert!(history.back().is_none());
        assert_eq!(
            history.current().unwrap().location,
            Location::Tab(TabKind::Users)
        );
    }

    #[test]
    fn push_truncates_forward_branch() {
        let mut history = History::new();
        history.push(NavState::tab(TabKind::Users));
        history.push(NavState::tab(TabKind::Repos));
        history.back();
        history.push(NavState::user("octocat"));

        // The repos entry is gone; forward has nowhere to go.
        assert!(history.forward().is_none());
        let back = history.back().unwrap();
        assert_eq!(back.location, Location::Tab(TabKind::Users));
    }

    #[test]
    fn replace_swaps_current_in_place() {
        let mut history = History::new();
        history.push(NavState::tab(TabKind::Users));
        history.replace(NavState::user("octocat"));

        assert_eq!(
            history.current().unwrap().page_url,
            "?page=users&username=octocat"
        );
        // Still a single entry deep.
        assert!(history.back().is_none());
    }

    #[test]
    fn replace_on_empty_history_seeds_it() {
        let mut history = History::new();
        history.replace(NavState::tab(TabKind::Repos));
        assert_eq!(history.current().unwrap().page_url, "?page=repos");
    }

    #[test]
    fn tab_states_carry_page_urls() {
        assert_eq!(NavState::tab(TabKind::Users).page_url, "?page=users");
        assert_eq!(NavState::tab(TabKind::Repos).page_url, "?page=repos");
    }
}
