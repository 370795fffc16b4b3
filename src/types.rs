use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of results from the backend.
///
/// `total_count` reflects the filter's total match count when the endpoint
/// reports one (the search endpoints do, the per-user repos listing does
/// not). `incomplete` mirrors GitHub's `incomplete_results` flag: the page
/// was computed from a truncated search and must not be rendered.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
    pub incomplete: bool,
}

impl<T> Page<T> {
    pub fn complete(items: Vec<T>, total_count: Option<u64>) -> Self {
        Self {
            items,
            total_count,
            incomplete: false,
        }
    }
}

/// A user as shown in search results.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub login: String,
    pub avatar_url: String,
}

impl UserSummary {
    /// Profile page URL, used for open-in-browser and yank.
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}", self.login)
    }
}

/// A repository as shown in search results and per-user listings.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub full_name: String,
    pub clone_url: String,
    pub description: Option<String>,
    pub stars: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full profile fields for the user detail view.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub public_repos: u64,
}
