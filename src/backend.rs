use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Page, RepoSummary, UserProfile, UserSummary};

/// The query interface the controllers fetch through. Implementations are
/// opaque to the core: a call either resolves to a parsed page or fails.
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    async fn search_users(&self, query: &str, page: u64, per_page: u64)
        -> Result<Page<UserSummary>>;

    async fn search_repos(&self, query: &str, page: u64, per_page: u64)
        -> Result<Page<RepoSummary>>;

    async fn get_user(&self, username: &str) -> Result<UserProfile>;

    async fn list_user_repos(
        &self,
        username: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Page<RepoSummary>>;
}
