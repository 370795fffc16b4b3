use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::backend::Backend;
use crate::error::{HubseekError, Result};
use crate::types::{Page, RepoSummary, UserProfile, UserSummary};

const USER_AGENT: &str = concat!("hubseek/", env!("CARGO_PKG_VERSION"));

pub struct GitHub {
    client: Client,
    host: String,
    token: Option<String>,
}

impl std::fmt::Debug for GitHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHub")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl GitHub {
    pub fn new(host: String, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HubseekError::Api(e.to_string()))?;

        Ok(Self {
            client,
            host,
            token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("https://{}/{}", self.host, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HubseekError::Api(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = format!("GitHub API {}: {}", status, api_message(&text));
            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    HubseekError::Auth(message)
                }
                _ => HubseekError::Api(message),
            });
        }

        response
            .json()
            .await
            .map_err(|e| HubseekError::Api(e.to_string()))
    }
}

/// Pull the `message` field out of a GitHub error body, falling back to the
/// raw text for non-JSON responses.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}

// GitHub API response types

#[derive(Deserialize)]
struct GhSearchResponse<T> {
    total_count: u64,
    incomplete_results: bool,
    items: Vec<T>,
}

#[derive(Deserialize)]
struct GhUser {
    login: String,
    avatar_url: String,
}

#[derive(Deserialize)]
struct GhRepo {
    full_name: String,
    clone_url: String,
    description: Option<String>,
    stargazers_count: Option<u32>,
    updated_at: Option<String>,
}

#[derive(Deserialize)]
struct GhProfile {
    login: String,
    name: Option<String>,
    avatar_url: String,
    html_url: String,
    bio: Option<String>,
    blog: Option<String>,
    company: Option<String>,
    location: Option<String>,
    public_repos: Option<u64>,
}

fn parse_datetime(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&chrono::Utc))
        .ok()
}

impl From<GhUser> for UserSummary {
    fn from(user: GhUser) -> Self {
        Self {
            login: user.login,
            avatar_url: user.avatar_url,
        }
    }
}

impl From<GhRepo> for RepoSummary {
    fn from(repo: GhRepo) -> Self {
        Self {
            full_name: repo.full_name,
            clone_url: repo.clone_url,
            description: repo.description,
            stars: repo.stargazers_count.unwrap_or(0),
            updated_at: repo.updated_at.as_deref().and_then(parse_datetime),
        }
    }
}

impl From<GhProfile> for UserProfile {
    fn from(profile: GhProfile) -> Self {
        Self {
            login: profile.login,
            name: profile.name,
            avatar_url: profile.avatar_url,
            html_url: profile.html_url,
            bio: profile.bio,
            blog: profile.blog,
            company: profile.company,
            location: profile.location,
            public_repos: profile.public_repos.unwrap_or(0),
        }
    }
}

#[async_trait]
impl Backend for GitHub {
    async fn search_users(
        &self,
        query: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Page<UserSummary>> {
        let url = self.api_url(&format!(
            "search/users?q={}&page={}&per_page={}",
            urlencoding::encode(query),
            page,
            per_page
        ));
        let response: GhSearchResponse<GhUser> = self.get_json(&url).await?;

        Ok(Page {
            items: response.items.into_iter().map(Into::into).collect(),
            total_count: Some(response.total_count),
            incomplete: response.incomplete_results,
        })
    }

    async fn search_repos(
        &self,
        query: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Page<RepoSummary>> {
        let url = self.api_url(&format!(
            "search/repositories?q={}&page={}&per_page={}",
            urlencoding::encode(query),
            page,
            per_page
        ));
        let response: GhSearchResponse<GhRepo> = self.get_json(&url).await?;

        Ok(Page {
            items: response.items.into_iter().map(Into::into).collect(),
            total_count: Some(response.total_count),
            incomplete: response.incomplete_results,
        })
    }

    async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let url = self.api_url(&format!("users/{}", urlencoding::encode(username)));
        let profile: GhProfile = self.get_json(&url).await?;
        Ok(profile.into())
    }

    async fn list_user_repos(
        &self,
        username: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Page<RepoSummary>> {
        let url = self.api_url(&format!(
            "users/{}/repos?page={}&per_page={}",
            urlencoding::encode(username),
            page,
            per_page
        ));
        // Plain array, no total; the profile's public_repos supplies it.
        let repos: Vec<GhRepo> = self.get_json(&url).await?;
        Ok(Page::complete(
            repos.into_iter().map(Into::into).collect(),
            None,
        ))
    }
}
