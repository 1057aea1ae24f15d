use octomark_core::{Profile, Repository};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::retry::{is_retryable_status, with_retry, Retryable, RetryConfig};

const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed")]
    AuthRequired,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API request failed with status {status}: {body}")]
    RequestFailed {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Retryable for GitHubError {
    fn is_retryable(&self) -> bool {
        match self {
            GitHubError::NetworkError(_) | GitHubError::RateLimitExceeded => true,
            GitHubError::RequestFailed { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Client for the public GitHub REST API
///
/// Works unauthenticated for public data; a token raises the rate limit
/// and is passed as a Bearer header when present.
pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
    base_url: String,
    retry_config: RetryConfig,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise instances
    pub fn with_base_url(token: Option<String>, base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("octomark/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            token,
            base_url,
            retry_config: RetryConfig::default(),
        }
    }

    /// Create client with custom retry configuration
    pub fn with_retry_config(token: Option<String>, retry_config: RetryConfig) -> Self {
        let mut client = Self::new(token);
        client.retry_config = retry_config;
        client
    }

    /// Fetch a user's public profile
    ///
    /// `NotFound` when the username doesn't exist.
    pub async fn get_user(&self, username: &str) -> Result<Profile> {
        let url = format!("{}/users/{}", self.base_url, username);
        debug!(username, "fetching profile");
        self.get_json(&url, &[], username).await
    }

    /// Fetch a user's repositories, most recently updated first
    pub async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        debug!(username, per_page, "fetching repositories");
        self.get_json(
            &url,
            &[("sort", "updated"), ("per_page", &per_page.to_string())],
            username,
        )
        .await
    }

    /// Fetch a single repository by owner and name
    ///
    /// `NotFound` when the repository doesn't exist.
    pub async fn get_repo(&self, owner: &str, name: &str) -> Result<Repository> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, name);
        debug!(owner, name, "fetching repository");
        self.get_json(&url, &[], &format!("{}/{}", owner, name)).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        not_found_context: &str,
    ) -> Result<T> {
        let token = self.token.clone();

        with_retry(&self.retry_config, || async {
            let mut request = self.client.get(url).query(query);

            if let Some(ref token) = token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                let value: T = response.json().await?;
                return Ok(value);
            }

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(GitHubError::NotFound(not_found_context.to_string()));
            }

            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(GitHubError::AuthRequired);
            }

            // GitHub reports rate limiting as 403 as well as 429
            if status == reqwest::StatusCode::FORBIDDEN
                || status == reqwest::StatusCode::TOO_MANY_REQUESTS
            {
                return Err(GitHubError::RateLimitExceeded);
            }

            let body = response.text().await.unwrap_or_default();
            Err(GitHubError::RequestFailed { status, body })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryability_classification() {
        assert!(GitHubError::RateLimitExceeded.is_retryable());
        assert!(GitHubError::RequestFailed {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        }
        .is_retryable());

        assert!(!GitHubError::NotFound("octocat".into()).is_retryable());
        assert!(!GitHubError::AuthRequired.is_retryable());
        assert!(!GitHubError::RequestFailed {
            status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            body: String::new(),
        }
        .is_retryable());
    }

    #[tokio::test]
    #[ignore = "hits the live GitHub API"]
    async fn fetch_known_user() {
        let client = GitHubClient::new(None);
        let profile = client.get_user("octocat").await.unwrap();
        assert_eq!(profile.login, "octocat");
    }

    #[tokio::test]
    #[ignore = "hits the live GitHub API"]
    async fn missing_user_is_not_found() {
        let client = GitHubClient::new(None);
        let result = client
            .get_user("this-user-should-not-exist-octomark-test")
            .await;
        assert!(matches!(result, Err(GitHubError::NotFound(_))));
    }
}
