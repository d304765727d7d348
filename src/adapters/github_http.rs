//! GitHub REST API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::domain::{AppError, GitHubApiConfig};
use crate::ports::{GitHub, IssueComment, PullRequest};

const X_GITHUB_API_VERSION: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: usize = 100;

/// HTTP client for the GitHub REST API.
#[derive(Clone)]
pub struct HttpGitHubClient {
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a client authenticated with `token`.
    pub fn new(token: &str, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(X_GITHUB_API_VERSION, HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("prcomment/", env!("CARGO_PKG_VERSION"))),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| AppError::config_error("GITHUB_TOKEN contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path)).map_err(|e| {
            AppError::config_error(format!("Invalid GitHub API endpoint '{}': {}", path, e))
        })
    }

    fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request.send()?;
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .map_err(|e| AppError::parse_error(format!("{} response", operation), e));
        }

        let text = response.text().unwrap_or_default();
        Err(AppError::GitHubApi { status: status.as_u16(), message: error_message(status, &text) })
    }
}

/// Prefer GitHub's `message` field; fall back to the raw body.
fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(error) => error.message,
        Err(_) if body.trim().is_empty() => {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        }
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    number: u64,
    head: ApiHead,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiHead {
    label: String,
}

#[derive(Debug, Deserialize)]
struct ApiComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(pr: ApiPullRequest) -> Self {
        Self { number: pr.number, head_label: pr.head.label, html_url: pr.html_url }
    }
}

impl From<ApiComment> for IssueComment {
    fn from(comment: ApiComment) -> Self {
        Self { id: comment.id, body: comment.body.unwrap_or_default(), html_url: comment.html_url }
    }
}

impl GitHub for HttpGitHubClient {
    fn find_open_pull_requests(
        &self,
        repo: &str,
        head_label: &str,
    ) -> Result<Vec<PullRequest>, AppError> {
        let url = self.endpoint(&format!("repos/{}/pulls", repo))?;
        let pulls: Vec<ApiPullRequest> = self.send(
            "list pull requests",
            self.client.get(url).query(&[
                ("state", "open"),
                ("sort", "created"),
                ("direction", "desc"),
                ("head", head_label),
            ]),
        )?;
        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }

    fn list_issue_comments(
        &self,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueComment>, AppError> {
        let url = self.endpoint(&format!("repos/{}/issues/{}/comments", repo, number))?;
        let per_page = PER_PAGE.to_string();
        let mut page = 1_u32;
        let mut comments = Vec::new();

        loop {
            let page_value = page.to_string();
            let chunk: Vec<ApiComment> = self.send(
                "list issue comments",
                self.client
                    .get(url.clone())
                    .query(&[("per_page", per_page.as_str()), ("page", page_value.as_str())]),
            )?;
            let chunk_len = chunk.len();
            comments.extend(chunk.into_iter().map(IssueComment::from));
            if chunk_len < PER_PAGE {
                break;
            }
            page = page.saturating_add(1);
        }

        Ok(comments)
    }

    fn create_issue_comment(
        &self,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<IssueComment, AppError> {
        let url = self.endpoint(&format!("repos/{}/issues/{}/comments", repo, number))?;
        let comment: ApiComment = self
            .send("create issue comment", self.client.post(url).json(&json!({ "body": body })))?;
        Ok(comment.into())
    }

    fn update_issue_comment(
        &self,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<IssueComment, AppError> {
        let url = self.endpoint(&format!("repos/{}/issues/comments/{}", repo, comment_id))?;
        let comment: ApiComment = self
            .send("update issue comment", self.client.patch(url).json(&json!({ "body": body })))?;
        Ok(comment.into())
    }
}
