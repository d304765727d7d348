use crate::domain::AppError;

/// Open pull request as returned by the head-label search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    /// `owner:branch`
    pub head_label: String,
    pub html_url: Option<String>,
}

/// Issue comment on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    pub id: u64,
    pub body: String,
    pub html_url: Option<String>,
}

/// The slice of the GitHub REST API the bot talks to.
///
/// `repo` is always `owner/name`.
pub trait GitHub {
    /// Open pull requests whose head matches `head_label`, most recently
    /// created first.
    fn find_open_pull_requests(
        &self,
        repo: &str,
        head_label: &str,
    ) -> Result<Vec<PullRequest>, AppError>;

    /// Every issue comment on the pull request, oldest first.
    fn list_issue_comments(&self, repo: &str, number: u64)
    -> Result<Vec<IssueComment>, AppError>;

    fn create_issue_comment(
        &self,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<IssueComment, AppError>;

    fn update_issue_comment(
        &self,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<IssueComment, AppError>;
}
