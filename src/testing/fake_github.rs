use std::cell::{Cell, RefCell};

use crate::domain::AppError;
use crate::ports::{GitHub, IssueComment, PullRequest};

/// In-memory GitHub that records every write.
pub struct FakeGitHub {
    pub pulls: RefCell<Vec<PullRequest>>,
    pub comments: RefCell<Vec<IssueComment>>,
    pub created: RefCell<Vec<(u64, String)>>,
    pub updated: RefCell<Vec<(u64, String)>>,
    pub searched_heads: RefCell<Vec<String>>,
    next_comment_id: Cell<u64>,
}

impl FakeGitHub {
    /// One open pull request #42 for `octo:feature-x`, no comments.
    pub fn with_open_pr() -> Self {
        Self {
            pulls: RefCell::new(vec![PullRequest {
                number: 42,
                head_label: "octo:feature-x".to_string(),
                html_url: Some("https://github.com/octo/hello/pull/42".to_string()),
            }]),
            comments: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
            updated: RefCell::new(Vec::new()),
            searched_heads: RefCell::new(Vec::new()),
            next_comment_id: Cell::new(100),
        }
    }

    pub fn without_pulls() -> Self {
        let gh = Self::with_open_pr();
        gh.pulls.borrow_mut().clear();
        gh
    }

    pub fn seed_comment(&self, id: u64, body: &str) {
        self.comments.borrow_mut().push(IssueComment {
            id,
            body: body.to_string(),
            html_url: None,
        });
    }

    pub fn write_count(&self) -> usize {
        self.created.borrow().len() + self.updated.borrow().len()
    }
}

impl GitHub for FakeGitHub {
    fn find_open_pull_requests(
        &self,
        _repo: &str,
        head_label: &str,
    ) -> Result<Vec<PullRequest>, AppError> {
        self.searched_heads.borrow_mut().push(head_label.to_string());
        Ok(self.pulls.borrow().iter().filter(|pr| pr.head_label == head_label).cloned().collect())
    }

    fn list_issue_comments(
        &self,
        _repo: &str,
        _number: u64,
    ) -> Result<Vec<IssueComment>, AppError> {
        Ok(self.comments.borrow().clone())
    }

    fn create_issue_comment(
        &self,
        _repo: &str,
        number: u64,
        body: &str,
    ) -> Result<IssueComment, AppError> {
        let id = self.next_comment_id.get();
        self.next_comment_id.set(id + 1);
        let comment = IssueComment { id, body: body.to_string(), html_url: None };
        self.comments.borrow_mut().push(comment.clone());
        self.created.borrow_mut().push((number, body.to_string()));
        Ok(comment)
    }

    fn update_issue_comment(
        &self,
        _repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<IssueComment, AppError> {
        let mut comments = self.comments.borrow_mut();
        let comment = comments.iter_mut().find(|c| c.id == comment_id).ok_or_else(|| {
            AppError::GitHubApi { status: 404, message: "Not Found".to_string() }
        })?;
        comment.body = body.to_string();
        self.updated.borrow_mut().push((comment_id, body.to_string()));
        Ok(comment.clone())
    }
}
