//! Comment reconciliation.
//!
//! Decides what a run does to the pull request's conversation: post a new
//! comment, edit the comment carrying our tag, or do nothing because an
//! identical untagged comment already exists.

use serde::Serialize;

use super::CommentTag;
use crate::ports::IssueComment;

/// Outcome of reconciling a rendered comment against existing comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAction {
    /// Post `body` as a new comment.
    Create { body: String },
    /// Replace the body of comment `comment_id`.
    Update { comment_id: u64, body: String },
    /// Leave the conversation untouched.
    Skip { reason: SkipReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// An untagged comment with the same body is already present.
    Duplicate,
}

impl SkipReason {
    pub fn message(self) -> &'static str {
        match self {
            SkipReason::Duplicate => "This pull request already has a duplicated comment.",
        }
    }
}

impl CommentAction {
    pub fn label(&self) -> &'static str {
        match self {
            CommentAction::Create { .. } => "create",
            CommentAction::Update { .. } => "update",
            CommentAction::Skip { .. } => "skip",
        }
    }
}

/// Decide the single action for this run.
///
/// Untagged: skip when a comment with exactly `rendered` exists, otherwise
/// create. Tagged: update the first comment (oldest first) containing the tag
/// suffix, otherwise create.
pub fn reconcile(
    rendered: &str,
    tag: Option<&CommentTag>,
    existing: &[IssueComment],
) -> CommentAction {
    match tag {
        None => {
            if existing.iter().any(|comment| comment.body == rendered) {
                CommentAction::Skip { reason: SkipReason::Duplicate }
            } else {
                CommentAction::Create { body: rendered.to_string() }
            }
        }
        Some(tag) => match existing.iter().find(|comment| tag.is_in(&comment.body)) {
            Some(comment) => {
                CommentAction::Update { comment_id: comment.id, body: rendered.to_string() }
            }
            None => CommentAction::Create { body: rendered.to_string() },
        },
    }
}
