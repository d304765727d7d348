//! `post` command implementation.
//!
//! Finds the pull request behind the triggering event, renders the comment
//! template for it, and creates, updates, or skips the bot comment.

use serde::Serialize;

use crate::domain::{
    ActionConfig, AppError, CommentAction, CommentTemplate, PullRequestEvent, SkipReason,
    TemplateContext, reconcile,
};
use crate::ports::GitHub;

/// Output of `post`.
#[derive(Debug, Clone, Serialize)]
pub struct PostOutput {
    pub schema_version: u32,
    /// `create`, `update`, or `skip`.
    pub action: &'static str,
    /// Whether a write was made. False for skips and dry runs.
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_reason: Option<SkipReason>,
    pub pull_number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub body: String,
}

/// Execute `post` against `github`.
pub fn execute(github: &impl GitHub, config: &ActionConfig) -> Result<PostOutput, AppError> {
    let event = PullRequestEvent::load(&config.event_path)?;
    let repo = event.repository();

    let pr = github
        .find_open_pull_requests(repo, event.head_label())?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NoMatchingPullRequest { head: event.head_label().to_string() })?;

    let template = CommentTemplate::load(&config.templates_dir, &config.template)?
        .with_tag(config.tag.as_ref());
    let context =
        TemplateContext { pull_id: pr.number, branch_name: event.branch_name().to_string() };
    let rendered = template.render(&context)?;

    let comments = github.list_issue_comments(repo, pr.number)?;
    let action = reconcile(&rendered, config.tag.as_ref(), &comments);

    let mut output = PostOutput {
        schema_version: 1,
        action: action.label(),
        applied: false,
        skipped_reason: None,
        pull_number: pr.number,
        pull_url: pr.html_url,
        comment_id: None,
        comment_url: None,
        tag: config.tag.as_ref().map(|tag| tag.id().to_string()),
        body: rendered,
    };

    match action {
        CommentAction::Skip { reason } => {
            output.skipped_reason = Some(reason);
        }
        CommentAction::Update { comment_id, .. } if config.dry_run => {
            output.comment_id = Some(comment_id);
        }
        CommentAction::Create { .. } if config.dry_run => {}
        CommentAction::Create { body } => {
            let comment = github.create_issue_comment(repo, pr.number, &body)?;
            output.applied = true;
            output.comment_id = Some(comment.id);
            output.comment_url = comment.html_url;
        }
        CommentAction::Update { comment_id, body } => {
            let comment = github.update_issue_comment(repo, comment_id, &body)?;
            output.applied = true;
            output.comment_id = Some(comment.id);
            output.comment_url = comment.html_url;
        }
    }

    Ok(output)
}
