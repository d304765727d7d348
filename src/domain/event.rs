//! Typed view of the pull-request event payload.
//!
//! Only the fields the bot needs are modelled. Missing fields fail at parse
//! time with the path of the field in the error.

use std::path::Path;

use serde::Deserialize;

use super::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: EventPullRequest,
    pub repository: EventRepository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventPullRequest {
    pub head: EventHead,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventHead {
    /// `owner:branch`
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepository {
    pub full_name: String,
}

impl PullRequestEvent {
    /// Read and validate the payload at `path` (normally `$GITHUB_EVENT_PATH`).
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read event payload {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let event: Self = serde_json::from_str(content)
            .map_err(|e| AppError::parse_error("event payload", e))?;
        event.validate()?;
        Ok(event)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.pull_request.head.label.trim().is_empty() {
            return Err(AppError::parse_error("event payload", "pull_request.head.label is empty"));
        }
        let valid_repo = self
            .repository
            .full_name
            .split_once('/')
            .is_some_and(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'));
        if !valid_repo {
            return Err(AppError::parse_error(
                "event payload",
                format!(
                    "repository.full_name '{}' is not in owner/name form",
                    self.repository.full_name
                ),
            ));
        }
        Ok(())
    }

    /// Head label of the pull request, `owner:branch`.
    pub fn head_label(&self) -> &str {
        &self.pull_request.head.label
    }

    /// Branch part of the head label.
    pub fn branch_name(&self) -> &str {
        branch_from_label(self.head_label())
    }

    /// Repository in `owner/name` form.
    pub fn repository(&self) -> &str {
        &self.repository.full_name
    }
}

/// Segment after the last `:` of a head label; the whole label if it has none.
pub fn branch_from_label(label: &str) -> &str {
    label.rsplit(':').next().unwrap_or(label)
}
