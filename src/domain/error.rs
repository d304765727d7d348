use std::io;

use thiserror::Error;

/// Library-wide error type for prcomment operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No open pull request matches the head label of the triggering event.
    #[error("No open pull request found for head '{head}'")]
    NoMatchingPullRequest { head: String },

    /// Template file not found at path.
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    /// Template references an unknown placeholder or is malformed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// GitHub answered with a non-success status.
    #[error("GitHub API error ({status}): {message}")]
    GitHubApi { status: u16, message: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn parse_error<W: Into<String>>(what: W, details: impl std::fmt::Display) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}
