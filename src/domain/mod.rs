pub mod comment_tag;
pub mod comment_template;
pub mod configuration;
pub mod error;
pub mod event;
pub mod reconcile;

pub use comment_tag::{CommentTag, tag_suffix};
pub use comment_template::{CommentTemplate, DEFAULT_TEMPLATES_DIR, TemplateContext};
pub use configuration::{ActionConfig, ActionInputs, GitHubApiConfig};
pub use error::AppError;
pub use event::{PullRequestEvent, branch_from_label};
pub use reconcile::{CommentAction, SkipReason, reconcile};
