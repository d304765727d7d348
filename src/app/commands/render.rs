//! `render` command implementation.
//!
//! Previews a comment template locally with explicit pull-request values.

use std::path::PathBuf;

use crate::domain::{AppError, CommentTag, CommentTemplate, TemplateContext};

/// Options for `render`.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub templates_dir: PathBuf,
    pub template: String,
    pub pull_id: u64,
    pub branch_name: String,
    pub update_comment: Option<String>,
}

/// Render the template exactly as `post` would for the given values.
pub fn execute(options: &RenderOptions) -> Result<String, AppError> {
    let tag = CommentTag::new(options.update_comment.as_deref());
    let template =
        CommentTemplate::load(&options.templates_dir, &options.template)?.with_tag(tag.as_ref());
    template.render(&TemplateContext {
        pull_id: options.pull_id,
        branch_name: options.branch_name.clone(),
    })
}
