//! prcomment: post or update a templated comment on the pull request behind a
//! GitHub Actions event.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::HttpGitHubClient;
use app::commands::{post, render};
use app::output::{Annotation, report, write_workflow_output};
use domain::ActionConfig;

pub use app::commands::post::PostOutput;
pub use app::commands::render::RenderOptions;
pub use domain::{ActionInputs, AppError, CommentTag, CommentTemplate, SkipReason};

// =============================================================================
// Post Command API
// =============================================================================

/// Create, update, or skip the bot comment for the triggering pull request.
///
/// Inputs are validated into an [`ActionConfig`] once, then the run talks to
/// the GitHub REST API. Returns the outcome that was also written to
/// `GITHUB_OUTPUT` (when set).
pub fn post(inputs: ActionInputs) -> Result<PostOutput, AppError> {
    let config = ActionConfig::from_inputs(inputs)?;
    let github = HttpGitHubClient::new(&config.token, &config.api)?;

    let output = post::execute(&github, &config)?;
    report_post(&output, &config);

    // Step outputs are best effort once the comment has been written.
    if let Some(path) = &config.github_output
        && let Err(err) = write_workflow_output(&output, path)
    {
        report(Annotation::Warning, &format!("Could not write step outputs: {}", err));
    }
    Ok(output)
}

fn report_post(output: &PostOutput, config: &ActionConfig) {
    let target = format!("pull request #{}", output.pull_number);
    if let Some(reason) = output.skipped_reason {
        let message = match &output.pull_url {
            Some(url) => format!("{} ({})", reason.message(), url),
            None => reason.message().to_string(),
        };
        report(Annotation::Notice, &message);
        return;
    }
    if config.dry_run {
        match &output.pull_url {
            Some(url) => println!("Dry run: would {} comment on {} ({})", output.action, target, url),
            None => println!("Dry run: would {} comment on {}", output.action, target),
        }
        println!("{}", output.body);
        return;
    }
    let id = output.comment_id.map(|id| id.to_string()).unwrap_or_default();
    let verb = if output.action == "create" { "Created" } else { "Updated" };
    match &output.comment_url {
        Some(url) => println!("✅ {} comment {} on {}: {}", verb, id, target, url),
        None => println!("✅ {} comment {} on {}", verb, id, target),
    }
}

// =============================================================================
// Render Command API
// =============================================================================

/// Render a template locally without contacting GitHub.
pub fn render(options: &RenderOptions) -> Result<String, AppError> {
    render::execute(options)
}
