//! Run configuration assembled once at startup.

use std::path::PathBuf;

use url::Url;

use super::{AppError, CommentTag, DEFAULT_TEMPLATES_DIR};

/// GitHub REST API connection settings.
#[derive(Debug, Clone)]
pub struct GitHubApiConfig {
    /// API base URL (`$GITHUB_API_URL` on Actions runners).
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GitHubApiConfig {
    pub fn with_api_url(api_url: Option<&str>) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = api_url.map(str::trim).filter(|raw| !raw.is_empty()) {
            config.api_url = Url::parse(raw).map_err(|e| {
                AppError::config_error(format!("Invalid GitHub API URL '{}': {}", raw, e))
            })?;
        }
        Ok(config)
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("default GitHub API URL is valid")
}

fn default_timeout() -> u64 {
    30
}

/// Everything a `post` run needs, resolved from flags and the environment.
#[derive(Clone)]
pub struct ActionConfig {
    pub token: String,
    pub event_path: PathBuf,
    pub templates_dir: PathBuf,
    pub template: String,
    pub tag: Option<CommentTag>,
    pub api: GitHubApiConfig,
    /// Step output file (`$GITHUB_OUTPUT`).
    pub github_output: Option<PathBuf>,
    pub dry_run: bool,
}

impl std::fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionConfig")
            .field("event_path", &self.event_path)
            .field("templates_dir", &self.templates_dir)
            .field("template", &self.template)
            .field("tag", &self.tag)
            .field("api", &self.api)
            .field("github_output", &self.github_output)
            .field("dry_run", &self.dry_run)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Raw inputs as they arrive from the command line or action environment.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub token: Option<String>,
    pub event_path: Option<PathBuf>,
    pub api_url: Option<String>,
    pub templates_dir: Option<PathBuf>,
    pub template: Option<String>,
    pub update_comment: Option<String>,
    pub github_output: Option<PathBuf>,
    pub dry_run: bool,
}

impl ActionConfig {
    /// Validate raw inputs into a run configuration.
    pub fn from_inputs(inputs: ActionInputs) -> Result<Self, AppError> {
        let token = inputs
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AppError::config_error("GITHUB_TOKEN is not set"))?;
        let event_path = inputs
            .event_path
            .ok_or_else(|| AppError::config_error("GITHUB_EVENT_PATH is not set"))?;
        let template = inputs
            .template
            .filter(|template| !template.trim().is_empty())
            .ok_or_else(|| {
                AppError::config_error("Template file name is not set (input 'template')")
            })?;

        Ok(Self {
            token,
            event_path,
            templates_dir: inputs
                .templates_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR)),
            template,
            tag: CommentTag::new(inputs.update_comment.as_deref()),
            api: GitHubApiConfig::with_api_url(inputs.api_url.as_deref())?,
            github_output: inputs.github_output.filter(|path| !path.as_os_str().is_empty()),
            dry_run: inputs.dry_run,
        })
    }
}
