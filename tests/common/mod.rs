//! Shared testing utilities for prcomment CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host runner does not leak in.
const ACTION_ENV: &[&str] = &[
    "GITHUB_TOKEN",
    "GITHUB_EVENT_PATH",
    "GITHUB_API_URL",
    "GITHUB_OUTPUT",
    "GITHUB_ACTIONS",
    "INPUT_TEMPLATE",
    "INPUT_FILENAME",
    "INPUT_UPDATECOMMENT",
];

/// Testing harness providing an isolated repository checkout for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an event for `octo/hello` PR branch `feature-x`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join(".github/workflows"))
            .expect("Failed to create templates directory");

        let ctx = Self { root, work_dir };
        ctx.write_event("octo:feature-x", "octo/hello");
        ctx
    }

    /// Path to the checkout used as the binary's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn event_path(&self) -> PathBuf {
        self.root.path().join("event.json")
    }

    pub fn github_output_path(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Write the event payload file.
    pub fn write_event(&self, head_label: &str, full_name: &str) {
        let payload = serde_json::json!({
            "action": "synchronize",
            "pull_request": { "head": { "label": head_label } },
            "repository": { "full_name": full_name },
        });
        fs::write(self.event_path(), payload.to_string()).expect("Failed to write event payload");
    }

    /// Write a template under `.github/workflows`.
    pub fn write_template(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join(".github/workflows").join(name), content)
            .expect("Failed to write template");
    }

    /// Contents of the `GITHUB_OUTPUT` file, empty when nothing was written.
    pub fn github_output(&self) -> String {
        fs::read_to_string(self.github_output_path()).unwrap_or_default()
    }

    /// Build a bare command for the compiled `prcomment` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prcomment").expect("Failed to locate prcomment binary");
        cmd.current_dir(&self.work_dir);
        for var in ACTION_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a `post` command wired to `api_url` the way the action runner would.
    pub fn post(&self, api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg("post")
            .env("GITHUB_TOKEN", "test-token")
            .env("GITHUB_EVENT_PATH", self.event_path())
            .env("GITHUB_API_URL", api_url)
            .env("GITHUB_OUTPUT", self.github_output_path())
            .env("INPUT_TEMPLATE", "comment.md");
        cmd
    }
}
