//! Workflow output helpers.
//!
//! Appends step outputs to the `GITHUB_OUTPUT` file and emits workflow
//! command annotations when running inside GitHub Actions.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::domain::AppError;

/// Append `json=<single-line JSON>` plus each scalar top-level field as its
/// own `key=value` line to the `GITHUB_OUTPUT` file.
///
/// # Errors
/// Returns an error if JSON serialization fails or file I/O fails.
pub fn write_workflow_output<T: Serialize>(output: &T, path: &Path) -> Result<(), AppError> {
    let value = serde_json::to_value(output)
        .map_err(|e| AppError::config_error(format!("Failed to serialize workflow output: {}", e)))?;
    let json = value.to_string();

    debug_assert!(!json.contains('\n'), "workflow output JSON must be single-line");

    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
        AppError::config_error(format!("Failed to open GITHUB_OUTPUT {}: {}", path.display(), e))
    })?;

    writeln!(file, "json={}", json)?;
    if let serde_json::Value::Object(fields) = &value {
        for (key, field) in fields {
            match field {
                serde_json::Value::String(text) if !text.contains('\n') => {
                    writeln!(file, "{}={}", key, text)?
                }
                serde_json::Value::Number(number) => writeln!(file, "{}={}", key, number)?,
                serde_json::Value::Bool(flag) => writeln!(file, "{}={}", key, flag)?,
                _ => {}
            }
        }
    }

    Ok(())
}

/// Annotation level for GitHub Actions workflow commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Notice,
    Warning,
    Error,
}

impl Annotation {
    fn command(self) -> &'static str {
        match self {
            Annotation::Notice => "notice",
            Annotation::Warning => "warning",
            Annotation::Error => "error",
        }
    }
}

/// Format a workflow command line, e.g. `::notice::message`.
pub fn workflow_command(level: Annotation, message: &str) -> String {
    let escaped = message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A");
    format!("::{}::{}", level.command(), escaped)
}

/// Whether the process runs inside a GitHub Actions job.
pub fn in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

/// Print `message`, also as an annotation when running on Actions.
pub fn report(level: Annotation, message: &str) {
    if in_github_actions() {
        println!("{}", workflow_command(level, message));
    } else {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::fs;
    use tempfile::NamedTempFile;

    #[derive(Serialize)]
    struct TestOutput {
        schema_version: u32,
        action: String,
        applied: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        comment_id: Option<u64>,
    }

    #[test]
    fn github_output_contains_json_and_scalar_fields() {
        let temp_file = NamedTempFile::new().unwrap();
        let output = TestOutput {
            schema_version: 1,
            action: "create".to_string(),
            applied: true,
            comment_id: Some(7),
        };

        write_workflow_output(&output, temp_file.path()).unwrap();

        let contents = fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].starts_with("json="), "first line should start with json=");

        let value = lines[0].strip_prefix("json=").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(value).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["comment_id"], 7);

        assert!(lines.contains(&"action=create"));
        assert!(lines.contains(&"applied=true"));
        assert!(lines.contains(&"comment_id=7"));
    }

    #[test]
    fn github_output_appends_to_existing_content() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "previous=1\n").unwrap();
        let output =
            TestOutput { schema_version: 1, action: "skip".into(), applied: false, comment_id: None };

        write_workflow_output(&output, temp_file.path()).unwrap();

        let contents = fs::read_to_string(temp_file.path()).unwrap();
        assert!(contents.starts_with("previous=1\njson="));
        assert!(!contents.contains("comment_id="));
    }

    #[test]
    fn workflow_command_escapes_newlines() {
        assert_eq!(
            workflow_command(Annotation::Notice, "line one\nline two 100%"),
            "::notice::line one%0Aline two 100%25"
        );
        assert_eq!(workflow_command(Annotation::Error, "boom"), "::error::boom");
        assert_eq!(workflow_command(Annotation::Warning, "late"), "::warning::late");
    }
}
