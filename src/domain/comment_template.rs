//! Comment templates with brace placeholders.
//!
//! Templates use `{name}` placeholders. `{{` and `}}` produce literal braces.
//! Only `pull_id` and `branch_name` are available to a template.

use std::path::{Component, Path};

use super::{AppError, CommentTag, tag_suffix};

/// Directory that holds comment templates, relative to the repository root.
pub const DEFAULT_TEMPLATES_DIR: &str = ".github/workflows";

/// Pull-request metadata exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub pull_id: u64,
    pub branch_name: String,
}

impl TemplateContext {
    pub const PLACEHOLDERS: &'static [&'static str] = &["pull_id", "branch_name"];

    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "pull_id" => Some(self.pull_id.to_string()),
            "branch_name" => Some(self.branch_name.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A loaded comment template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    name: String,
    source: String,
}

impl CommentTemplate {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }

    /// Read `<dir>/<filename>` as a UTF-8 template.
    ///
    /// `filename` must stay inside `dir`: absolute paths and `..` components
    /// are rejected.
    pub fn load(dir: &Path, filename: &str) -> Result<Self, AppError> {
        if filename.trim().is_empty() {
            return Err(AppError::config_error("Template file name is empty"));
        }
        let escapes = Path::new(filename).components().any(|component| {
            matches!(component, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes {
            return Err(AppError::config_error(format!(
                "Template file name '{}' must be a relative path inside the templates directory",
                filename
            )));
        }
        let path = dir.join(filename);
        if !path.is_file() {
            return Err(AppError::TemplateNotFound(path.display().to_string()));
        }
        let source = std::fs::read_to_string(&path)?;
        Ok(Self::new(filename, source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append the tag suffix to the template text.
    ///
    /// The suffix becomes part of the template, so it is rendered together
    /// with the body.
    pub fn with_tag(mut self, tag: Option<&CommentTag>) -> Self {
        self.source.push_str(&tag_suffix(tag));
        self
    }

    /// Substitute every placeholder from `context`.
    pub fn render(&self, context: &TemplateContext) -> Result<String, AppError> {
        let mut rendered = String::with_capacity(self.source.len());
        for segment in self.parse()? {
            match segment {
                Segment::Literal(text) => rendered.push_str(&text),
                Segment::Placeholder(name) => {
                    let value = context.lookup(&name).ok_or_else(|| {
                        self.render_error(format!(
                            "unknown placeholder '{{{}}}' (available: {})",
                            name,
                            TemplateContext::PLACEHOLDERS.join(", ")
                        ))
                    })?;
                    rendered.push_str(&value);
                }
            }
        }
        Ok(rendered)
    }

    fn parse(&self) -> Result<Vec<Segment>, AppError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = self.source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(self.render_error("single '}' encountered")),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => {
                                return Err(self.render_error("unexpected '{' in placeholder"));
                            }
                            Some(ch) => name.push(ch),
                            None => return Err(self.render_error("unterminated placeholder")),
                        }
                    }
                    if name.is_empty() {
                        return Err(self.render_error("empty placeholder '{}'"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(segments)
    }

    fn render_error(&self, reason: impl Into<String>) -> AppError {
        AppError::TemplateRender { template: self.name.clone(), reason: reason.into() }
    }
}
