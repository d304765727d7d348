//! Identity marker appended to managed comments.

use std::fmt;

/// Caller-supplied marker that lets a later run find and edit its own comment.
///
/// The marker lives inside the comment body as a trailing
/// `\n*comment tag: <id>*` line. An empty id means "no tag".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTag {
    id: String,
}

impl CommentTag {
    /// Build a tag from an optional action input.
    ///
    /// Empty input yields `None` so that `updatecomment: ""` behaves like an
    /// absent input. Any other value is kept byte-for-byte, whitespace
    /// included, because earlier comments were tagged with the raw input.
    pub fn new(id: Option<&str>) -> Option<Self> {
        match id {
            None | Some("") => None,
            Some(id) => Some(Self { id: id.to_string() }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Suffix embedded at the end of the comment body.
    pub fn suffix(&self) -> String {
        format!("\n*comment tag: {}*", self.id)
    }

    /// Whether `body` carries this tag.
    pub fn is_in(&self, body: &str) -> bool {
        body.contains(&self.suffix())
    }
}

impl fmt::Display for CommentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Suffix for an optional tag; empty when untagged.
pub fn tag_suffix(tag: Option<&CommentTag>) -> String {
    tag.map(CommentTag::suffix).unwrap_or_default()
}
