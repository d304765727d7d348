mod github;

pub use github::{GitHub, IssueComment, PullRequest};
