pub mod github_http;

pub use github_http::HttpGitHubClient;
