// GitHub REST client - the only place that talks to the network
pub mod github;
pub mod retry;

pub use github::{GitHubClient, GitHubError};
pub use retry::RetryConfig;
