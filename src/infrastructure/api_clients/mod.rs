//! External vulnerability API clients

pub mod snyk;
pub mod traits;

pub use snyk::SnykClient;
pub use traits::{SnykFixInfo, SnykIssue, SnykIssueAttributes, SnykIssueClient};
