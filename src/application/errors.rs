//! Application layer error types

use thiserror::Error;

use crate::domain::DomainError;

/// Errors from the outbound Snyk REST call
#[derive(Error, Debug)]
pub enum SnykApiError {
    /// Upstream answered with a non-2xx status; forwarded to the caller as-is.
    #[error("Failed to fetch vulnerabilities from Snyk API: {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// Upstream answered 2xx but the payload lacked the expected `data` list.
    #[error("Unexpected response structure from Snyk API")]
    MalformedResponse,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Snyk lookup error: {0}")]
    Snyk(#[from] SnykApiError),
}
