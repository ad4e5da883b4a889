//! Snyk REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};

use super::traits::{SnykIssue, SnykIssueClient};
use crate::application::errors::SnykApiError;
use crate::domain::{ApiToken, OrgId};

/// Display columns requested from the issues table
const ISSUES_DETAIL_COLS: &str =
    "SCORE|ASSET & SOURCE CODE|EXPLOIT MATURITY|TARGET & PROJECT|PROJECT ORIGIN|SNYK PRODUCT";

/// Sort order: severity rank descending
const ISSUES_DETAIL_SORT: &str = "ISSUE_SEVERITY_RANK DESC";

/// Client for the Snyk REST issues endpoint
pub struct SnykClient {
    client: Client,
    base_url: String,
    api_version: String,
}

impl SnykClient {
    /// Create a new Snyk client with the given base URL and API version
    pub fn new(base_url: String, api_version: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("snyk-checker/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_version,
        }
    }
}

impl Default for SnykClient {
    fn default() -> Self {
        Self::new(
            "https://api.snyk.io/rest".to_string(),
            "2024-06-10".to_string(),
            Duration::from_secs(30),
        )
    }
}

#[async_trait]
impl SnykIssueClient for SnykClient {
    async fn list_open_issues(
        &self,
        org_id: &OrgId,
        api_token: &ApiToken,
    ) -> Result<Vec<SnykIssue>, SnykApiError> {
        let url = format!("{}/orgs/{}/issues", self.base_url, org_id);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("version", self.api_version.as_str()),
                ("context[page]", "issues"),
                ("issue_status", r#"["Open"]"#),
                ("issues_table_issues_detail_cols", ISSUES_DETAIL_COLS),
                ("issues_table_issues_detail_sort", ISSUES_DETAIL_SORT),
            ])
            .header(
                header::AUTHORIZATION,
                format!("token {}", api_token.expose()),
            )
            .header(header::CONTENT_TYPE, "application/vnd.api+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Error body intentionally unread: it may echo request details.
            return Err(SnykApiError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let mut payload: serde_json::Value = response.json().await?;
        match payload.get_mut("data") {
            Some(data) if data.is_array() => serde_json::from_value(data.take())
                .map_err(|_| SnykApiError::MalformedResponse),
            _ => Err(SnykApiError::MalformedResponse),
        }
    }
}
