//! Application services orchestrating the issue lookup

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::errors::ApplicationError;
use crate::domain::{ApiToken, FixInfo, OrgId, Vulnerability};
use crate::infrastructure::api_clients::{SnykIssue, SnykIssueClient};

/// Service for fetching and normalizing open issues
#[async_trait]
pub trait IssueService: Send + Sync {
    async fn fetch_open_issues(
        &self,
        org_id: &OrgId,
        api_token: &ApiToken,
    ) -> Result<Vec<Vulnerability>, ApplicationError>;
}

/// Default implementation backed by the Snyk REST client
pub struct IssueServiceImpl {
    client: Arc<dyn SnykIssueClient>,
}

impl IssueServiceImpl {
    pub fn new(client: Arc<dyn SnykIssueClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IssueService for IssueServiceImpl {
    async fn fetch_open_issues(
        &self,
        org_id: &OrgId,
        api_token: &ApiToken,
    ) -> Result<Vec<Vulnerability>, ApplicationError> {
        info!(org_id = %org_id, "Fetching vulnerabilities for organization");

        let issues = self.client.list_open_issues(org_id, api_token).await?;
        let vulnerabilities: Vec<Vulnerability> =
            issues.into_iter().map(normalize_issue).collect();

        info!(
            org_id = %org_id,
            count = vulnerabilities.len(),
            "Processed vulnerabilities"
        );

        Ok(vulnerabilities)
    }
}

/// Flatten an upstream issue into a display record
fn normalize_issue(issue: SnykIssue) -> Vulnerability {
    let attributes = issue.attributes;

    Vulnerability {
        id: issue.id,
        title: attributes.title.unwrap_or_default(),
        severity: attributes.severity,
        description: attributes.description.unwrap_or_default(),
        product: attributes.product.unwrap_or_default(),
        project_name: attributes.project_name.unwrap_or_default(),
        package_name: attributes.package_name.unwrap_or_default(),
        version: attributes.version.unwrap_or_default(),
        exploit_maturity: attributes.exploit_maturity.unwrap_or_default(),
        fix_info: attributes
            .fix_info
            .map(|fix| FixInfo::from_steps(fix.steps))
            .unwrap_or_else(FixInfo::unavailable),
    }
}
