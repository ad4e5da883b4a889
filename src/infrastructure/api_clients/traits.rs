//! Traits and wire types for the Snyk issues API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::errors::SnykApiError;
use crate::domain::{ApiToken, OrgId, Severity};

/// A single issue as returned by the Snyk REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnykIssue {
    pub id: String,
    pub attributes: SnykIssueAttributes,
}

/// Issue attributes from the Snyk payload.
///
/// Severity is part of the shape contract (closed set); the remaining fields
/// degrade to empty values when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnykIssueAttributes {
    #[serde(default)]
    pub title: Option<String>,
    pub severity: Severity,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub exploit_maturity: Option<String>,
    #[serde(default)]
    pub fix_info: Option<SnykFixInfo>,
}

/// Remediation block attached to an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnykFixInfo {
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Trait for clients of the Snyk issues endpoint
#[async_trait]
pub trait SnykIssueClient: Send + Sync {
    async fn list_open_issues(
        &self,
        org_id: &OrgId,
        api_token: &ApiToken,
    ) -> Result<Vec<SnykIssue>, SnykApiError>;
}
