//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{FixInfo, Vulnerability};

/// Request model for the vulnerability check
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityCheckRequest {
    /// Snyk organization identifier
    #[schema(example = "abc123")]
    #[serde(default)]
    pub org_id: String,

    /// Snyk API token; used only for the outbound Authorization header
    #[schema(example = "00000000-0000-0000-0000-000000000000")]
    #[serde(default)]
    pub api_token: String,
}

/// Response model listing normalized vulnerabilities
#[derive(Serialize, ToSchema)]
pub struct VulnerabilityCheckResponse {
    pub vulnerabilities: Vec<VulnerabilityDto>,
}

/// DTO for a single normalized vulnerability
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityDto {
    /// Snyk issue identifier
    #[schema(example = "SNYK-JS-LODASH-1040724")]
    pub id: String,

    /// Issue title
    #[schema(example = "Prototype Pollution")]
    pub title: String,

    /// Severity level: low, medium, high or critical
    #[schema(example = "high")]
    pub severity: String,

    /// Detailed issue description
    pub description: String,

    /// Snyk product that reported the issue
    #[schema(example = "Snyk Open Source")]
    pub product: String,

    /// Project the issue was found in
    #[schema(example = "acme/webapp")]
    pub project_name: String,

    /// Affected package name
    #[schema(example = "lodash")]
    pub package_name: String,

    /// Affected package version
    #[schema(example = "4.17.20")]
    pub version: String,

    /// How readily the issue can be exploited
    #[schema(example = "Proof of Concept")]
    pub exploit_maturity: String,

    /// Remediation steps, or the sentinel string when Snyk reports none
    #[schema(example = r#"["upgrade to 2.0"]"#)]
    pub fix_info: FixInfoDto,
}

/// Remediation steps or the "no fix information" sentinel
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FixInfoDto {
    Steps(Vec<String>),
    Unavailable(String),
}

impl From<FixInfo> for FixInfoDto {
    fn from(fix_info: FixInfo) -> Self {
        match fix_info {
            FixInfo::Steps(steps) => FixInfoDto::Steps(steps),
            FixInfo::Unavailable(message) => FixInfoDto::Unavailable(message),
        }
    }
}

impl From<Vulnerability> for VulnerabilityDto {
    fn from(vulnerability: Vulnerability) -> Self {
        Self {
            id: vulnerability.id,
            title: vulnerability.title,
            severity: vulnerability.severity.to_string(),
            description: vulnerability.description,
            product: vulnerability.product,
            project_name: vulnerability.project_name,
            package_name: vulnerability.package_name,
            version: vulnerability.version,
            exploit_maturity: vulnerability.exploit_maturity,
            fix_info: vulnerability.fix_info.into(),
        }
    }
}

/// Error response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Organization ID and API Token are required")]
    pub error: String,
}

/// Health check response model
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,

    /// Crate version
    #[schema(example = "0.1.0")]
    pub version: String,

    /// Time the check ran
    pub timestamp: DateTime<Utc>,

    /// Additional build and runtime details
    pub details: Option<serde_json::Value>,
}
