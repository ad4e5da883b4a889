//! Domain entities for normalized Snyk issues

use serde::{Deserialize, Serialize};

use super::value_objects::Severity;

/// Sentinel shown in place of remediation steps when Snyk reports none
pub const NO_FIX_INFO: &str = "No fix information available";

/// Remediation guidance for an issue.
///
/// Serializes either as an ordered list of steps or as the sentinel string,
/// matching what the browser UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixInfo {
    Steps(Vec<String>),
    Unavailable(String),
}

impl FixInfo {
    pub fn from_steps(steps: Vec<String>) -> Self {
        FixInfo::Steps(steps)
    }

    pub fn unavailable() -> Self {
        FixInfo::Unavailable(NO_FIX_INFO.to_string())
    }
}

impl Default for FixInfo {
    fn default() -> Self {
        FixInfo::unavailable()
    }
}

/// Flattened display record for a single open issue.
///
/// Transient: built per request from the upstream payload, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub description: String,
    pub product: String,
    pub project_name: String,
    pub package_name: String,
    pub version: String,
    pub exploit_maturity: String,
    pub fix_info: FixInfo,
}
