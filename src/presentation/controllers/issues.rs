//! Vulnerability check controller

use axum::{extract::State, response::Json};

use crate::application::errors::ApplicationError;
use crate::domain::{ApiToken, DomainError, OrgId};
use crate::presentation::controllers::AppState;
use crate::presentation::models::{
    ErrorResponse, VulnerabilityCheckRequest, VulnerabilityCheckResponse, VulnerabilityDto,
};

/// Fetch open issues for an organization and return them as display records
#[utoipa::path(
    post,
    path = "/api/snyk-vulnerabilities",
    tag = "vulnerabilities",
    request_body = VulnerabilityCheckRequest,
    responses(
        (status = 200, description = "Open issues for the organization", body = VulnerabilityCheckResponse),
        (status = 400, description = "Missing organization id or API token", body = ErrorResponse),
        (status = 500, description = "Unexpected upstream payload or internal error", body = ErrorResponse)
    )
)]
pub async fn check_vulnerabilities(
    State(app_state): State<AppState>,
    Json(request): Json<VulnerabilityCheckRequest>,
) -> Result<Json<VulnerabilityCheckResponse>, ApplicationError> {
    let (org_id, api_token) = validate_credentials(request)?;

    let vulnerabilities = app_state
        .issue_service
        .fetch_open_issues(&org_id, &api_token)
        .await?;

    Ok(Json(VulnerabilityCheckResponse {
        vulnerabilities: vulnerabilities
            .into_iter()
            .map(VulnerabilityDto::from)
            .collect(),
    }))
}

/// Both fields are required; either missing yields the single canonical message.
fn validate_credentials(
    request: VulnerabilityCheckRequest,
) -> Result<(OrgId, ApiToken), ApplicationError> {
    match (
        OrgId::new(request.org_id),
        ApiToken::new(request.api_token),
    ) {
        (Ok(org_id), Ok(api_token)) => Ok((org_id, api_token)),
        _ => Err(DomainError::InvalidInput {
            field: "orgId, apiToken".to_string(),
            message: "Organization ID and API Token are required".to_string(),
        }
        .into()),
    }
}
