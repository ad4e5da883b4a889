//! HTTP middleware for the web server

use std::time::Instant;

use axum::{
    Json,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::application::errors::{ApplicationError, SnykApiError};
use crate::domain::DomainError;
use crate::presentation::models::ErrorResponse;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApplicationError::Domain(DomainError::InvalidInput { message, .. }) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApplicationError::Snyk(SnykApiError::Upstream { status, .. }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                self.inner_message(),
            ),
            ApplicationError::Snyk(SnykApiError::MalformedResponse) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.inner_message())
            }
            ApplicationError::Snyk(SnykApiError::Network(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.inner_message())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl ApplicationError {
    /// Message of the underlying cause, without the enum wrapper prefix.
    fn inner_message(&self) -> String {
        match self {
            ApplicationError::Domain(e) => e.to_string(),
            ApplicationError::Snyk(e) => e.to_string(),
        }
    }
}

/// Request logging middleware with timing and request ID
pub async fn logging_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let response = next.run(request).await;
    let duration = start_time.elapsed();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}
