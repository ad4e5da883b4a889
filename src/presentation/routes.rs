//! Route definitions and server setup

use std::time::Duration;

use axum::{
    Router,
    http::{StatusCode, header},
    middleware,
    response::Response,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::presentation::{
    controllers::{
        AppState,
        health::{detailed_health_check, health_check},
        issues::check_vulnerabilities,
    },
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::issues::check_vulnerabilities,
        crate::presentation::controllers::health::health_check,
        crate::presentation::controllers::health::detailed_health_check
    ),
    components(
        schemas(
            VulnerabilityCheckRequest,
            VulnerabilityCheckResponse,
            VulnerabilityDto,
            FixInfoDto,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "vulnerabilities", description = "Open issue lookup against the Snyk REST API"),
        (name = "health", description = "System health monitoring endpoints")
    ),
    info(
        title = "Snyk Checker API",
        version = "0.1.0",
        description = "Forwards an organization's credentials to the Snyk REST API and returns the open issues as flattened display records.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the application router with the middleware stack
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let api_routes = Router::new().route("/snyk-vulnerabilities", post(check_vulnerabilities));

    let health_routes = Router::new()
        .route("/health", get(health_check))
        .route("/health/detailed", get(detailed_health_check));

    let cors_layer = build_cors_layer(&config.server.allowed_origins);

    let mut router = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .merge(health_routes);

    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer)
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_seconds,
                )))
                .layer(middleware::from_fn(logging_middleware)),
        )
        .with_state(app_state)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Serve the browser shell that collects credentials and renders results
async fn serve_index() -> Response {
    let page = include_str!("../../static/index.html");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(page.into())
        .unwrap()
}
