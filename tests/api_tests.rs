//! Integration tests for the vulnerability check endpoint
//!
//! Drives the full request-response cycle against a mocked Snyk upstream.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use mockito::{Matcher, Server};
use serde_json::{Value, json};

use snyk_checker::{
    AppState, Config,
    application::IssueServiceImpl,
    infrastructure::SnykClient,
    presentation::create_router,
};

const TEST_TOKEN: &str = "very-secret-snyk-token";

/// Test server whose Snyk client targets the given mock upstream
fn create_test_server(upstream_url: &str) -> TestServer {
    let client = Arc::new(SnykClient::new(
        upstream_url.to_string(),
        "2024-06-10".to_string(),
        Duration::from_secs(5),
    ));
    let app_state = AppState {
        issue_service: Arc::new(IssueServiceImpl::new(client)),
    };
    let app = create_router(app_state, &Config::default());
    TestServer::new(app).expect("Failed to create test server")
}

fn check_request(org_id: &str) -> Value {
    json!({ "orgId": org_id, "apiToken": TEST_TOKEN })
}

#[tokio::test]
async fn missing_org_id_returns_400() {
    let upstream = Server::new_async().await;
    let server = create_test_server(&upstream.url());

    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&json!({ "apiToken": TEST_TOKEN }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Organization ID and API Token are required");
}

#[tokio::test]
async fn missing_api_token_returns_400() {
    let upstream = Server::new_async().await;
    let server = create_test_server(&upstream.url());

    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&json!({ "orgId": "abc123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn empty_fields_return_400() {
    let upstream = Server::new_async().await;
    let server = create_test_server(&upstream.url());

    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&json!({ "orgId": "", "apiToken": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Organization ID and API Token are required");
}

#[tokio::test]
async fn upstream_404_is_forwarded() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("GET", "/orgs/abc123/issues")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(json!({ "errors": [{ "detail": "Org not found" }] }).to_string())
        .expect(1)
        .create_async()
        .await;

    let server = create_test_server(&upstream.url());
    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&check_request("abc123"))
        .await;

    mock.assert_async().await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to fetch vulnerabilities from Snyk API: 404 Not Found"
    );
}

#[tokio::test]
async fn missing_data_list_returns_500() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("GET", "/orgs/abc123/issues")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "jsonapi": { "version": "1.0" } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let server = create_test_server(&upstream.url());
    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&check_request("abc123"))
        .await;

    mock.assert_async().await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Unexpected response structure from Snyk API");
}

#[tokio::test]
async fn issues_are_normalized_with_fix_sentinel() {
    let mut upstream = Server::new_async().await;
    let upstream_body = json!({
        "data": [
            {
                "id": "SNYK-JS-LODASH-1040724",
                "type": "issue",
                "attributes": {
                    "title": "Prototype Pollution",
                    "severity": "high",
                    "description": "Affected versions of lodash are vulnerable.",
                    "product": "Snyk Open Source",
                    "project_name": "acme/webapp",
                    "package_name": "lodash",
                    "version": "4.17.20",
                    "exploit_maturity": "Proof of Concept",
                    "fix_info": { "steps": ["upgrade to 2.0"] }
                }
            },
            {
                "id": "SNYK-JS-MINIMIST-559764",
                "type": "issue",
                "attributes": {
                    "title": "Prototype Pollution",
                    "severity": "medium",
                    "description": "minimist can be tricked into adding properties.",
                    "product": "Snyk Open Source",
                    "project_name": "acme/webapp",
                    "package_name": "minimist",
                    "version": "1.2.0",
                    "exploit_maturity": "Mature"
                }
            }
        ]
    });
    let mock = upstream
        .mock("GET", "/orgs/abc123/issues")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("version".into(), "2024-06-10".into()),
            Matcher::UrlEncoded("context[page]".into(), "issues".into()),
            Matcher::UrlEncoded("issue_status".into(), r#"["Open"]"#.into()),
        ]))
        .match_header("authorization", format!("token {}", TEST_TOKEN).as_str())
        .with_status(200)
        .with_body(upstream_body.to_string())
        .expect(1)
        .create_async()
        .await;

    let server = create_test_server(&upstream.url());
    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&check_request("abc123"))
        .await;

    mock.assert_async().await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let vulnerabilities = body["vulnerabilities"].as_array().unwrap();
    assert_eq!(vulnerabilities.len(), 2);

    assert_eq!(vulnerabilities[0]["id"], "SNYK-JS-LODASH-1040724");
    assert_eq!(vulnerabilities[0]["severity"], "high");
    assert_eq!(vulnerabilities[0]["packageName"], "lodash");
    assert_eq!(vulnerabilities[0]["projectName"], "acme/webapp");
    assert_eq!(vulnerabilities[0]["exploitMaturity"], "Proof of Concept");
    assert_eq!(vulnerabilities[0]["fixInfo"], json!(["upgrade to 2.0"]));

    assert_eq!(vulnerabilities[1]["fixInfo"], "No fix information available");
}

#[tokio::test]
async fn api_token_never_appears_in_responses() {
    let mut upstream = Server::new_async().await;
    let _not_found = upstream
        .mock("GET", "/orgs/abc123/issues")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(json!({ "errors": [{ "detail": "Invalid auth token" }] }).to_string())
        .create_async()
        .await;

    let server = create_test_server(&upstream.url());
    let response = server
        .post("/api/snyk-vulnerabilities")
        .json(&check_request("abc123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(!response.text().contains(TEST_TOKEN));
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let upstream = Server::new_async().await;
    let server = create_test_server(&upstream.url());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}
