//! Router behavior that does not depend on a live database.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn malformed_property_body_is_bad_request() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(json_request(Method::POST, "/api/properties", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Bad request."));
}

#[tokio::test]
async fn property_without_content_type_is_bad_request() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/properties")
                .body(Body::from(r#"{"id":"p-1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn property_with_empty_id_fails_validation() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(json_request(Method::POST, "/api/properties", r#"{"id":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Bad request. Check your request data.");
    assert!(body["details"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn empty_property_update_is_rejected_before_the_database() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(json_request(Method::PUT, "/api/properties/p-1", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Bad request. Property data is required.");
}

#[tokio::test]
async fn property_update_with_only_object_id_is_empty() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/properties/p-1",
            r#"{"_id":"65a1f0c2e4b0a1b2c3d4e5f6"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Bad request. Property data is required.");
}

#[tokio::test]
async fn app_state_id_must_be_a_string() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/viewPropertiesToggleState",
            r#"{"id":7,"viewMode":"grid"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Bad request."));
}

#[tokio::test]
async fn empty_app_state_update_is_rejected() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/viewPropertiesToggleState/toggle",
            "{}",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Bad request. App State data is required.");
}

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/.well-known/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert_eq!(doc["info"]["title"], "Real Estate Manager API");
    assert_eq!(doc["info"]["version"], "1.0.0");

    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/properties",
        "/api/properties/{id}",
        "/api/pages",
        "/api/support",
        "/api/viewPropertiesToggleState",
        "/api/viewPropertiesToggleState/{id}",
        "/health",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(paths["/api/properties/{id}"]["delete"].is_object());

    let schemas = doc["components"]["schemas"].as_object().unwrap();
    for schema in ["PropertyRequest", "PropertyResponse", "AppStateRequest", "ViewMode"] {
        assert!(schemas.contains_key(schema), "missing schema {}", schema);
    }
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/properties/p-1")
                .method(Method::PUT)
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-request-id", "req-42")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-42");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/properties")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn readiness_fails_without_database() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn metrics_endpoint_serves_plain_text() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = common::offline_router().await;

    let response = app
        .oneshot(Request::builder().uri("/api/agents").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
