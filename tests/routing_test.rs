mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{call, empty_request, json_request, offline_app};

const API_ROUTES: [&str; 6] = [
    "/api/signup",
    "/api/verify",
    "/api/community-join",
    "/api/leaderboard",
    "/api/send-bulk-emails",
    "/api/retry-failed-emails",
];

#[tokio::test]
async fn test_health_check() {
    let app = offline_app();
    let response = call(&app, empty_request(Method::GET, "/health")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"OK");
}

#[tokio::test]
async fn test_options_preflight_on_every_route() {
    let app = offline_app();

    for route in API_ROUTES {
        let response = call(&app, empty_request(Method::OPTIONS, route)).await;

        assert_eq!(response.status, StatusCode::OK, "OPTIONS {}", route);
        assert!(response.body.is_empty(), "OPTIONS {} body", route);
        assert_eq!(
            response.headers.get("access-control-allow-origin").unwrap(),
            "*",
            "OPTIONS {}",
            route
        );
        assert!(response.headers.contains_key("access-control-allow-methods"));
        assert!(response.headers.contains_key("access-control-allow-headers"));
    }
}

#[tokio::test]
async fn test_browser_preflight() {
    let app = offline_app();
    let request = axum::http::Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/community-join")
        .header("origin", "https://networth.acepyr.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = call(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());
    let methods = response
        .headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_wrong_methods_rejected() {
    let app = offline_app();
    let cases = [
        (Method::DELETE, "/api/signup"),
        (Method::GET, "/api/signup"),
        (Method::POST, "/api/verify"),
        (Method::PUT, "/api/community-join"),
        (Method::POST, "/api/leaderboard"),
        (Method::POST, "/api/send-bulk-emails"),
        (Method::PATCH, "/api/retry-failed-emails"),
    ];

    for (method, route) in cases {
        let response = call(&app, empty_request(method.clone(), route)).await;

        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {}",
            method,
            route
        );
        assert_eq!(response.json()["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_signup_requires_email() {
    let app = offline_app();

    let response = call(&app, json_request(Method::POST, "/api/signup", json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Email is required");

    let response = call(
        &app,
        json_request(Method::POST, "/api/signup", json!({ "email": "not-an-email" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Invalid email address");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = offline_app();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/signup")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = call(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Invalid request body");
}

#[tokio::test]
async fn test_community_join_requires_handle() {
    let app = offline_app();

    for body in [json!({}), json!({ "userXHandle": "@" }), json!({ "userXHandle": "  " })] {
        let response = call(
            &app,
            json_request(Method::POST, "/api/community-join", body.clone()),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(response.json()["error"], "X handle is required");
    }
}

#[tokio::test]
async fn test_verify_requires_token() {
    let app = offline_app();

    for uri in ["/api/verify", "/api/verify?token=", "/api/verify?token=%20%20"] {
        let response = call(&app, empty_request(Method::GET, uri)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.json()["error"], "Verification token is required");
    }
}

#[tokio::test]
async fn test_batch_endpoints_require_admin_token() {
    let app = offline_app();

    for route in ["/api/send-bulk-emails", "/api/retry-failed-emails"] {
        let response = call(&app, empty_request(Method::GET, route)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", route);

        let request = axum::http::Request::builder()
            .method(Method::GET)
            .uri(route)
            .header("authorization", "Bearer wrong-token")
            .body(axum::body::Body::empty())
            .unwrap();
        let response = call(&app, request).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", route);
    }
}

#[tokio::test]
async fn test_unreachable_database_is_generic_500() {
    let app = offline_app();

    let response = call(&app, empty_request(Method::GET, "/api/leaderboard")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], "Failed to fetch leaderboard");
    assert_eq!(body["details"], "database query failed");
}
