//! Method and CORS handling shared by the `/api` endpoints.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::StatusCode;
use serde_json::json;

use crate::common::{bare_app, post_json, request, send, Reply};

const ENDPOINTS: [&str; 2] = ["/api/contact", "/api/track"];

fn assert_cors(reply: &Reply) {
    assert_eq!(reply.headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(reply.headers[ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(reply.headers[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn test_options_is_empty_200() {
    for uri in ENDPOINTS {
        let reply = send(bare_app(), request("OPTIONS", uri)).await;
        assert_eq!(reply.status, StatusCode::OK, "{uri}");
        assert!(reply.body.is_empty(), "{uri}");
        assert_cors(&reply);
    }
}

#[tokio::test]
async fn test_get_is_405() {
    for uri in ENDPOINTS {
        let reply = send(bare_app(), request("GET", uri)).await;
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(reply.json(), json!({"error": "Method not allowed"}));
        assert_cors(&reply);
    }
}

#[tokio::test]
async fn test_put_and_delete_are_405() {
    for method in ["PUT", "DELETE", "PATCH"] {
        let reply = send(bare_app(), request(method, "/api/contact")).await;
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn test_error_responses_carry_cors() {
    let reply = send(bare_app(), post_json("/api/contact", &json!({}), None)).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_cors(&reply);
}

#[tokio::test]
async fn test_success_responses_carry_cors() {
    let reply = send(bare_app(), post_json("/api/track", &json!({}), None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_cors(&reply);
}
