//! Shared helpers for driving the router.

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use leadline_api::{router, AppState, Outbound};
use leadline_client::MockOutbound;
use leadline_core::Config;
use serde_json::Value;
use tower::ServiceExt;

pub const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,*/*;q=0.8";

/// Rendered long enough ago to pass the timing check.
pub const RENDERED_AT: i64 = 1_700_000_000_000;

/// A router whose integrations all go to `mock`.
pub fn app_with(mock: &Arc<MockOutbound>) -> Router {
    let outbound = Outbound {
        email: Some(mock.clone()),
        chat: Some(mock.clone()),
        crm: Some(mock.clone()),
    };
    router(AppState::new(Config::default(), outbound).unwrap())
}

/// A router with no integrations configured.
pub fn bare_app() -> Router {
    router(AppState::new(Config::default(), Outbound::default()).unwrap())
}

/// A complete response, body collected.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn send(app: Router, req: Request<Body>) -> Reply {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    Reply {
        status,
        headers,
        body,
    }
}

pub fn post_json(uri: &str, body: &Value, accept: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(accept) = accept {
        builder = builder.header(ACCEPT, accept);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn post_form(uri: &str, body: &'static str, accept: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(accept) = accept {
        builder = builder.header(ACCEPT, accept);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// An address nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
