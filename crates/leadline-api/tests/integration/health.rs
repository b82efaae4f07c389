//! `GET /health`

use std::sync::Arc;

use axum::http::StatusCode;
use leadline_api::{router, AppState, Outbound};
use leadline_client::MockOutbound;
use leadline_core::{Config, NotifyBackend};

use crate::common::{app_with, bare_app, request, send};

#[tokio::test]
async fn test_health_defaults() {
    let reply = send(bare_app(), request("GET", "/health")).await;

    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "leadline");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["notify"], "email");
    assert_eq!(body["crm"], false);
}

#[tokio::test]
async fn test_health_reports_backend_and_crm() {
    let config = Config {
        notify: NotifyBackend::Both,
        ..Config::default()
    };
    let mock = Arc::new(MockOutbound::new());
    let outbound = Outbound {
        crm: Some(mock),
        ..Outbound::default()
    };
    let app = router(AppState::new(config, outbound).unwrap());

    let body = send(app, request("GET", "/health")).await.json();

    assert_eq!(body["notify"], "both");
    assert_eq!(body["crm"], true);
}

#[tokio::test]
async fn test_health_rejects_post() {
    let mock = Arc::new(MockOutbound::new());
    let reply = send(app_with(&mock), request("POST", "/health")).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
}
