//! `POST /api/track` end to end.

use std::sync::Arc;

use axum::http::StatusCode;
use leadline_client::MockOutbound;
use serde_json::json;

use crate::common::{app_with, bare_app, post_json, send};

#[tokio::test]
async fn test_event_is_forwarded_as_phone_click() {
    let mock = Arc::new(MockOutbound::new());
    let body = json!({
        "event": "phone_click",
        "phone": "(801) 885-4521",
        "page": "/services",
        "timestamp": "2026-01-01T12:00:00Z",
    });

    let reply = send(app_with(&mock), post_json("/api/track", &body, None)).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({"success": true}));

    let leads = mock.leads();
    assert_eq!(leads.len(), 1);
    let record = serde_json::to_value(&leads[0]).unwrap();
    assert_eq!(record["formName"], "phone_click");
    assert_eq!(record["firstName"], "Phone");
    assert_eq!(record["sourceUrl"], "/services");
    assert_eq!(
        record["message"],
        "Phone number (801) 885-4521 clicked on /services at 2026-01-01T12:00:00Z"
    );
}

#[tokio::test]
async fn test_crm_failure_still_succeeds() {
    let mock = Arc::new(MockOutbound::failing());
    let body = json!({"event": "phone_click", "page": "/"});

    let reply = send(app_with(&mock), post_json("/api/track", &body, None)).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({"success": true}));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_without_crm_still_succeeds() {
    let reply = send(bare_app(), post_json("/api/track", &json!({}), None)).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({"success": true}));
}

#[tokio::test]
async fn test_track_sends_no_notifications() {
    let mock = Arc::new(MockOutbound::new());
    let body = json!({"event": "phone_click"});

    send(app_with(&mock), post_json("/api/track", &body, None)).await;

    assert!(mock.emails().is_empty());
    assert!(mock.chat_messages().is_empty());
}
