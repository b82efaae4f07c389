//! SuperTool client against a fake leads API.

use axum::http::StatusCode;
use leadline_client::{http_client, LeadSink, SuperToolClient};
use leadline_core::{ContactLead, EventLead, Inquiry, LeadRecord, TrackingEvent};

use crate::common::FakeService;

fn contact_lead() -> LeadRecord {
    let inquiry = Inquiry {
        name: "Jane Doe".into(),
        email: None,
        phone: Some("801-555-0100".into()),
        city: None,
        service: Some("Panel upgrade".into()),
        message: "Quote please".into(),
    };
    ContactLead::from_inquiry(&inquiry, "Osborne Electric").into()
}

#[tokio::test]
async fn test_posts_contact_lead_under_tenant() {
    let fake = FakeService::start(StatusCode::CREATED).await;
    let client = SuperToolClient::new(http_client().unwrap(), fake.url(), "tenant-42");

    client.submit(&contact_lead()).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/public/leads/tenant-42");
    assert_eq!(requests[0].body["source"], "website");
    assert_eq!(requests[0].body["metadata"]["form"], "contact");
    assert!(requests[0].body["email"].is_null());
}

#[tokio::test]
async fn test_posts_event_lead() {
    let fake = FakeService::start(StatusCode::OK).await;
    let client = SuperToolClient::new(http_client().unwrap(), fake.url(), "tenant-42");
    let event = TrackingEvent {
        event: Some("phone_click".into()),
        phone: Some("(801) 885-4521".into()),
        page: Some("/".into()),
        timestamp: Some("2026-01-01T00:00:00Z".into()),
    };

    client
        .submit(&EventLead::phone_click(&event, "Osborne Electric").into())
        .await
        .unwrap();

    let body = &fake.requests()[0].body;
    assert_eq!(body["formName"], "phone_click");
    assert_eq!(body["firstName"], "Phone");
    assert_eq!(body["sourceSite"], "Osborne Electric");
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let fake = FakeService::start(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = SuperToolClient::new(http_client().unwrap(), fake.url(), "tenant-42");

    let err = client.submit(&contact_lead()).await.unwrap_err();
    assert_eq!(err.service(), Some("supertool"));
}
