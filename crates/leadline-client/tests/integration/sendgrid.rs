//! SendGrid client against a fake mail-send endpoint.

use axum::http::StatusCode;
use leadline_client::{http_client, EmailSender, Error, OutboundEmail, SendGridClient};

use crate::common::{unreachable_url, FakeService};

fn email() -> OutboundEmail {
    OutboundEmail {
        to: "jane@example.com".into(),
        from: "leads@gullstack.com".into(),
        reply_to: None,
        subject: "Thanks for contacting Osborne Electric!".into(),
        html: "<h1>Thank You, Jane!</h1>".into(),
    }
}

#[tokio::test]
async fn test_sends_bearer_authenticated_payload() {
    let fake = FakeService::start(StatusCode::ACCEPTED).await;
    let client = SendGridClient::new(
        http_client().unwrap(),
        "SG.test-key",
        format!("{}/v3/mail/send", fake.url()),
    );

    client.send(&email()).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v3/mail/send");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer SG.test-key"));
    assert_eq!(
        requests[0].body["personalizations"][0]["to"][0]["email"],
        "jane@example.com"
    );
    assert_eq!(requests[0].body["content"][0]["type"], "text/html");
}

#[tokio::test]
async fn test_rejection_is_status_error() {
    let fake = FakeService::start(StatusCode::UNAUTHORIZED).await;
    let client = SendGridClient::new(http_client().unwrap(), "bad", fake.url());

    let err = client.send(&email()).await.unwrap_err();
    let Error::Status { service, status, .. } = err else {
        unreachable!("expected status error, got {err:?}");
    };
    assert_eq!(service, "sendgrid");
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_unreachable_is_http_error() {
    let client = SendGridClient::new(http_client().unwrap(), "key", unreachable_url());
    let err = client.send(&email()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
