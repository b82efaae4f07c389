//! Telegram client against a fake Bot API.

use axum::http::StatusCode;
use leadline_client::{http_client, ChatNotifier, TelegramClient};

use crate::common::FakeService;

#[tokio::test]
async fn test_posts_html_message_to_chat() {
    let fake = FakeService::start(StatusCode::OK).await;
    let client = TelegramClient::new(http_client().unwrap(), fake.url(), "123:abc", "@leads");

    client.post("<b>New lead</b>").await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/bot123:abc/sendMessage");
    assert_eq!(requests[0].body["chat_id"], "@leads");
    assert_eq!(requests[0].body["text"], "<b>New lead</b>");
    assert_eq!(requests[0].body["parse_mode"], "HTML");
}

#[tokio::test]
async fn test_bad_request_is_reported() {
    let fake = FakeService::start(StatusCode::BAD_REQUEST).await;
    let client = TelegramClient::new(http_client().unwrap(), fake.url(), "123:abc", "@leads");

    let err = client.post("hi").await.unwrap_err();
    assert_eq!(err.service(), Some("telegram"));
    assert!(err.to_string().contains("400"));
}
