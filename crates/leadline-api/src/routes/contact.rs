//! `POST /api/contact`

use axum::extract::State;
use axum::http::header::ACCEPT;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use leadline_core::{classify, SpamVerdict, Submission};
use serde::Serialize;
use uuid::Uuid;

use crate::body::Payload;
use crate::relay::{relay_inquiry, report};
use crate::state::AppState;
use crate::Result;

/// Message in the JSON acknowledgement.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";

#[derive(Serialize)]
struct Ack {
    success: bool,
    message: &'static str,
}

/// Accept a contact-form submission.
///
/// Spam gets the same acknowledgement as a real lead so bots learn nothing.
#[tracing::instrument(name = "contact", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(submission): Payload<Submission>,
) -> Result<Response> {
    process(&state, &headers, &submission)
        .await
        .inspect_err(|e| {
            if e.status().is_server_error() {
                tracing::error!(
                    submitter_name = ?submission.name,
                    submitter_email = ?submission.email,
                    error = %e,
                    "contact submission failed"
                );
            }
        })
}

async fn process(
    state: &AppState,
    headers: &HeaderMap,
    submission: &Submission,
) -> Result<Response> {
    if let SpamVerdict::Spam(reason) = classify(submission) {
        tracing::info!(
            reason = %reason,
            submitter_name = ?submission.name,
            submitter_email = ?submission.email,
            "spam blocked"
        );
        return acknowledge(state, headers, submission.name.as_deref());
    }

    let inquiry = submission.validate()?;
    tracing::info!(
        submitter_name = %inquiry.name,
        service = ?inquiry.service,
        "new lead"
    );

    let deliveries = relay_inquiry(state, &inquiry).await;
    report(&deliveries);

    acknowledge(state, headers, Some(&inquiry.name))
}

fn acknowledge(state: &AppState, headers: &HeaderMap, name: Option<&str>) -> Result<Response> {
    if wants_html(headers) {
        let page = state.templates.success_page(&state.config.site, name)?;
        return Ok(Html(page).into_response());
    }
    Ok(Json(Ack {
        success: true,
        message: SUCCESS_MESSAGE,
    })
    .into_response())
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}
