//! `POST /api/track`

use axum::extract::State;
use axum::Json;
use leadline_core::TrackingEvent;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::body::Payload;
use crate::relay::{relay_event, report};
use crate::state::AppState;

/// Record a click-tracking event and forward it to the CRM.
#[tracing::instrument(name = "track", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn record(
    State(state): State<AppState>,
    Payload(event): Payload<TrackingEvent>,
) -> Json<Value> {
    tracing::info!(
        event = ?event.event,
        phone = ?event.phone,
        page = ?event.page,
        "tracking event"
    );

    let deliveries = relay_event(&state, &event).await;
    report(&deliveries);

    Json(json!({ "success": true }))
}
