//! Route table.
//!
//! - `/api/contact` — contact-form submissions ([`contact::submit`])
//! - `/api/track` — click-tracking events ([`track::record`])
//! - `/health` — liveness ([`health::check`])
//!
//! Both `/api` endpoints answer `OPTIONS` preflights, reject other methods
//! with 405, and carry CORS headers on every response.

pub mod contact;
pub mod health;
pub mod track;

use axum::routing::{get, post};
use axum::Router;

use crate::middleware::{cors, method_not_allowed, preflight};
use crate::state::AppState;

/// Build the full router over `state`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/contact",
            post(contact::submit)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/track",
            post(track::record)
                .options(preflight)
                .fallback(method_not_allowed),
        );

    cors(api)
        .route("/health", get(health::check))
        .with_state(state)
}
