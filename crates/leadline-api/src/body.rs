//! Request body extraction.
//!
//! Forms post either JSON (from page scripts) or url-encoded fields (native
//! `<form>` submits). [`Payload`] accepts both: url-encoded when the request
//! says so, JSON otherwise regardless of the declared content type.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::de::DeserializeOwned;

use crate::Error;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request body parsed into `T`.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| Error::body(e.body_text()))?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::body(e.body_text()))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| Error::body(e.to_string()))?;
        Ok(Self(value))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().starts_with(FORM_CONTENT_TYPE))
}
