//! Request schemas for the contact and track endpoints.
//!
//! Browsers post these either as JSON or as url-encoded forms, and the
//! field types are whatever the page script happened to send. Parsing is
//! therefore lenient: every text field is optional, numbers are accepted
//! where text is expected, and blank values count as absent. Required
//! fields are enforced afterwards by [`Submission::validate`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Message used when a contact submission lacks its required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and message are required";

/// A contact-form submission as received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    /// Submitter name (required after validation).
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Submitter email.
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    /// Submitter phone.
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    /// City the work is in.
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    /// Requested service.
    #[serde(default, deserialize_with = "lenient_text")]
    pub service: Option<String>,
    /// Free-form message (required after validation).
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    /// Honeypot field; hidden from people, filled in by bots.
    #[serde(default, rename = "fax_number", deserialize_with = "lenient_text")]
    pub honeypot: Option<String>,
    /// When the form was rendered, in milliseconds since the Unix epoch.
    #[serde(default, rename = "_timestamp", deserialize_with = "lenient_millis")]
    pub rendered_at_ms: Option<i64>,
}

impl Submission {
    /// Check the required fields and produce an [`Inquiry`].
    pub fn validate(&self) -> Result<Inquiry> {
        match (&self.name, &self.message) {
            (Some(name), Some(message)) => Ok(Inquiry {
                name: name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                city: self.city.clone(),
                service: self.service.clone(),
                message: message.clone(),
            }),
            _ => Err(Error::validation(REQUIRED_FIELDS_MESSAGE)),
        }
    }
}

/// A contact submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: Option<String>,
    /// Submitter phone.
    pub phone: Option<String>,
    /// City the work is in.
    pub city: Option<String>,
    /// Requested service.
    pub service: Option<String>,
    /// Free-form message.
    pub message: String,
}

/// A click-tracking event posted by the site's scripts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TrackingEvent {
    /// Event name, e.g. `phone_click`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub event: Option<String>,
    /// Phone number that was clicked.
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    /// Page the click happened on.
    #[serde(default, deserialize_with = "lenient_text")]
    pub page: Option<String>,
    /// Client-side timestamp, passed through verbatim.
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
}

// ============================================================================
// Lenient field parsing
// ============================================================================

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

fn lenient_millis<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(&s),
        _ => None,
    }))
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse the leading integer of `s`, ignoring anything after the digits.
///
/// `"1700000000000"` and `"1700000000000ms"` both parse; `"soon"` does not.
/// Digit runs too long for `i64` saturate to `i64::MAX` / `i64::MIN`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let limit = if negative { i64::MIN } else { i64::MAX };
    let value = digits[..end].bytes().try_fold(0_i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let next = acc.checked_mul(10)?;
        if negative {
            next.checked_sub(digit)
        } else {
            next.checked_add(digit)
        }
    });
    Some(value.unwrap_or(limit))
}
