//! Handlers for the `serve` and `check` commands.

use std::io::Write;
use std::net::SocketAddr;

use leadline_api::{AppState, Server};
use leadline_core::submission::parse_leading_int;
use leadline_core::{classify, Config, SpamVerdict, Submission};

use crate::Result;

/// Run the HTTP server until a shutdown signal arrives.
pub async fn cmd_serve(config: Config, bind: SocketAddr) -> Result<()> {
    tracing::info!(
        site = %config.site.name,
        notify = %config.notify,
        crm = config.crm_enabled(),
        "starting leadline"
    );
    let state = AppState::from_config(config)?;
    Server::new(state, bind).run().await?;
    Ok(())
}

/// Classify hand-entered fields and print the verdict.
///
/// Fields are read the way the contact endpoint reads them: only an empty
/// value counts as absent.
pub fn cmd_check(
    name: Option<String>,
    fax: Option<String>,
    timestamp: Option<String>,
    out: &mut impl Write,
) -> Result<SpamVerdict> {
    let submission = Submission {
        name: present(name),
        honeypot: present(fax),
        rendered_at_ms: timestamp.as_deref().and_then(parse_leading_int),
        ..Submission::default()
    };

    let verdict = classify(&submission);
    match verdict {
        SpamVerdict::Spam(reason) => writeln!(out, "spam: {reason}")?,
        SpamVerdict::NotSpam => writeln!(out, "not spam")?,
    }
    Ok(verdict)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
