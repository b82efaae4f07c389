//! Handler for the `config` command.

use std::io::Write;

use leadline_core::Config;

use crate::Result;

/// Write `config` as environment variable assignments, one per line.
///
/// With `docker_env` each line is prefixed with `--env ` so the output can be
/// pasted into a `docker run` invocation. Secrets are redacted.
pub fn cmd_config_export(config: &Config, docker_env: bool, out: &mut impl Write) -> Result<()> {
    for (key, value) in config.to_env_vars() {
        if docker_env {
            writeln!(out, "--env {key}={value}")?;
        } else {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}
