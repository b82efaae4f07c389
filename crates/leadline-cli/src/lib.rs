//! # leadline-cli
//!
//! Command-line entry point for Leadline.
//!
//! - `leadline serve` runs the HTTP relay
//! - `leadline config` prints the resolved configuration
//! - `leadline check` runs the spam screen on hand-entered fields

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;

pub use cli::{Args, Command, ConfigArgs};
pub use error::{Error, Result};
