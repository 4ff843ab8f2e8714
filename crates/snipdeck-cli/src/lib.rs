//! Command-line adapter for snipdeck.
//!
//! `main.rs` parses arguments, calls [`bootstrap`] once, and routes each
//! command to a handler in [`handlers`]. Handlers only talk to the
//! [`snipdeck_core::AppCore`] held by [`CliContext`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod auth;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use auth::AdminPolicy;
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{CategoryCommand, Commands, SourceArgs, TagCommand};
pub use error::CliError;
pub use parser::Cli;
