//! # Cat bot application
//!
//! Wires cataas-client, cat-handlers and catbot-telegram: loads config from env, builds the client,
//! aggregator and inline handler once, and runs the dispatcher.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{BotConfig, CataasConfig, SourceKind};
pub use runner::{build_inline_handler, run_bot};
