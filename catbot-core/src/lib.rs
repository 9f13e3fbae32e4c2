//! # catbot-core
//!
//! Core types and traits for the inline cat bot: [`InlineHandler`], inline query events, result items,
//! inline answers, the core error type and tracing initialization. Transport-agnostic; used by
//! cat-handlers and catbot-telegram.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    InlineAnswer, InlineHandler, InlineQueryEvent, InlineResult, MediaKind, ResultItem, ToCoreQuery,
    ToCoreUser, User,
};
