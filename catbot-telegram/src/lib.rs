//! # catbot-telegram
//!
//! Telegram layer for the cat bot: adapters between teloxide and core types, inline answers via
//! [`TelegramBotAdapter`], minimal config, and the dispatcher runner (long polling or webhook).
//! Handles only Telegram connectivity; image selection lives in cat-handlers.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{to_telegram_results, TelegramInlineQueryWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, UpdateMode, DEFAULT_WEBHOOK_PORT, POLLING_TIMEOUT};
pub use runner::{run_dispatcher, INLINE_ONLY_TEXT, WEBHOOK_LISTEN_PATH};
