//! Bot configuration: TelegramConfig (token, API URL, webhook) + CataasConfig (upstream, item source) + log file.

mod bot_config;
mod cataas;


pub use bot_config::BotConfig;
pub use cataas::{CataasConfig, SourceKind};
