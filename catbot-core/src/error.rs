use thiserror::Error;

/// Top-level error for the bot transport layer (Telegram requests).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
