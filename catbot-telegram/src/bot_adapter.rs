//! Wraps teloxide::Bot for the two replies the cat bot sends: inline answers and the plain-text
//! "inline only" notice.

use catbot_core::{BotError, InlineAnswer, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineQuery};
use tracing::debug;

use crate::adapters::to_telegram_results;

/// Thin wrapper around teloxide::Bot.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Answers `query` with the results, personal flag and cache time of `answer`.
    pub async fn answer_inline(&self, query: &InlineQuery, answer: &InlineAnswer) -> Result<()> {
        let results = to_telegram_results(answer);
        debug!(results = results.len(), "Answering inline query");

        let mut req = self.bot.answer_inline_query(query.id.clone(), results);
        req.cache_time = Some(answer.cache_time);
        req.is_personal = Some(answer.is_personal);

        req.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Sends a plain text message to the given chat.
    pub async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot
            .send_message(chat_id, text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
