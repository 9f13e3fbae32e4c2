//! Dispatcher runner: one consumer pulls updates (long polling or webhook); each inline query is
//! answered in its own spawned task, plain messages get a fixed reply inline.

use anyhow::Result;
use catbot_core::{InlineHandler, ToCoreQuery};
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::InlineQuery;
use teloxide::update_listeners::{webhooks, Polling};
use tracing::{error, info, instrument};
use url::Url;

use super::adapters::TelegramInlineQueryWrapper;
use super::bot_adapter::TelegramBotAdapter;
use super::config::UpdateMode;

/// Path the webhook listener binds, independent of the public WEBHOOK_URL path.
pub const WEBHOOK_LISTEN_PATH: &str = "/";

/// Reply to any non-inline message.
pub const INLINE_ONLY_TEXT: &str = "This bot works only in inline mode";

fn schema() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_inline_query().endpoint(on_inline_query))
        .branch(Update::filter_message().endpoint(on_message))
}

/// Spawns the answer task and returns immediately so the dispatcher keeps consuming updates.
async fn on_inline_query(
    bot: Bot,
    query: InlineQuery,
    handler: Arc<dyn InlineHandler>,
) -> ResponseResult<()> {
    let event = TelegramInlineQueryWrapper(&query).to_core();
    info!(
        query_id = %event.id,
        user_id = event.user.id,
        query = %event.query,
        "Received inline query"
    );

    tokio::spawn(async move {
        let answer = handler.handle_inline(&event).await;
        let adapter = TelegramBotAdapter::new(bot);
        // The platform may have dropped the query by now; a rejected late reply is only logged.
        if let Err(e) = adapter.answer_inline(&query, &answer).await {
            error!(error = %e, query_id = %event.id, "Failed to answer inline query");
        } else {
            info!(
                query_id = %event.id,
                results = answer.results.len(),
                "step: inline query replied"
            );
        }
    });

    Ok(())
}

async fn on_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    info!(chat_id = msg.chat.id.0, "Received message, replying with inline-only notice");
    if let Err(e) = TelegramBotAdapter::new(bot)
        .send_text(msg.chat.id, INLINE_ONLY_TEXT)
        .await
    {
        error!(error = %e, chat_id = msg.chat.id.0, "Failed to send inline-only notice");
    }
    Ok(())
}

/// Telegram posts to `url`; the listener always serves `/` so a reverse proxy may own the public path.
fn webhook_options(address: SocketAddr, url: Url) -> webhooks::Options {
    webhooks::Options::new(address, url).path(WEBHOOK_LISTEN_PATH.to_owned())
}

/// Runs the dispatcher until Ctrl-C. The handler is shared by reference across all inline query tasks.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler: Arc<dyn InlineHandler>,
    mode: UpdateMode,
) -> Result<()> {
    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![handler])
        .enable_ctrlc_handler()
        .build();

    match mode {
        UpdateMode::LongPolling { timeout } => {
            info!(timeout_secs = timeout.as_secs(), "Starting bot in long polling mode");
            bot.delete_webhook().await?;
            let listener = Polling::builder(bot).timeout(timeout).build();
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the polling listener"),
                )
                .await;
        }
        UpdateMode::Webhook { url, address } => {
            info!(
                webhook_url = %url,
                address = %address,
                path = WEBHOOK_LISTEN_PATH,
                "Starting bot in webhook mode"
            );
            let listener = webhooks::axum(bot, webhook_options(address, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the webhook listener"),
                )
                .await;
        }
    }

    info!("Dispatcher stopped");
    Ok(())
}
