//! Application wiring: one CataasClient, CatService and InlineCatHandler per process, shared by `Arc`.

use anyhow::Result;
use cat_handlers::{CatService, InlineCatHandler};
use catbot_core::{init_tracing, InlineHandler};
use catbot_telegram::run_dispatcher;
use std::sync::Arc;
use teloxide::prelude::Requester;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Builds the inline handler stack from config: client -> aggregator -> responder.
pub fn build_inline_handler(config: &BotConfig) -> Result<Arc<dyn InlineHandler>> {
    let client = config.cataas.build_client()?;
    let source = config.cataas.item_source();
    info!(
        base_url = %client.base_url(),
        timeout_secs = config.cataas.timeout_secs,
        source = source.name(),
        "Cataas client ready"
    );
    let service = CatService::new(Arc::new(client)).with_source(source);
    Ok(Arc::new(InlineCatHandler::new(Arc::new(service))))
}

/// Main entry: validate config, init logging, build handler, then run the dispatcher until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let mode = config.telegram.update_mode()?;
    let handler = build_inline_handler(&config)?;
    let bot = config.telegram.build_bot()?;

    let me = bot.get_me().await?;
    info!(username = ?me.username, "Authorized on account");

    run_dispatcher(bot, handler, mode).await
}
