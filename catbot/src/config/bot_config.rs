//! BotConfig: TelegramConfig + CataasConfig + log file. Use load() for env-based loading.

use anyhow::Result;
use catbot_telegram::TelegramConfig;
use std::env;

use super::CataasConfig;

const DEFAULT_LOG_FILE: &str = "logs/catbot.log";

/// Bot config. Use BotConfig::load() for env-based loading, then validate().
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub cataas: CataasConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let cataas = CataasConfig::from_env()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            telegram,
            cataas,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.cataas.validate()
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}
