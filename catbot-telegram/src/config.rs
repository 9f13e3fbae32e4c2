//! Telegram 接入最小配置：token、可选 Bot API URL、可选 webhook。
//! 从环境变量 BOT_TOKEN、TELEGRAM_API_URL（或 TELOXIDE_API_URL）、WEBHOOK_URL、WEBHOOK_PORT 加载。

use anyhow::Result;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// 未配置 webhook 时使用的长轮询超时。
pub const POLLING_TIMEOUT: Duration = Duration::from_secs(60);
/// 未设置 WEBHOOK_PORT 时 webhook 监听的端口。
pub const DEFAULT_WEBHOOK_PORT: u16 = 80;

/// 更新的获取方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateMode {
    LongPolling { timeout: Duration },
    /// Telegram 向 `url` 推送更新；本地监听 `address`。
    Webhook { url: Url, address: SocketAddr },
}

/// Telegram 接入配置。
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub webhook_url: Option<String>,
    pub webhook_port: u16,
}

impl TelegramConfig {
    /// 从环境变量加载：`token` 优先于 BOT_TOKEN，二者至少有一个。
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("No Telegram token provided");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty());
        let webhook_port = match env::var("WEBHOOK_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("WEBHOOK_PORT is not a valid port: {}", port))?,
            Err(_) => DEFAULT_WEBHOOK_PORT,
        };
        Ok(Self {
            bot_token,
            telegram_api_url,
            webhook_url,
            webhook_port,
        })
    }

    /// 使用给定 token 构造，其余为默认值（长轮询）。
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            webhook_url: None,
            webhook_port: DEFAULT_WEBHOOK_PORT,
        }
    }

    /// 校验 URL；需在构建 Bot 之前调用。
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        self.update_mode()?;
        Ok(())
    }

    /// 设置了 WEBHOOK_URL 时为 webhook 模式，否则长轮询。
    pub fn update_mode(&self) -> Result<UpdateMode> {
        match &self.webhook_url {
            None => Ok(UpdateMode::LongPolling {
                timeout: POLLING_TIMEOUT,
            }),
            Some(url_str) => {
                let url = Url::parse(url_str)
                    .map_err(|e| anyhow::anyhow!("WEBHOOK_URL is not a valid URL: {}: {}", url_str, e))?;
                let address = SocketAddr::from(([0, 0, 0, 0], self.webhook_port));
                Ok(UpdateMode::Webhook { url, address })
            }
        }
    }

    /// 构建 teloxide Bot；设置了自定义 API URL 时指向该地址。
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url_str) => Ok(bot.set_api_url(Url::parse(url_str)?)),
            None => Ok(bot),
        }
    }
}
