//! 上游配置：Cataas base URL、请求超时、结果条目的来源。从环境变量加载。

use anyhow::Result;
use cat_handlers::{EveryNth, ItemSource, StillOnly};
use cataas_client::{CataasClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// CATAAS_SOURCE 选择的条目来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Template,
    Lookup,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(SourceKind::Template),
            "lookup" => Ok(SourceKind::Lookup),
            other => anyhow::bail!("CATAAS_SOURCE must be `template` or `lookup`, got `{}`", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CataasConfig {
    /// CATAAS_BASE_URL
    pub base_url: String,
    /// CATAAS_TIMEOUT_SECS
    pub timeout_secs: u64,
    /// CATAAS_SOURCE
    pub source: SourceKind,
    /// CATAAS_GIF_EVERY；仅对 template 来源生效
    pub gif_every: Option<usize>,
}

impl Default for CataasConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            source: SourceKind::Template,
            gif_every: None,
        }
    }
}

impl CataasConfig {
    /// 从环境变量加载；未设置的变量使用默认值。
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let base_url = env::var("CATAAS_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_secs = match env::var("CATAAS_TIMEOUT_SECS") {
            Ok(s) => s
                .parse()
                .map_err(|_| anyhow::anyhow!("CATAAS_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => defaults.timeout_secs,
        };
        let source = match env::var("CATAAS_SOURCE") {
            Ok(s) => s.parse()?,
            Err(_) => defaults.source,
        };
        let gif_every = match env::var("CATAAS_GIF_EVERY") {
            Ok(s) => Some(
                s.parse()
                    .map_err(|_| anyhow::anyhow!("CATAAS_GIF_EVERY is not a number: {}", s))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            base_url,
            timeout_secs,
            source,
            gif_every,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("CATAAS_BASE_URL is not a valid URL: {}: {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("CATAAS_BASE_URL must be http or https: {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("CATAAS_TIMEOUT_SECS must be greater than 0");
        }
        if self.gif_every == Some(0) {
            anyhow::bail!("CATAAS_GIF_EVERY must be greater than 0");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn build_client(&self) -> Result<CataasClient> {
        let base_url = Url::parse(&self.base_url)?;
        Ok(CataasClient::with_timeout(base_url, self.timeout())?)
    }

    /// 聚合器使用的条目来源。template 按 CATAAS_GIF_EVERY 区分动图，未设置则全部为静态图。
    pub fn item_source(&self) -> ItemSource {
        match self.source {
            SourceKind::Lookup => ItemSource::Lookup,
            SourceKind::Template => match self.gif_every.and_then(EveryNth::new) {
                Some(every) => ItemSource::Template(Arc::new(every)),
                None => ItemSource::Template(Arc::new(StillOnly)),
            },
        }
    }
}
