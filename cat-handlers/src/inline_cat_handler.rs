//! Inline 查询 Handler：从查询文本得到 caption，向 [`CatService`] 请求一批图片，并把结果映射为 inline 结果。
//! 失败时返回单条可见的错误 article。

use async_trait::async_trait;
use catbot_core::{InlineAnswer, InlineHandler, InlineQueryEvent, InlineResult, MediaKind, ResultItem};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::error::ServiceError;
use crate::request::{ImageRequest, MAX_RESULTS};
use crate::service::CatService;

/// 缩略图宽度，同时作为结果宽度上报
pub const THUMB_WIDTH: u32 = 100;
/// 缩略图高度
pub const THUMB_HEIGHT: u32 = 100;
/// 原图上的 caption 字号
pub const CAPTION_SIZE: u32 = 50;
pub const CACHE_TIME_SECS: u32 = 1;
pub const ERROR_RESULT_ID: &str = "1";
pub const ERROR_TITLE: &str = "Error";

/// 去除首尾空白；只有空白字符时视为无 caption。
pub fn caption_from_query(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 用猫图回答 inline 查询。无状态，一个实例服务所有并发查询。
#[derive(Clone)]
pub struct InlineCatHandler {
    service: Arc<CatService>,
}

impl InlineCatHandler {
    pub fn new(service: Arc<CatService>) -> Self {
        Self { service }
    }

    /// 为 `query_text` 构建完整回答，不会失败。
    pub async fn respond(&self, query_text: &str) -> InlineAnswer {
        let caption = caption_from_query(query_text);

        let results = match self.fetch(caption).await {
            Ok(items) => items.into_iter().map(to_inline_result).collect(),
            Err(e) => {
                error!(error = %e, "Cat batch failed, answering with error result");
                vec![error_result(&e)]
            }
        };

        InlineAnswer::personal(results, CACHE_TIME_SECS)
    }

    async fn fetch(&self, caption: Option<String>) -> Result<Vec<ResultItem>, ServiceError> {
        let request = ImageRequest::new(MAX_RESULTS)?
            .with_caption(caption)
            .with_caption_size(CAPTION_SIZE)
            .with_thumb_size(THUMB_WIDTH, THUMB_HEIGHT);
        self.service.get_cats(&request).await
    }
}

fn to_inline_result(item: ResultItem) -> InlineResult {
    match item.kind {
        MediaKind::Still => InlineResult::Photo {
            id: item.id,
            photo_url: item.full_url,
            thumb_url: item.thumb_url,
            width: THUMB_WIDTH,
            height: THUMB_HEIGHT,
        },
        MediaKind::Animated => InlineResult::Gif {
            id: item.id,
            gif_url: item.full_url,
            thumb_url: item.thumb_url,
            width: THUMB_WIDTH,
            height: THUMB_HEIGHT,
        },
    }
}

fn error_result(err: &ServiceError) -> InlineResult {
    InlineResult::Article {
        id: ERROR_RESULT_ID.to_string(),
        title: ERROR_TITLE.to_string(),
        text: err.to_string(),
    }
}

#[async_trait]
impl InlineHandler for InlineCatHandler {
    #[instrument(skip(self, query), fields(query_id = %query.id, user_id = query.user.id))]
    async fn handle_inline(&self, query: &InlineQueryEvent) -> InlineAnswer {
        info!(
            query_preview = %query.query.chars().take(50).collect::<String>(),
            "step: inline query dispatched"
        );

        let answer = self.respond(&query.query).await;

        info!(results = answer.results.len(), "step: inline query completed");
        answer
    }
}
