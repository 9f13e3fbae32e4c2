//! Core types: user, inline query event, result item, inline answer, and the InlineHandler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// An inline query typed by a user into the shared query box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineQueryEvent {
    /// Transport-specific query id; the reply must reference it.
    pub id: String,
    pub user: User,
    /// Raw query text, untrimmed.
    pub query: String,
    pub received_at: DateTime<Utc>,
}

/// Still image vs. animated image; decides which inline result shape is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Still,
    Animated,
}

/// One candidate image produced by the aggregator. Lives for one query/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Unique within a single batch.
    pub id: String,
    pub kind: MediaKind,
    pub full_url: Url,
    pub thumb_url: Url,
}

/// Transport-agnostic inline result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineResult {
    Photo {
        id: String,
        photo_url: Url,
        thumb_url: Url,
        width: u32,
        height: u32,
    },
    Gif {
        id: String,
        gif_url: Url,
        thumb_url: Url,
        width: u32,
        height: u32,
    },
    /// Plain text result; used to surface errors to the user.
    Article {
        id: String,
        title: String,
        text: String,
    },
}

impl InlineResult {
    pub fn id(&self) -> &str {
        match self {
            InlineResult::Photo { id, .. }
            | InlineResult::Gif { id, .. }
            | InlineResult::Article { id, .. } => id,
        }
    }
}

/// Full reply to one inline query: ordered results plus platform caching hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineAnswer {
    pub results: Vec<InlineResult>,
    /// When true the platform must not share cached results across users sending the same text.
    pub is_personal: bool,
    /// Seconds the platform may cache the results.
    pub cache_time: u32,
}

impl InlineAnswer {
    /// Answer that is personal to the querying user and cached for `cache_time` seconds.
    pub fn personal(results: Vec<InlineResult>, cache_time: u32) -> Self {
        Self {
            results,
            is_personal: true,
            cache_time,
        }
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific inline query type to core [`InlineQueryEvent`].
pub trait ToCoreQuery: Send + Sync {
    fn to_core(&self) -> InlineQueryEvent;
}

/// Answers one inline query. Implementations are terminal: failures become results, never errors.
#[async_trait]
pub trait InlineHandler: Send + Sync {
    async fn handle_inline(&self, query: &InlineQueryEvent) -> InlineAnswer;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_inline_result_id() {
        let photo = InlineResult::Photo {
            id: "0".to_string(),
            photo_url: url("https://cataas.com/cat"),
            thumb_url: url("https://cataas.com/cat?width=100&height=100"),
            width: 100,
            height: 100,
        };
        let article = InlineResult::Article {
            id: "1".to_string(),
            title: "Error".to_string(),
            text: "boom".to_string(),
        };

        assert_eq!(photo.id(), "0");
        assert_eq!(article.id(), "1");
    }

    #[test]
    fn test_inline_answer_personal() {
        let answer = InlineAnswer::personal(vec![], 1);
        assert!(answer.is_personal);
        assert_eq!(answer.cache_time, 1);
        assert!(answer.results.is_empty());
    }
}
