//! Adapters between Telegram (teloxide) types and catbot_core types.
//! Depends only on teloxide and catbot_core type definitions.

use catbot_core::{InlineAnswer, InlineQueryEvent, InlineResult, ToCoreQuery, ToCoreUser, User};
use teloxide::types::{
    InlineQueryResult, InlineQueryResultArticle, InlineQueryResultGif, InlineQueryResultPhoto,
    InputMessageContent, InputMessageContentText,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide InlineQuery for conversion to core [`InlineQueryEvent`].
pub struct TelegramInlineQueryWrapper<'a>(pub &'a teloxide::types::InlineQuery);

impl<'a> ToCoreQuery for TelegramInlineQueryWrapper<'a> {
    fn to_core(&self) -> InlineQueryEvent {
        InlineQueryEvent {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            query: self.0.query.clone(),
            received_at: chrono::Utc::now(),
        }
    }
}

/// Converts core inline results to teloxide results, preserving order.
pub fn to_telegram_results(answer: &InlineAnswer) -> Vec<InlineQueryResult> {
    answer.results.iter().map(to_telegram_result).collect()
}

fn to_telegram_result(result: &InlineResult) -> InlineQueryResult {
    match result {
        InlineResult::Photo {
            id,
            photo_url,
            thumb_url,
            width,
            height,
        } => {
            let mut photo =
                InlineQueryResultPhoto::new(id.clone(), photo_url.clone(), thumb_url.clone());
            photo.photo_width = Some(*width);
            photo.photo_height = Some(*height);
            InlineQueryResult::Photo(photo)
        }
        InlineResult::Gif {
            id,
            gif_url,
            thumb_url,
            width,
            height,
        } => {
            let mut gif = InlineQueryResultGif::new(id.clone(), gif_url.clone(), thumb_url.clone());
            gif.gif_width = Some(*width);
            gif.gif_height = Some(*height);
            InlineQueryResult::Gif(gif)
        }
        InlineResult::Article { id, title, text } => {
            let content = InputMessageContent::Text(InputMessageContentText::new(text.clone()));
            InlineQueryResult::Article(InlineQueryResultArticle::new(
                id.clone(),
                title.clone(),
                content,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let wrapper = TelegramUserWrapper(&user);
        let core_user = wrapper.to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    /// **Test: photo, gif and article results keep order, URLs and explicit dimensions.**
    #[test]
    fn test_to_telegram_results_shapes_and_order() {
        let answer = InlineAnswer::personal(
            vec![
                InlineResult::Photo {
                    id: "0".to_string(),
                    photo_url: url("https://cataas.com/cat/says/hi?size=50"),
                    thumb_url: url("https://cataas.com/cat/says/hi?width=100&height=100"),
                    width: 100,
                    height: 100,
                },
                InlineResult::Gif {
                    id: "1".to_string(),
                    gif_url: url("https://cataas.com/cat/gif"),
                    thumb_url: url("https://cataas.com/cat/gif?width=100&height=100"),
                    width: 100,
                    height: 100,
                },
                InlineResult::Article {
                    id: "2".to_string(),
                    title: "Error".to_string(),
                    text: "Upstream error".to_string(),
                },
            ],
            1,
        );

        let results = to_telegram_results(&answer);

        assert_eq!(results.len(), 3);
        match &results[0] {
            InlineQueryResult::Photo(photo) => {
                assert_eq!(
                    photo.photo_url.as_str(),
                    "https://cataas.com/cat/says/hi?size=50"
                );
                assert_eq!(photo.photo_width, Some(100));
                assert_eq!(photo.photo_height, Some(100));
            }
            other => panic!("expected photo, got {other:?}"),
        }
        match &results[1] {
            InlineQueryResult::Gif(gif) => {
                assert_eq!(gif.gif_url.as_str(), "https://cataas.com/cat/gif");
                assert_eq!(gif.gif_width, Some(100));
                assert_eq!(gif.gif_height, Some(100));
            }
            other => panic!("expected gif, got {other:?}"),
        }
        match &results[2] {
            InlineQueryResult::Article(article) => assert_eq!(article.title, "Error"),
            other => panic!("expected article, got {other:?}"),
        }
    }

    #[test]
    fn test_to_telegram_results_empty() {
        let answer = InlineAnswer::personal(vec![], 1);
        assert!(to_telegram_results(&answer).is_empty());
    }
}
