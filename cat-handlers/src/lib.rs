//! # cat-handlers
//!
//! Result aggregation and inline query answering for the cat bot:
//! [`CatService`] turns an [`ImageRequest`] into ordered [`catbot_core::ResultItem`]s, and
//! [`InlineCatHandler`] maps a user's inline query onto the service and its outcome onto inline results.

mod error;
mod inline_cat_handler;
mod request;
mod service;
mod source;

pub use error::ServiceError;
pub use inline_cat_handler::{
    caption_from_query, InlineCatHandler, CACHE_TIME_SECS, CAPTION_SIZE, ERROR_RESULT_ID,
    ERROR_TITLE, THUMB_HEIGHT, THUMB_WIDTH,
};
pub use request::{ImageRequest, MAX_RESULTS};
pub use service::CatService;
pub use source::{EveryNth, ItemSource, KindClassifier, StillOnly, LOOKUP_CONCURRENCY};
