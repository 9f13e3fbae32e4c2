//! In-process [`CatApi`] implementations for tests: no network, deterministic outcomes.

#![allow(dead_code)]

use async_trait::async_trait;
use cataas_client::{build_url, CatApi, ClientError, RemoteCatMetadata};
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

fn base() -> Url {
    Url::parse("https://cataas.com").unwrap()
}

fn cat(id: &str, mime_type: &str) -> RemoteCatMetadata {
    RemoteCatMetadata {
        id: id.to_string(),
        created_at: "2022-01-01T00:00:00.000Z".to_string(),
        tags: vec!["test".to_string()],
        url: format!("/cat/{}", id),
        mime_type: mime_type.to_string(),
    }
}

/// Returns a fresh cat (`cat-0`, `cat-1`, ...) on every lookup. Even-numbered cats are GIFs.
#[derive(Default)]
pub struct CountingCatApi {
    calls: AtomicUsize,
}

impl CountingCatApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatApi for CountingCatApi {
    async fn get_random_cat(&self) -> Result<RemoteCatMetadata, ClientError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let mime_type = if n % 2 == 0 { "image/gif" } else { "image/jpeg" };
        Ok(cat(&format!("cat-{}", n), mime_type))
    }

    fn build_url(
        &self,
        path: &str,
        caption: Option<&str>,
        caption_size: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Url {
        build_url(&base(), path, caption, caption_size, width, height)
    }
}

/// Always returns the same cat.
pub struct SameCatApi {
    pub mime_type: &'static str,
}

#[async_trait]
impl CatApi for SameCatApi {
    async fn get_random_cat(&self) -> Result<RemoteCatMetadata, ClientError> {
        Ok(cat("only-cat", self.mime_type))
    }

    fn build_url(
        &self,
        path: &str,
        caption: Option<&str>,
        caption_size: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Url {
        build_url(&base(), path, caption, caption_size, width, height)
    }
}

/// Every lookup fails with a 503.
pub struct FailingCatApi;

pub const FAILURE_BODY: &str = "service unavailable";

#[async_trait]
impl CatApi for FailingCatApi {
    async fn get_random_cat(&self) -> Result<RemoteCatMetadata, ClientError> {
        Err(ClientError::Status {
            status: 503,
            body: FAILURE_BODY.to_string(),
        })
    }

    fn build_url(
        &self,
        path: &str,
        caption: Option<&str>,
        caption_size: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Url {
        build_url(&base(), path, caption, caption_size, width, height)
    }
}
