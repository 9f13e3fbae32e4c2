//! Result aggregator: builds the ordered batch of candidate images for one request.

use cataas_client::{CatApi, CAT_GIF_PATH, CAT_PATH};
use catbot_core::{MediaKind, ResultItem};
use futures::{stream, StreamExt, TryStreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::error::ServiceError;
use crate::request::ImageRequest;
use crate::source::{ItemSource, KindClassifier, LOOKUP_CONCURRENCY};

/// Item identity and resource path, before URLs are built.
struct PlannedItem {
    id: String,
    path: String,
    kind: MediaKind,
}

/// Aggregator over a [`CatApi`]. Configuration-only after construction; share behind `Arc`.
#[derive(Clone)]
pub struct CatService {
    api: Arc<dyn CatApi>,
    source: ItemSource,
}

impl CatService {
    /// Creates a service that templates still images only.
    pub fn new(api: Arc<dyn CatApi>) -> Self {
        Self {
            api,
            source: ItemSource::default(),
        }
    }

    pub fn with_source(mut self, source: ItemSource) -> Self {
        self.source = source;
        self
    }

    pub fn source(&self) -> &ItemSource {
        &self.source
    }

    /// Returns at most `request.count()` items, in order, with ids unique within the batch.
    ///
    /// Template sources always return exactly `count` items and never fail. Lookup sources fail
    /// with [`ServiceError::Upstream`] on the first lookup error and drop cats the upstream repeats,
    /// so they may return fewer items.
    #[instrument(skip(self, request), fields(count = request.count(), source = self.source.name()))]
    pub async fn get_cats(&self, request: &ImageRequest) -> Result<Vec<ResultItem>, ServiceError> {
        let planned = match &self.source {
            ItemSource::Template(classifier) => plan_from_template(classifier.as_ref(), request.count()),
            ItemSource::Lookup => self.plan_from_lookup(request.count()).await?,
        };

        let items: Vec<ResultItem> = planned
            .into_iter()
            .map(|item| self.build_item(item, request))
            .collect();

        info!(
            requested = request.count(),
            returned = items.len(),
            has_caption = request.caption().is_some(),
            "step: cat batch built"
        );
        Ok(items)
    }

    async fn plan_from_lookup(&self, count: usize) -> Result<Vec<PlannedItem>, ServiceError> {
        let api = self.api.as_ref();
        let cats: Vec<_> = stream::iter(0..count)
            .map(|_| api.get_random_cat())
            .buffered(LOOKUP_CONCURRENCY)
            .try_collect()
            .await
            .map_err(|e| {
                error!(error = %e, "Cat lookup failed");
                ServiceError::Upstream(e)
            })?;

        let mut seen = HashSet::with_capacity(cats.len());
        let mut planned = Vec::with_capacity(cats.len());
        for cat in cats {
            if !seen.insert(cat.id.clone()) {
                debug!(cat_id = %cat.id, "Duplicate cat from upstream, skipped");
                continue;
            }
            let kind = if cat.is_animated() {
                MediaKind::Animated
            } else {
                MediaKind::Still
            };
            planned.push(PlannedItem {
                id: format!("{}-{}", planned.len(), cat.id),
                path: format!("{}/{}", CAT_PATH, cat.id),
                kind,
            });
        }
        Ok(planned)
    }

    /// Full image carries caption and caption size; the thumbnail carries the caption and the
    /// thumbnail dimensions so the preview matches what gets sent.
    fn build_item(&self, item: PlannedItem, request: &ImageRequest) -> ResultItem {
        let caption = request.caption();
        let full_url = self
            .api
            .build_url(&item.path, caption, Some(request.caption_size()), None, None);
        let thumb_url = self.api.build_url(
            &item.path,
            caption,
            None,
            Some(request.thumb_width()),
            Some(request.thumb_height()),
        );
        ResultItem {
            id: item.id,
            kind: item.kind,
            full_url,
            thumb_url,
        }
    }
}

fn plan_from_template(classifier: &dyn KindClassifier, count: usize) -> Vec<PlannedItem> {
    (0..count)
        .map(|index| {
            let kind = classifier.classify(index);
            let path = match kind {
                MediaKind::Still => CAT_PATH,
                MediaKind::Animated => CAT_GIF_PATH,
            };
            PlannedItem {
                id: index.to_string(),
                path: path.to_string(),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EveryNth;
    use cataas_client::CataasClient;
    use url::Url;

    fn service() -> CatService {
        let client = CataasClient::new(Url::parse("https://cataas.com").unwrap()).unwrap();
        CatService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_template_returns_exact_count_with_unique_ids() {
        let request = ImageRequest::new(50).unwrap();
        let items = service().get_cats(&request).await.unwrap();

        assert_eq!(items.len(), 50);
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(items[0].id, "0");
        assert_eq!(items[49].id, "49");
    }

    #[tokio::test]
    async fn test_template_caption_urls() {
        let request = ImageRequest::new(2)
            .unwrap()
            .with_caption(Some("funny".to_string()))
            .with_caption_size(50)
            .with_thumb_size(100, 100);

        let items = service().get_cats(&request).await.unwrap();

        for item in &items {
            assert_eq!(item.kind, MediaKind::Still);
            assert_eq!(
                item.full_url.as_str(),
                "https://cataas.com/cat/says/funny?size=50"
            );
            assert_eq!(
                item.thumb_url.as_str(),
                "https://cataas.com/cat/says/funny?width=100&height=100"
            );
        }
    }

    #[tokio::test]
    async fn test_template_without_caption() {
        let request = ImageRequest::new(1).unwrap().with_thumb_size(64, 32);

        let items = service().get_cats(&request).await.unwrap();

        assert_eq!(items[0].full_url.as_str(), "https://cataas.com/cat");
        assert_eq!(
            items[0].thumb_url.as_str(),
            "https://cataas.com/cat?width=64&height=32"
        );
    }

    #[tokio::test]
    async fn test_template_every_nth_uses_gif_path() {
        let service = service().with_source(ItemSource::Template(Arc::new(
            EveryNth::new(2).unwrap(),
        )));
        let request = ImageRequest::new(4).unwrap();

        let items = service.get_cats(&request).await.unwrap();

        let kinds: Vec<MediaKind> = items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MediaKind::Still,
                MediaKind::Animated,
                MediaKind::Still,
                MediaKind::Animated
            ]
        );
        assert_eq!(items[1].full_url.path(), "/cat/gif");
        assert_eq!(items[0].full_url.path(), "/cat");
    }
}
