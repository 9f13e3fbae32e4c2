//! Where batch items come from and how they are classified as still or animated.

use catbot_core::MediaKind;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Maximum in-flight metadata lookups for [`ItemSource::Lookup`].
pub const LOOKUP_CONCURRENCY: usize = 8;

/// Decides the media kind of the item at `index` for template-generated batches.
pub trait KindClassifier: Send + Sync {
    fn classify(&self, index: usize) -> MediaKind;
}

/// Every item is a still image.
#[derive(Debug, Clone, Copy, Default)]
pub struct StillOnly;

impl KindClassifier for StillOnly {
    fn classify(&self, _index: usize) -> MediaKind {
        MediaKind::Still
    }
}

/// Every n-th item (1-based) is animated, the rest are stills.
#[derive(Debug, Clone, Copy)]
pub struct EveryNth {
    n: NonZeroUsize,
}

impl EveryNth {
    /// Returns `None` for `n == 0`.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(|n| Self { n })
    }
}

impl KindClassifier for EveryNth {
    fn classify(&self, index: usize) -> MediaKind {
        if (index + 1) % self.n.get() == 0 {
            MediaKind::Animated
        } else {
            MediaKind::Still
        }
    }
}

/// Strategy for producing the items of a batch.
#[derive(Clone)]
pub enum ItemSource {
    /// URL templating only (`cat` / `cat/gif`); no network call, never fails.
    Template(Arc<dyn KindClassifier>),
    /// One random-cat metadata lookup per item; items address a concrete cat (`cat/<id>`) and are
    /// classified by mime type. Fails on the first upstream error.
    Lookup,
}

impl Default for ItemSource {
    fn default() -> Self {
        ItemSource::Template(Arc::new(StillOnly))
    }
}

impl ItemSource {
    pub fn name(&self) -> &'static str {
        match self {
            ItemSource::Template(_) => "template",
            ItemSource::Lookup => "lookup",
        }
    }
}
