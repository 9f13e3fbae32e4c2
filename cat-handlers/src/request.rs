//! Aggregator request: how many images, with which caption and thumbnail size.

use crate::error::ServiceError;

/// Upper bound on results per inline answer.
pub const MAX_RESULTS: usize = 50;

const DEFAULT_CAPTION_SIZE: u32 = 50;
const DEFAULT_THUMB_SIZE: u32 = 100;

/// One aggregator request, built once per inline query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    count: usize,
    caption: Option<String>,
    caption_size: u32,
    thumb_width: u32,
    thumb_height: u32,
}

impl ImageRequest {
    /// Creates a request for `count` images (1..=[`MAX_RESULTS`]) without a caption.
    pub fn new(count: usize) -> Result<Self, ServiceError> {
        if count == 0 || count > MAX_RESULTS {
            return Err(ServiceError::InvalidCount {
                count,
                max: MAX_RESULTS,
            });
        }
        Ok(Self {
            count,
            caption: None,
            caption_size: DEFAULT_CAPTION_SIZE,
            thumb_width: DEFAULT_THUMB_SIZE,
            thumb_height: DEFAULT_THUMB_SIZE,
        })
    }

    /// Sets the caption rendered on the images. `None` means no caption segment at all.
    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    /// Font size of the caption; ignored when there is no caption.
    pub fn with_caption_size(mut self, size: u32) -> Self {
        self.caption_size = size;
        self
    }

    pub fn with_thumb_size(mut self, width: u32, height: u32) -> Self {
        self.thumb_width = width;
        self.thumb_height = height;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn caption_size(&self) -> u32 {
        self.caption_size
    }

    pub fn thumb_width(&self) -> u32 {
        self.thumb_width
    }

    pub fn thumb_height(&self) -> u32 {
        self.thumb_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let request = ImageRequest::new(10).unwrap();
        assert_eq!(request.count(), 10);
        assert!(request.caption().is_none());
        assert_eq!(request.caption_size(), 50);
        assert_eq!(request.thumb_width(), 100);
        assert_eq!(request.thumb_height(), 100);
    }

    #[test]
    fn test_count_bounds() {
        assert!(ImageRequest::new(1).is_ok());
        assert!(ImageRequest::new(MAX_RESULTS).is_ok());
        assert!(matches!(
            ImageRequest::new(0),
            Err(ServiceError::InvalidCount { count: 0, max: 50 })
        ));
        assert!(ImageRequest::new(MAX_RESULTS + 1).is_err());
    }

    #[test]
    fn test_builders() {
        let request = ImageRequest::new(3)
            .unwrap()
            .with_caption(Some("hello".to_string()))
            .with_caption_size(24)
            .with_thumb_size(64, 48);

        assert_eq!(request.caption(), Some("hello"));
        assert_eq!(request.caption_size(), 24);
        assert_eq!(request.thumb_width(), 64);
        assert_eq!(request.thumb_height(), 48);
    }
}
