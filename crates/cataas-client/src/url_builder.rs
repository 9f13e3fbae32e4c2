//! URL composition for Cataas image resources.

use url::Url;

/// Path of a random still cat.
pub const CAT_PATH: &str = "cat";
/// Path of a random animated cat.
pub const CAT_GIF_PATH: &str = "cat/gif";

const SAYS_SEGMENT: &str = "says";
const SIZE_KEY: &str = "size";
const WIDTH_KEY: &str = "width";
const HEIGHT_KEY: &str = "height";

/// Builds `{base}/{path}[/says/{caption}][?size=..&width=..&height=..]`.
///
/// The caption is appended as a single percent-encoded path segment, so `/`, `?`, `#` and `%`
/// stay literal text. `caption_size` is only emitted together with a caption; `width` and `height`
/// are independent. A `None` omits the query key entirely, and no `?` is written when no key is set.
/// Any query or fragment on `base` is dropped.
///
/// `.` and `..` cannot be carried as a path segment: URL parsing removes them, escaped or not
/// (`%2E` is a dot-segment too). Such captions produce the uncaptioned resource, without the
/// `says` segment and without `size`.
pub fn build_url(
    base: &Url,
    path: &str,
    caption: Option<&str>,
    caption_size: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
) -> Url {
    let mut url = base.clone();
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);

    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(3);

    if let Some(caption) = caption.filter(|c| !is_dot_segment(c)) {
        // Only fails for cannot-be-a-base URLs, which the client rejects at construction.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(SAYS_SEGMENT).push(caption);
        }
        if let Some(size) = caption_size {
            pairs.push((SIZE_KEY, size.to_string()));
        }
    }
    if let Some(width) = width {
        pairs.push((WIDTH_KEY, width.to_string()));
    }
    if let Some(height) = height {
        pairs.push((HEIGHT_KEY, height.to_string()));
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}

fn is_dot_segment(caption: &str) -> bool {
    caption == "." || caption == ".."
}
