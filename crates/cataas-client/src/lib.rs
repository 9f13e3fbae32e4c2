//! Cataas (cat as a service) client
//!
//! Looks up random cat metadata over HTTP and builds image URLs locally. The service renders images
//! deterministically from the URL (path, caption, size, width, height), so constructing an image URL
//! never needs a network call.

mod client;
mod error;
mod types;
mod url_builder;

pub use client::{CatApi, CataasClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use types::RemoteCatMetadata;
pub use url_builder::{build_url, CAT_GIF_PATH, CAT_PATH};
