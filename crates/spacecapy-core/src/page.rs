//! Data shown on the index page.

use serde::Serialize;

/// Shown when the image table has no usable row.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150?text=No+Images+Available";

/// Values the index template is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub url: String,
    pub visitors_count: i64,
}

impl IndexPage {
    /// Build the page, substituting the placeholder when no image was found.
    pub fn new(url: Option<String>, visitors_count: i64) -> Self {
        Self {
            url: resolve_image_url(url),
            visitors_count,
        }
    }
}

/// `None` and empty strings both fall back to [`PLACEHOLDER_IMAGE_URL`].
pub fn resolve_image_url(url: Option<String>) -> String {
    match url {
        Some(u) if !u.trim().is_empty() => u,
        _ => {
            tracing::debug!("no image available, using placeholder");
            PLACEHOLDER_IMAGE_URL.to_string()
        }
    }
}
