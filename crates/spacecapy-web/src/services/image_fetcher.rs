use std::sync::Arc;

use spacecapy_core::error::Result;
use spacecapy_core::page::resolve_image_url;

use crate::obs::AppMetrics;
use crate::store::ImageSource;

#[derive(Clone)]
pub struct ImageFetcher {
    source: Arc<dyn ImageSource>,
    metrics: Arc<AppMetrics>,
}

impl ImageFetcher {
    pub fn new(source: Arc<dyn ImageSource>, metrics: Arc<AppMetrics>) -> Self {
        Self { source, metrics }
    }

    /// One random image URL, `None` if the table is empty.
    /// Storage errors are returned to the caller.
    pub async fn get_image_url(&self) -> Result<Option<String>> {
        self.source.random_image_url().await.inspect_err(|e| {
            self.metrics.db_errors.inc(&[("op", "get_image_url")]);
            tracing::error!(error = %e, "image lookup failed");
        })
    }

    /// Like [`Self::get_image_url`], with the placeholder substituted.
    pub async fn image_url_or_placeholder(&self) -> Result<String> {
        Ok(resolve_image_url(self.get_image_url().await?))
    }
}
