//! Shared application state.
//!
//! Storage is injected as trait objects; nothing here is global. `build`
//! picks the backend from config, `new` takes any implementation (tests pass
//! doubles here).

use std::sync::Arc;

use spacecapy_core::error::Result;

use crate::config::{AppConfig, Backend};
use crate::obs::AppMetrics;
use crate::services::{ImageFetcher, VisitorCounter};
use crate::store::{ImageSource, InMemoryStore, MySqlStore, VisitorStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    images: ImageFetcher,
    visitors: VisitorCounter,
    metrics: Arc<AppMetrics>,
}

impl AppState {
    pub fn new(
        cfg: AppConfig,
        images: Arc<dyn ImageSource>,
        visitors: Arc<dyn VisitorStore>,
    ) -> Self {
        let metrics = Arc::new(AppMetrics::default());
        Self {
            inner: Arc::new(AppStateInner {
                images: ImageFetcher::new(images, Arc::clone(&metrics)),
                visitors: VisitorCounter::new(visitors, Arc::clone(&metrics)),
                metrics,
                cfg,
            }),
        }
    }

    /// Build state with the backend selected in `cfg.storage.backend`.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub async fn build(cfg: AppConfig) -> Result<Self> {
        match cfg.storage.backend {
            Backend::Mysql => {
                let store = Arc::new(MySqlStore::from_config(&cfg.storage.mysql));
                if cfg.storage.mysql.bootstrap_schema {
                    store.bootstrap_schema().await?;
                }
                tracing::info!(
                    host = %cfg.storage.mysql.host,
                    port = cfg.storage.mysql.port,
                    database = %cfg.storage.mysql.database,
                    "using mysql backend"
                );
                Ok(Self::new(cfg, store.clone(), store))
            }
            Backend::Memory => {
                let store = Arc::new(InMemoryStore::from_config(&cfg.storage.memory));
                tracing::info!(images = cfg.storage.memory.images.len(), "using in-memory backend");
                Ok(Self::new(cfg, store.clone(), store))
            }
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn image_fetcher(&self) -> &ImageFetcher {
        &self.inner.images
    }

    pub fn visitor_counter(&self) -> &VisitorCounter {
        &self.inner.visitors
    }

    pub fn metrics(&self) -> Arc<AppMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
