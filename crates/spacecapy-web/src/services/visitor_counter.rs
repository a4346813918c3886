use std::sync::Arc;

use spacecapy_core::error::Result;

use crate::obs::AppMetrics;
use crate::store::VisitorStore;

/// Visitor counter.
///
/// The store is authoritative. `metrics.visitors` is a per-process mirror:
/// it advances by one for every visit this process records and is
/// overwritten from the store by [`VisitorCounter::resync`].
#[derive(Clone)]
pub struct VisitorCounter {
    store: Arc<dyn VisitorStore>,
    metrics: Arc<AppMetrics>,
}

impl VisitorCounter {
    pub fn new(store: Arc<dyn VisitorStore>, metrics: Arc<AppMetrics>) -> Self {
        Self { store, metrics }
    }

    /// Record one visit and return the post-increment count.
    pub async fn get_visitors_count(&self) -> Result<i64> {
        let count = self.store.increment().await.inspect_err(|e| {
            self.metrics.db_errors.inc(&[("op", "get_visitors_count")]);
            tracing::error!(error = %e, "visitor increment failed");
        })?;
        self.metrics.visitors.inc();
        tracing::debug!(count, "visit recorded");
        Ok(count)
    }

    /// Overwrite the metrics mirror with the stored value.
    ///
    /// On failure the mirror keeps its last value.
    pub async fn resync(&self) -> Result<u64> {
        match self.store.current().await {
            Ok(v) => {
                let v = u64::try_from(v).unwrap_or(0);
                self.metrics.visitors.set(v);
                Ok(v)
            }
            Err(e) => {
                self.metrics.db_errors.inc(&[("op", "metrics_resync")]);
                tracing::warn!(error = %e, "visitor resync failed, serving last known value");
                Err(e)
            }
        }
    }
}
