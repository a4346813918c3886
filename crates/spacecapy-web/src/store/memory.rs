use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use spacecapy_core::error::Result;

use super::{ImageSource, VisitorStore};
use crate::config::MemorySection;

/// Process-local backend: a fixed image list and an atomic counter.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    images: Vec<String>,
    visitors: AtomicI64,
}

impl InMemoryStore {
    pub fn new(images: Vec<String>, initial_visitors: i64) -> Self {
        Self {
            images,
            visitors: AtomicI64::new(initial_visitors),
        }
    }

    pub fn from_config(cfg: &MemorySection) -> Self {
        Self::new(cfg.images.clone(), cfg.initial_visitors)
    }

    fn pick(&self) -> Option<String> {
        self.images.choose(&mut rand::thread_rng()).cloned()
    }
}

#[async_trait]
impl ImageSource for InMemoryStore {
    async fn random_image_url(&self) -> Result<Option<String>> {
        Ok(self.pick())
    }
}

#[async_trait]
impl VisitorStore for InMemoryStore {
    async fn increment(&self) -> Result<i64> {
        Ok(self.visitors.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn current(&self) -> Result<i64> {
        Ok(self.visitors.load(Ordering::SeqCst))
    }
}
