//! Test doubles shared by the handler tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use spacecapy_core::error::{Result, SpaceCapyError};
use spacecapy_web::app_state::AppState;
use spacecapy_web::config::AppConfig;
use spacecapy_web::store::{ImageSource, InMemoryStore, VisitorStore};

/// Storage whose every call fails like an unreachable database.
#[derive(Default)]
pub struct DownStore {
    pub calls: AtomicUsize,
}

impl DownStore {
    fn fail(&self) -> SpaceCapyError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SpaceCapyError::Database("connection refused".into())
    }
}

#[async_trait]
impl ImageSource for DownStore {
    async fn random_image_url(&self) -> Result<Option<String>> {
        Err(self.fail())
    }
}

#[async_trait]
impl VisitorStore for DownStore {
    async fn increment(&self) -> Result<i64> {
        Err(self.fail())
    }

    async fn current(&self) -> Result<i64> {
        Err(self.fail())
    }
}

pub fn memory_state(images: &[&str], visitors: i64) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new(
        images.iter().map(|s| s.to_string()).collect(),
        visitors,
    ));
    let state = AppState::new(AppConfig::default(), store.clone(), store.clone());
    (state, store)
}
