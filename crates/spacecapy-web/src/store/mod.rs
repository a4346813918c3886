//! Storage seams for the index page.
//!
//! Handlers never talk to a database directly; they go through these traits
//! so the MySQL backend, the in-memory backend, and test doubles are
//! interchangeable.

pub mod memory;
pub mod mysql;

use async_trait::async_trait;

use spacecapy_core::error::Result;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;

/// Source of image URLs.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// One pseudo-randomly chosen URL, or `None` when there is nothing to pick.
    async fn random_image_url(&self) -> Result<Option<String>>;
}

/// Persisted visitor counter.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// Add one visit and return the post-increment value.
    async fn increment(&self) -> Result<i64>;
    /// Read the current value without changing it.
    async fn current(&self) -> Result<i64>;
}
