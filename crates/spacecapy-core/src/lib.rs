//! spacecapy core: transport-free error type and page model.
//!
//! This crate holds what the web layer and its storage backends agree on:
//! the unified error surface and the data rendered on the index page. It
//! carries no runtime or database dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod page;

/// Shared result type.
pub use error::{Result, SpaceCapyError};
pub use page::{IndexPage, PLACEHOLDER_IMAGE_URL};
