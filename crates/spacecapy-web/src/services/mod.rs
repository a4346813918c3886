//! Index page services.
//!
//! - `ImageFetcher`: random image URL, with placeholder fallback
//! - `VisitorCounter`: persisted counter + in-process metrics mirror

pub mod image_fetcher;
pub mod visitor_counter;

pub use image_fetcher::ImageFetcher;
pub use visitor_counter::VisitorCounter;
