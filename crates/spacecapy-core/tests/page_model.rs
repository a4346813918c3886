//! Index page model tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use spacecapy_core::page::resolve_image_url;
use spacecapy_core::{IndexPage, SpaceCapyError, PLACEHOLDER_IMAGE_URL};

#[test]
fn missing_image_uses_placeholder() {
    assert_eq!(resolve_image_url(None), PLACEHOLDER_IMAGE_URL);
}

#[test]
fn blank_image_uses_placeholder() {
    assert_eq!(resolve_image_url(Some(String::new())), PLACEHOLDER_IMAGE_URL);
    assert_eq!(resolve_image_url(Some("   ".into())), PLACEHOLDER_IMAGE_URL);
}

#[test]
fn present_image_is_kept() {
    let page = IndexPage::new(Some("http://x/y.png".into()), 6);
    assert_eq!(page.url, "http://x/y.png");
    assert_eq!(page.visitors_count, 6);
}

#[test]
fn page_serializes_template_fields() {
    let page = IndexPage::new(None, 1);
    let v = serde_json::to_value(&page).unwrap();
    assert_eq!(v["url"], PLACEHOLDER_IMAGE_URL);
    assert_eq!(v["visitors_count"], 1);
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(SpaceCapyError::Config("x".into()).code(), "CONFIG");
    assert_eq!(SpaceCapyError::Database("x".into()).code(), "DATABASE");
    assert_eq!(SpaceCapyError::Internal("x".into()).code(), "INTERNAL");
}
