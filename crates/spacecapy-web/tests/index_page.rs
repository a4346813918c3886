#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use spacecapy_core::PLACEHOLDER_IMAGE_URL;
use spacecapy_web::app_state::AppState;
use spacecapy_web::config::AppConfig;
use spacecapy_web::page;
use spacecapy_web::store::{InMemoryStore, VisitorStore};

use support::{memory_state, DownStore};

#[tokio::test]
async fn empty_images_render_placeholder_and_first_visit() {
    let (state, store) = memory_state(&[], 0);

    let html = page::index(State(state.clone())).await.unwrap().0;

    assert!(html.contains(PLACEHOLDER_IMAGE_URL));
    assert!(html.contains("Visitors: 1<"));
    assert_eq!(store.current().await.unwrap(), 1);
    assert_eq!(state.metrics().visitors.get(), 1);
}

#[tokio::test]
async fn single_image_is_embedded_and_count_advances() {
    let (state, store) = memory_state(&["http://x/y.png"], 5);

    let html = page::index(State(state.clone())).await.unwrap().0;

    assert!(html.contains(r#"src="http://x/y.png""#));
    assert!(html.contains("Visitors: 6<"));
    assert_eq!(store.current().await.unwrap(), 6);
    assert_eq!(state.metrics().visitors.get(), 1);
}

#[tokio::test]
async fn image_is_one_of_the_stored_urls() {
    let urls = ["http://a/1.png", "http://a/2.png", "http://a/3.png"];
    let (state, _) = memory_state(&urls, 0);

    for _ in 0..20 {
        let html = page::index(State(state.clone())).await.unwrap().0;
        assert!(urls.iter().any(|u| html.contains(u)));
        assert!(!html.contains(PLACEHOLDER_IMAGE_URL));
    }
}

#[tokio::test]
async fn each_visit_increments_by_exactly_one() {
    let (state, store) = memory_state(&["http://x/y.png"], 10);

    for expected in 11..=15 {
        let html = page::index(State(state.clone())).await.unwrap().0;
        assert!(html.contains(&format!("Visitors: {expected}<")));
    }
    assert_eq!(store.current().await.unwrap(), 15);
    assert_eq!(state.metrics().visitors.get(), 5);
}

#[tokio::test]
async fn database_down_is_a_generic_500() {
    let down = Arc::new(DownStore::default());
    let state = AppState::new(AppConfig::default(), down.clone(), down.clone());

    let err = page::index(State(state.clone())).await.expect_err("must fail");
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"], "DATABASE");
    assert_eq!(v["message"], "internal server error");
    assert!(!String::from_utf8_lossy(&body).contains("connection refused"));

    assert_eq!(state.metrics().visitors.get(), 0);
    assert_eq!(state.metrics().db_errors.get(&[("op", "get_image_url")]), 1);
}

#[tokio::test]
async fn failed_image_lookup_does_not_count_a_visit() {
    let (_, counter) = memory_state(&[], 7);
    let down = Arc::new(DownStore::default());
    let state = AppState::new(AppConfig::default(), down.clone(), counter.clone());

    assert!(page::index(State(state.clone())).await.is_err());
    assert_eq!(counter.current().await.unwrap(), 7);
    assert_eq!(down.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_increment_leaves_metric_untouched() {
    let images = Arc::new(InMemoryStore::new(vec!["http://x/y.png".into()], 0));
    let down = Arc::new(DownStore::default());
    let state = AppState::new(AppConfig::default(), images, down);

    assert!(page::index(State(state.clone())).await.is_err());
    assert_eq!(state.metrics().visitors.get(), 0);
    assert_eq!(state.metrics().db_errors.get(&[("op", "get_visitors_count")]), 1);
}

#[tokio::test]
async fn placeholder_helper_substitutes_on_empty_table() {
    let (state, _) = memory_state(&[], 0);
    let url = state.image_fetcher().image_url_or_placeholder().await.unwrap();
    assert_eq!(url, PLACEHOLDER_IMAGE_URL);
}
