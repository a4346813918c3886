//! Index page: handler and template rendering.

pub mod template;

use axum::{extract::State, response::Html};

use spacecapy_core::IndexPage;

use crate::app_state::AppState;
use crate::error::HttpError;

/// `GET /`: image lookup first, then the visit is counted.
/// A failed image lookup therefore does not count a visit.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let url = state.image_fetcher().image_url_or_placeholder().await?;
    let visitors_count = state.visitor_counter().get_visitors_count().await?;

    let page = IndexPage { url, visitors_count };
    Ok(Html(template::render_index(&page)))
}
