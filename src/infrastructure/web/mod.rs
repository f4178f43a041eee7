//! Browser page - Form, creature card and illustration panel

use axum::response::Html;

const INDEX_HTML: &str = include_str!("index.html");

/// Serve the creature forge page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
