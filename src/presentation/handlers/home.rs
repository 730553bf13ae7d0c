use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../../static/index.html");

/// Serves the embedded recorder page.
pub async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
