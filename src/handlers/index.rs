//! Static landing page served at `/`.

use axum::response::Html;

/// Page compiled into the binary so the server has no runtime file dependency.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /` → `text/html; charset=utf-8`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
