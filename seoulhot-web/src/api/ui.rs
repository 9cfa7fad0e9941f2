//! Static asset serving

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const STYLE_CSS: &str = include_str!("../../ui/style.css");

/// GET /static/style.css
///
/// Serves the stylesheet shared by all pages
pub async fn serve_style_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css")],
        STYLE_CSS,
    )
        .into_response()
}
