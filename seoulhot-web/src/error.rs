//! Error types for seoulhot-web page serving

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::document::escape_html;

/// Page serving error
#[derive(Debug, Error)]
pub enum PageError {
    /// Template override exists but could not be read
    #[error("Template {name} could not be loaded: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("{}", self);

        let body = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Page unavailable</title></head>
<body><p style="color:red;">{}</p></body>
</html>"#,
            escape_html(&self.to_string())
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
