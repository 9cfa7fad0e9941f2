//! seoulhot-web library - server-rendered festival recommendation site
//!
//! Serves four page templates. Each request runs the page controller over
//! its template: the category and festival list pages get district-specific
//! titles and links, and the detail page is filled from one call to the
//! recommendation API.

use std::sync::Arc;

use axum::Router;
use seoulhot_common::config::SiteConfig;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod client;
pub mod document;
pub mod error;
pub mod page;
pub mod render;
pub mod templates;

use client::{FetchError, HttpRecommendationClient, RecommendationSource};
use page::PageController;
use templates::TemplateSet;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateSet>,
    pub controller: Arc<PageController>,
}

impl AppState {
    pub fn new(templates: TemplateSet, source: Arc<dyn RecommendationSource>) -> Self {
        Self {
            templates: Arc::new(templates),
            controller: Arc::new(PageController::new(source)),
        }
    }

    /// State backed by the HTTP recommendation client
    pub fn from_config(config: &SiteConfig) -> Result<Self, FetchError> {
        let client = HttpRecommendationClient::new(config.api_base_url.clone(), config.top_n)?;
        Ok(Self::new(
            TemplateSet::new(config.templates_dir.clone()),
            Arc::new(client),
        ))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .merge(api::page_routes())
        .route("/static/style.css", get(api::serve_style_css))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
