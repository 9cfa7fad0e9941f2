//! Page routes
//!
//! Each route loads its template, runs the page controller against it with
//! the request's query parameters, and returns the finished HTML.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use seoulhot_common::QueryContext;
use tracing::info;

use crate::error::PageResult;
use crate::page::PageKind;
use crate::templates::PageTemplate;
use crate::AppState;

type QueryPairs = Query<Vec<(String, String)>>;

async fn render_page(
    state: &AppState,
    template: PageTemplate,
    Query(pairs): QueryPairs,
) -> PageResult<Html<String>> {
    let query = QueryContext::from_pairs(pairs);
    let html = state.templates.load(template).await?;

    let page = state.controller.render(&html, &query).await;

    info!(
        template = template.path(),
        page = page.kind.map_or("none", PageKind::name),
        "Page rendered"
    );

    Ok(Html(page.html))
}

/// GET / and GET /index.html
pub async fn index_page(State(state): State<AppState>, query: QueryPairs) -> PageResult<Html<String>> {
    render_page(&state, PageTemplate::Index, query).await
}

/// GET /category.html
pub async fn category_page(
    State(state): State<AppState>,
    query: QueryPairs,
) -> PageResult<Html<String>> {
    render_page(&state, PageTemplate::Category, query).await
}

/// GET /festival/festival.html
pub async fn festival_page(
    State(state): State<AppState>,
    query: QueryPairs,
) -> PageResult<Html<String>> {
    render_page(&state, PageTemplate::Festival, query).await
}

/// GET /festival/recommandation.html
pub async fn recommendation_page(
    State(state): State<AppState>,
    query: QueryPairs,
) -> PageResult<Html<String>> {
    render_page(&state, PageTemplate::Recommendation, query).await
}

/// Build page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_page))
        .route("/index.html", get(index_page))
        .route("/category.html", get(category_page))
        .route("/festival/festival.html", get(festival_page))
        .route("/festival/recommandation.html", get(recommendation_page))
}
