//! Detail page: fetch recommendations for one festival and bind them
//!
//! The page header describes the base festival (first similar festival);
//! both recommendation tracks render as card lists. A failed fetch replaces
//! the whole detail content with one error line.
//!
//! Rendering runs in two steps around the single API call: [`prepare`]
//! decides whether a request is needed, and [`bind_fetched`] binds its
//! outcome.

use seoulhot_common::models::{Festival, RecommendationResponse};
use seoulhot_common::{region, QueryContext};
use tracing::{debug, error, warn};

use super::cards::{render_festival_list, MISSING_FIELD};
use super::{
    append_query_param, BACK_LINK, DETAIL_CHIP, DETAIL_CONTENT, DETAIL_DESC, DETAIL_IMG,
    DETAIL_TITLE, TRACK1_LIST, TRACK2_LIST,
};
use crate::client::FetchError;
use crate::document::{escape_html, HtmlDocument};

pub const MISSING_CONTENT_ID: &str = "Error: Content ID not found in URL.";
pub const OVERVIEW_FALLBACK: &str = "Overview not available.";
pub const NO_IMAGE: &str = "(No Image)";

/// What the detail page still needs after [`prepare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStep<'q> {
    /// Page is final
    Done,
    /// Recommendations for this content id must be fetched
    Fetch(&'q str),
}

/// Bind everything that does not depend on the API
///
/// A page without the title placeholder is left alone. Without a content id
/// the title reports the error and no request is made.
pub fn prepare<'q>(doc: &mut HtmlDocument, query: &'q QueryContext) -> DetailStep<'q> {
    if !doc.has_element(DETAIL_TITLE) {
        return DetailStep::Done;
    }

    bind_back_link(doc, query.sigungucode());

    match query.content_id() {
        Some(content_id) => DetailStep::Fetch(content_id),
        None => {
            warn!("Detail page requested without contentid");
            doc.set_text(DETAIL_TITLE, MISSING_CONTENT_ID);
            DetailStep::Done
        }
    }
}

/// Bind the outcome of the recommendation request for `content_id`
pub fn bind_fetched(
    doc: &mut HtmlDocument,
    query: &QueryContext,
    content_id: &str,
    fetched: Result<RecommendationResponse, FetchError>,
) {
    bind_back_link(doc, query.sigungucode());

    match fetched {
        Ok(recommendations) => bind_recommendations(doc, &recommendations, query.sigungucode()),
        Err(e) => {
            error!(content_id, error = %e, "Error loading recommendations");
            doc.set_inner_html(DETAIL_CONTENT, &failure_html(&e));
        }
    }
}

/// Keep the district when navigating back to the festival list
fn bind_back_link(doc: &mut HtmlDocument, sigungucode: Option<&str>) {
    let Some(code) = sigungucode else {
        return;
    };
    if let Some(href) = doc.attribute(BACK_LINK, "href") {
        let href = append_query_param(&href, "sigungucode", code);
        doc.set_attribute(BACK_LINK, "href", &href);
        debug!(href = %href, "Back link bound");
    }
}

pub fn failure_html(err: &FetchError) -> String {
    format!(
        r#"<p style="color:red;">Failed to load data: {}</p>"#,
        escape_html(&err.to_string())
    )
}

/// Chip for the page header
///
/// Page district name, else the base festival's district name, else its raw
/// code, else `N/A`.
pub fn detail_chip<'a>(base: &'a Festival, sigungucode: Option<&str>) -> &'a str {
    let own_code = base.sigungucode.as_deref();
    region::lookup(sigungucode)
        .or_else(|| region::lookup(own_code))
        .or(own_code)
        .unwrap_or(MISSING_FIELD)
}

fn image_html(url: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" style="width:100%; height:100%; object-fit:cover;">"#,
        escape_html(url),
        escape_html(alt)
    )
}

fn bind_header(doc: &mut HtmlDocument, base: &Festival, sigungucode: Option<&str>) {
    let title = base.title().unwrap_or(MISSING_FIELD);
    doc.set_text(DETAIL_TITLE, title);
    doc.set_text(DETAIL_CHIP, detail_chip(base, sigungucode));
    doc.set_text(
        DETAIL_DESC,
        base.overview
            .as_deref()
            .filter(|overview| !overview.is_empty())
            .unwrap_or(OVERVIEW_FALLBACK),
    );

    match base.image_url() {
        Some(url) => doc.set_inner_html(DETAIL_IMG, &image_html(url, title)),
        None => doc.set_text(DETAIL_IMG, NO_IMAGE),
    };
}

pub fn bind_recommendations(
    doc: &mut HtmlDocument,
    recommendations: &RecommendationResponse,
    sigungucode: Option<&str>,
) {
    if let Some(base) = recommendations.base_festival() {
        bind_header(doc, base, sigungucode);
    }

    render_festival_list(
        doc,
        TRACK1_LIST,
        Some(recommendations.track1_similar.as_slice()),
        sigungucode,
    );
    render_festival_list(
        doc,
        TRACK2_LIST,
        recommendations.track2_unpopular.as_deref(),
        sigungucode,
    );
}
