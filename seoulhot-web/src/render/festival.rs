//! Festival list page: district title and card links

use seoulhot_common::{region_name, QueryContext};
use tracing::debug;

use super::{append_query_param, FESTIVAL_TITLE, REC_LINK_CLASS};
use crate::document::HtmlDocument;

pub fn festival_title(sigungucode: Option<&str>) -> String {
    format!("Festivals & Events in {} 🎉", region_name(sigungucode))
}

pub fn render(doc: &mut HtmlDocument, query: &QueryContext) {
    let sigungucode = query.sigungucode();

    doc.set_text(FESTIVAL_TITLE, &festival_title(sigungucode));

    if let Some(code) = sigungucode {
        let updated = doc.update_attribute_by_class(REC_LINK_CLASS, "href", |href| {
            href.map(|href| append_query_param(href, "sigungucode", code))
        });
        debug!(updated, "Recommendation card links carry district code");
    }
}
