//! Recommendation list rendering
//!
//! Shared by both recommendation tracks on the detail page.

use seoulhot_common::models::Festival;
use seoulhot_common::region;

use crate::document::{escape_html, HtmlDocument};

/// Relative path of the detail page, from the festival pages
pub const DETAIL_PAGE_PATH: &str = "recommandation.html";

pub const NO_RECOMMENDATIONS_HTML: &str = "<p>No recommendations found for this track.</p>";
pub const ADDRESS_FALLBACK: &str = "Address not available";
pub const MISSING_FIELD: &str = "N/A";

/// Detail page link for one card
///
/// The district code supplied by the page takes precedence over the
/// record's own code. With neither, the parameter is omitted.
pub fn card_href(festival: &Festival, sigungucode: Option<&str>) -> String {
    let mut href = format!(
        "{}?contentid={}",
        DETAIL_PAGE_PATH,
        urlencoding::encode(&festival.content_id)
    );
    if let Some(code) = sigungucode.or(festival.sigungucode.as_deref()) {
        href.push_str("&sigungucode=");
        href.push_str(&urlencoding::encode(code));
    }
    href
}

/// Chip text: the record's own district name, else its raw code
pub fn card_chip(festival: &Festival) -> &str {
    let code = festival.sigungucode.as_deref();
    region::lookup(code)
        .or(code)
        .unwrap_or(MISSING_FIELD)
}

pub fn render_card(festival: &Festival, sigungucode: Option<&str>) -> String {
    format!(
        r#"<a href="{href}" class="card clickable" tabindex="0">
  <div class="card-title">{title}</div>
  <div class="card-desc">{address}</div>
  <div class="chip">{chip}</div>
</a>
"#,
        href = escape_html(&card_href(festival, sigungucode)),
        title = escape_html(festival.title().unwrap_or(MISSING_FIELD)),
        address = escape_html(festival.address.as_deref().unwrap_or(ADDRESS_FALLBACK)),
        chip = escape_html(card_chip(festival)),
    )
}

/// Replace the list container's content with one card per festival
///
/// Empty or absent lists leave only the no-recommendations message.
/// Returns `false` when the container is missing.
pub fn render_festival_list(
    doc: &mut HtmlDocument,
    list_id: &str,
    festivals: Option<&[Festival]>,
    sigungucode: Option<&str>,
) -> bool {
    let festivals = festivals.unwrap_or_default();

    if festivals.is_empty() {
        return doc.set_inner_html(list_id, NO_RECOMMENDATIONS_HTML);
    }

    let cards: String = festivals
        .iter()
        .map(|festival| render_card(festival, sigungucode))
        .collect();
    doc.set_inner_html(list_id, &cards)
}
