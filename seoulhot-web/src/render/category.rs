//! Category page: district title and festival link

use seoulhot_common::{region_name, QueryContext};
use tracing::debug;

use super::{append_query_param, CATEGORY_TITLE, FESTIVAL_LINK};
use crate::document::HtmlDocument;

/// Festival list page, used when the link carries no `href`
pub const FESTIVAL_PAGE_PATH: &str = "festival/festival.html";

pub fn category_title(sigungucode: Option<&str>) -> String {
    format!("What's Hot in {}?", region_name(sigungucode))
}

pub fn render(doc: &mut HtmlDocument, query: &QueryContext) {
    let sigungucode = query.sigungucode();

    doc.set_text(CATEGORY_TITLE, &category_title(sigungucode));

    if let Some(code) = sigungucode {
        let base = doc
            .attribute(FESTIVAL_LINK, "href")
            .unwrap_or_else(|| FESTIVAL_PAGE_PATH.to_string());
        let href = append_query_param(&base, "sigungucode", code);
        if doc.set_attribute(FESTIVAL_LINK, "href", &href) {
            debug!(href = %href, "Festival link bound");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<main id="page-category">
<h1 id="category-title">Loading...</h1>
<a id="festival-link" href="festival/festival.html">Festivals</a>
</main>"#;

    #[test]
    fn test_title_for_seocho() {
        let mut doc = HtmlDocument::new(PAGE);
        render(&mut doc, &QueryContext::new(Some("15"), None));

        assert_eq!(
            doc.text_content(CATEGORY_TITLE).as_deref(),
            Some("What's Hot in Seocho-gu?")
        );
        assert_eq!(
            doc.attribute(FESTIVAL_LINK, "href").as_deref(),
            Some("festival/festival.html?sigungucode=15")
        );
    }

    #[test]
    fn test_without_code_falls_back_and_keeps_link() {
        let mut doc = HtmlDocument::new(PAGE);
        render(&mut doc, &QueryContext::default());

        assert_eq!(
            doc.text_content(CATEGORY_TITLE).as_deref(),
            Some("What's Hot in Seoul?")
        );
        assert_eq!(
            doc.attribute(FESTIVAL_LINK, "href").as_deref(),
            Some("festival/festival.html")
        );
    }

    #[test]
    fn test_unknown_code_still_links_with_code() {
        let mut doc = HtmlDocument::new(PAGE);
        render(&mut doc, &QueryContext::new(Some("99"), None));

        assert_eq!(doc.text_content(CATEGORY_TITLE).as_deref(), Some("What's Hot in Seoul?"));
        assert_eq!(
            doc.attribute(FESTIVAL_LINK, "href").as_deref(),
            Some("festival/festival.html?sigungucode=99")
        );
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut doc = HtmlDocument::new(r#"<main id="page-category"></main>"#);
        let before = doc.to_html();
        render(&mut doc, &QueryContext::new(Some("1"), None));
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_link_extends_template_href() {
        let mut doc = HtmlDocument::new(
            r#"<main id="page-category"><a id="festival-link" href="festival/festival.html?view=grid#list">Go</a></main>"#,
        );
        render(&mut doc, &QueryContext::new(Some("4"), None));
        assert_eq!(
            doc.attribute(FESTIVAL_LINK, "href").as_deref(),
            Some("festival/festival.html?view=grid&sigungucode=4#list")
        );
    }

    #[test]
    fn test_link_without_href_gets_default_target() {
        let mut doc = HtmlDocument::new(r#"<main id="page-category"><a id="festival-link">Go</a></main>"#);
        render(&mut doc, &QueryContext::new(Some("4"), None));
        assert_eq!(
            doc.attribute(FESTIVAL_LINK, "href").as_deref(),
            Some("festival/festival.html?sigungucode=4")
        );
    }
}
