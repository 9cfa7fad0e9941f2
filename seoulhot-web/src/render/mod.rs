//! Page renderers
//!
//! Each renderer binds one page kind's placeholders. Element ids and classes
//! here are the contract with the page templates under `ui/`.

pub mod cards;
pub mod category;
pub mod detail;
pub mod festival;

pub const CATEGORY_TITLE: &str = "category-title";
pub const FESTIVAL_LINK: &str = "festival-link";
pub const FESTIVAL_TITLE: &str = "festival-title";
pub const REC_LINK_CLASS: &str = "rec-link";

pub const BACK_LINK: &str = "back-link";
pub const DETAIL_TITLE: &str = "detail-title-placeholder";
pub const DETAIL_CHIP: &str = "detail-chip-placeholder";
pub const DETAIL_DESC: &str = "detail-desc-placeholder";
pub const DETAIL_IMG: &str = "detail-img-placeholder";
pub const DETAIL_CONTENT: &str = "detail-content";
pub const TRACK1_LIST: &str = "track1-list";
pub const TRACK2_LIST: &str = "track2-list";

/// Append `name=value` to a link target, keeping any `#fragment` last
///
/// The separator is `&` when the target already has a query string and `?`
/// otherwise.
pub fn append_query_param(href: &str, name: &str, value: &str) -> String {
    let (base, fragment) = match href.find('#') {
        Some(i) => href.split_at(i),
        None => (href, ""),
    };
    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };
    format!(
        "{}{}{}={}{}",
        base,
        separator,
        name,
        urlencoding::encode(value),
        fragment
    )
}
