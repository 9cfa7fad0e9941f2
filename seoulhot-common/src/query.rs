//! Query context derived from a page URL
//!
//! Pages read two parameters: `sigungucode` (district code, optional on
//! every page) and `contentid` (festival id, required by the detail page).
//! When a parameter repeats, its first occurrence is used. An empty value is
//! treated the same as a missing one.

pub const SIGUNGUCODE_PARAM: &str = "sigungucode";
pub const CONTENT_ID_PARAM: &str = "contentid";

/// Parameters read from the page URL, parsed once per page render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub sigungucode: Option<String>,
    pub content_id: Option<String>,
}

impl QueryContext {
    pub fn new(sigungucode: Option<&str>, content_id: Option<&str>) -> Self {
        Self {
            sigungucode: non_empty(sigungucode),
            content_id: non_empty(content_id),
        }
    }

    /// Build from decoded `(name, value)` pairs in URL order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut sigungucode: Option<String> = None;
        let mut content_id: Option<String> = None;

        for (name, value) in pairs {
            let slot = match name.as_ref() {
                SIGUNGUCODE_PARAM => &mut sigungucode,
                CONTENT_ID_PARAM => &mut content_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }

        Self::new(sigungucode.as_deref(), content_id.as_deref())
    }

    pub fn sigungucode(&self) -> Option<&str> {
        self.sigungucode.as_deref()
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
