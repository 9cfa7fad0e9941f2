//! Page controller
//!
//! Every template carries one page marker element. The controller detects
//! which page it is rendering from that marker and runs that page's
//! renderer, at most once per render. A template without a marker is
//! returned as-is.

use std::fmt;
use std::sync::Arc;

use seoulhot_common::QueryContext;
use tracing::debug;

use crate::client::RecommendationSource;
use crate::document::HtmlDocument;
use crate::render;
use crate::render::detail::DetailStep;

/// Kind of page being rendered, derived from its marker element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Main,
    Category,
    List,
    Detail,
}

impl PageKind {
    /// Detection order; the first marker found wins
    pub const ALL: [PageKind; 4] = [Self::Main, Self::Category, Self::List, Self::Detail];

    /// Id of the marker element identifying this page
    pub fn marker(self) -> &'static str {
        match self {
            Self::Main => "page-main",
            Self::Category => "page-category",
            Self::List => "page-list",
            Self::Detail => "page-detail",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Category => "category",
            Self::List => "list",
            Self::Detail => "detail",
        }
    }

    pub fn detect(doc: &HtmlDocument) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| doc.has_element(kind.marker()))
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finished page and the renderer that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub kind: Option<PageKind>,
    pub html: String,
}

/// Result of the synchronous render pass
enum Pass<'q> {
    Rendered(RenderedPage),
    NeedsFetch(&'q str),
}

/// Dispatches a template to its page renderer
#[derive(Clone)]
pub struct PageController {
    source: Arc<dyn RecommendationSource>,
}

impl PageController {
    pub fn new(source: Arc<dyn RecommendationSource>) -> Self {
        Self { source }
    }

    /// Render a page template against the request's query
    ///
    /// Pages without a marker, and the main page, are returned byte for
    /// byte. Only the detail page awaits the recommendation source; its
    /// document is rebuilt after the request since the tree cannot be held
    /// across the await.
    pub async fn render(&self, template: &str, query: &QueryContext) -> RenderedPage {
        let content_id = match first_pass(template, query) {
            Pass::Rendered(page) => return page,
            Pass::NeedsFetch(content_id) => content_id,
        };

        let fetched = self.source.recommendations(content_id).await;

        let mut doc = HtmlDocument::new(template);
        render::detail::bind_fetched(&mut doc, query, content_id, fetched);
        RenderedPage {
            kind: Some(PageKind::Detail),
            html: doc.to_html(),
        }
    }
}

fn first_pass<'q>(template: &str, query: &'q QueryContext) -> Pass<'q> {
    let mut doc = HtmlDocument::new(template);

    let Some(kind) = PageKind::detect(&doc) else {
        debug!("No page marker found, serving template unchanged");
        return Pass::Rendered(RenderedPage {
            kind: None,
            html: template.to_string(),
        });
    };

    debug!(page = %kind, ?query, "Rendering page");

    let changed = match kind {
        // Main page has no server-side bindings
        PageKind::Main => false,
        PageKind::Category => {
            render::category::render(&mut doc, query);
            true
        }
        PageKind::List => {
            render::festival::render(&mut doc, query);
            true
        }
        PageKind::Detail => {
            if !doc.has_element(render::DETAIL_TITLE) {
                false
            } else {
                match render::detail::prepare(&mut doc, query) {
                    DetailStep::Fetch(content_id) => return Pass::NeedsFetch(content_id),
                    DetailStep::Done => true,
                }
            }
        }
    };

    let html = if changed {
        doc.to_html()
    } else {
        template.to_string()
    };
    Pass::Rendered(RenderedPage {
        kind: Some(kind),
        html,
    })
}
