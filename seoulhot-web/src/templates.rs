//! Page templates
//!
//! The four built-in templates are embedded at compile time. When a
//! templates directory is configured, a file there with the same relative
//! path overrides the built-in one. Overrides are read on every request.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{PageError, PageResult};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const CATEGORY_HTML: &str = include_str!("../ui/category.html");
const FESTIVAL_HTML: &str = include_str!("../ui/festival/festival.html");
const RECOMMENDATION_HTML: &str = include_str!("../ui/festival/recommandation.html");

/// One of the site's page templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    Index,
    Category,
    Festival,
    Recommendation,
}

impl PageTemplate {
    /// Path relative to the site root (and to the templates directory)
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Category => "category.html",
            Self::Festival => "festival/festival.html",
            Self::Recommendation => "festival/recommandation.html",
        }
    }

    pub fn embedded(self) -> &'static str {
        match self {
            Self::Index => INDEX_HTML,
            Self::Category => CATEGORY_HTML,
            Self::Festival => FESTIVAL_HTML,
            Self::Recommendation => RECOMMENDATION_HTML,
        }
    }
}

/// Template lookup with optional on-disk overrides
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    dir: Option<PathBuf>,
}

impl TemplateSet {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub async fn load(&self, template: PageTemplate) -> PageResult<String> {
        let Some(dir) = &self.dir else {
            return Ok(template.embedded().to_string());
        };

        let path = dir.join(template.path());
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => {
                debug!("Using template override {}", path.display());
                Ok(html)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Template override {} not found, using built-in template",
                    path.display()
                );
                Ok(template.embedded().to_string())
            }
            Err(source) => Err(PageError::Template {
                name: template.path(),
                source,
            }),
        }
    }
}
