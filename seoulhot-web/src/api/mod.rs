//! HTTP handlers for seoulhot-web

pub mod buildinfo;
pub mod health;
pub mod pages;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use pages::page_routes;
pub use ui::serve_style_css;
