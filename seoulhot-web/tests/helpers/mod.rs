//! Test Helper Utilities
//!
//! Inspect rendered pages returned by the router.

#![allow(dead_code)]

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// Parsed response body
pub struct Page {
    dom: RcDom,
}

fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn walk(node: &Handle, out: &mut Vec<Handle>) {
    if let NodeData::Element { .. } = node.data {
        out.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        walk(child, out);
    }
}

fn text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        text(child, out);
    }
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    fn elements(&self) -> Vec<Handle> {
        let mut out = Vec::new();
        walk(&self.dom.document, &mut out);
        out
    }

    fn by_id(&self, id: &str) -> Option<Handle> {
        self.elements()
            .into_iter()
            .find(|el| attr(el, "id").as_deref() == Some(id))
    }

    pub fn has(&self, id: &str) -> bool {
        self.by_id(id).is_some()
    }

    /// Text content of the element with this id
    pub fn text(&self, id: &str) -> Option<String> {
        let el = self.by_id(id)?;
        let mut out = String::new();
        text(&el, &mut out);
        Some(out)
    }

    /// Serialized content of the element with this id
    pub fn inner_html(&self, id: &str) -> Option<String> {
        let el = self.by_id(id)?;
        let mut out = Vec::new();
        serialize(&mut out, &SerializableHandle::from(el), SerializeOpts::default()).unwrap();
        Some(String::from_utf8(out).unwrap())
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<String> {
        attr(&self.by_id(id)?, name)
    }

    /// Attribute of every element carrying `class`, in document order
    pub fn attrs_by_class(&self, class: &str, name: &str) -> Vec<Option<String>> {
        self.elements()
            .into_iter()
            .filter(|el| {
                attr(el, "class").map_or(false, |c| c.split_ascii_whitespace().any(|c| c == class))
            })
            .map(|el| attr(&el, name))
            .collect()
    }
}
