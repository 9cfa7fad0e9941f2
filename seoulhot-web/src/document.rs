//! Page template document
//!
//! Page templates are plain HTML. Renderers address placeholders the same
//! way page scripts address the DOM: by element `id`, or by class for the
//! recommendation cards. [`HtmlDocument`] parses a template with html5ever
//! into an `RcDom` tree, edits the tree in place and serializes it back.
//!
//! Every operation on a missing element is a no-op that reports `false`.
//!
//! The tree is reference counted and not `Send`; build a document, edit it
//! and serialize it without holding it across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, Attribute, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use tracing::warn;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escape text for use in element content or a quoted attribute value
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn parse(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false,
            ..TreeBuilderOpts::default()
        },
        ..ParseOpts::default()
    };
    parse_document(RcDom::default(), opts).one(html)
}

fn element_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn attribute_of(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn write_attribute(node: &Handle, name: &str, value: &str) {
    let NodeData::Element { attrs, .. } = &node.data else {
        return;
    };
    let mut attrs = attrs.borrow_mut();
    match attrs.iter_mut().find(|attr| &*attr.name.local == name) {
        Some(attr) => attr.value = StrTendril::from_slice(value),
        None => attrs.push(Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
            value: StrTendril::from_slice(value),
        }),
    }
}

fn has_class(node: &Handle, class: &str) -> bool {
    attribute_of(node, "class")
        .map_or(false, |classes| classes.split_ascii_whitespace().any(|c| c == class))
}

/// First element in document order satisfying `pred`
fn find_element(node: &Handle, pred: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    if element_name(node).is_some() && pred(node) {
        return Some(node.clone());
    }
    let children = node.children.borrow();
    children.iter().find_map(|child| find_element(child, pred))
}

/// Every element satisfying `pred`, in document order
fn collect_elements(node: &Handle, pred: &dyn Fn(&Handle) -> bool, out: &mut Vec<Handle>) {
    if element_name(node).is_some() && pred(node) {
        out.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_elements(child, pred, out);
    }
}

fn replace_children(parent: &Handle, children: Vec<Handle>) {
    for old in parent.children.borrow().iter() {
        old.parent.set(None);
    }
    for child in &children {
        child.parent.set(Some(Rc::downgrade(parent)));
    }
    *parent.children.borrow_mut() = children;
}

/// Nodes for a markup snippet, parsed in body context
fn parse_nodes(markup: &str) -> Vec<Handle> {
    let dom = parse(&format!("<body>{}", markup));
    let Some(body) = find_element(&dom.document, &|node| element_name(node) == Some("body")) else {
        return Vec::new();
    };
    let nodes = std::mem::take(&mut *body.children.borrow_mut());
    nodes
}

fn serialize_children(node: &Handle) -> String {
    let mut out = Vec::new();
    let handle = SerializableHandle::from(node.clone());
    if let Err(e) = serialize(&mut out, &handle, SerializeOpts::default()) {
        warn!(error = %e, "Failed to serialize document");
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// HTML page template being rendered
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    pub fn new(html: &str) -> Self {
        Self { dom: parse(html) }
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        serialize_children(&self.dom.document)
    }

    fn element_by_id(&self, id: &str) -> Option<Handle> {
        find_element(&self.dom.document, &|node| {
            attribute_of(node, "id").as_deref() == Some(id)
        })
    }

    /// Element by id whose content may be replaced
    fn container_by_id(&self, id: &str) -> Option<Handle> {
        self.element_by_id(id)
            .filter(|el| !element_name(el).map_or(false, |name| VOID_ELEMENTS.contains(&name)))
    }

    /// Whether an element with this id exists
    pub fn has_element(&self, id: &str) -> bool {
        self.element_by_id(id).is_some()
    }

    /// Replace the element's content with markup
    ///
    /// Returns `false` when the element is missing or is a void element.
    pub fn set_inner_html(&mut self, id: &str, markup: &str) -> bool {
        match self.container_by_id(id) {
            Some(el) => {
                replace_children(&el, parse_nodes(markup));
                true
            }
            None => false,
        }
    }

    /// Replace the element's content with a single text node
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(el) = self.container_by_id(id) else {
            return false;
        };
        let children = if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::new(NodeData::Text {
                contents: RefCell::new(StrTendril::from_slice(text)),
            })]
        };
        replace_children(&el, children);
        true
    }

    /// Decoded attribute value
    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        attribute_of(&self.element_by_id(id)?, name)
    }

    /// Set (or add) an attribute on the element
    pub fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.element_by_id(id) {
            Some(el) => {
                write_attribute(&el, name, value);
                true
            }
            None => false,
        }
    }

    /// Rewrite one attribute on every element carrying `class`
    ///
    /// `update` sees the current decoded value (in document order) and
    /// returns the new value, or `None` to leave the element untouched.
    /// Returns the number of elements rewritten.
    pub fn update_attribute_by_class<F>(&mut self, class: &str, name: &str, mut update: F) -> usize
    where
        F: FnMut(Option<&str>) -> Option<String>,
    {
        let mut elements = Vec::new();
        collect_elements(&self.dom.document, &|node| has_class(node, class), &mut elements);

        let mut rewritten = 0;
        for el in &elements {
            if let Some(value) = update(attribute_of(el, name).as_deref()) {
                write_attribute(el, name, &value);
                rewritten += 1;
            }
        }
        rewritten
    }

    /// Serialized content of the element
    #[cfg(test)]
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.element_by_id(id).map(|el| serialize_children(&el))
    }

    /// Text of the element and its descendants
    #[cfg(test)]
    pub fn text_content(&self, id: &str) -> Option<String> {
        let el = self.element_by_id(id)?;
        let mut text = String::new();
        collect_text(&el, &mut text);
        Some(text)
    }

    #[cfg(test)]
    pub fn attributes_by_class(&self, class: &str, name: &str) -> Vec<Option<String>> {
        let mut elements = Vec::new();
        collect_elements(&self.dom.document, &|node| has_class(node, class), &mut elements);
        elements.iter().map(|el| attribute_of(el, name)).collect()
    }
}
