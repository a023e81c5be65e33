//! In-memory page backing
//!
//! A minimal element arena implementing [`PageDom`] and [`ElementHandle`]
//! for tests and for hosts without a real document. Elements live in
//! creation order, which doubles as document order for selector queries.
//! There is no tree structure and no HTML or CSS engine behind it, only
//! the surface the enhancer touches: tag, id, classes, inline styles and
//! text.

use crate::dom::{ElementHandle, PageDom};
use crate::selector::Selector;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: HashMap<String, String>,
    text: String,
}

#[derive(Debug, Default)]
struct PageInner {
    nodes: Vec<NodeData>,
}

/// An in-memory page shared between the host and scheduled work
///
/// Cloning is cheap and every clone sees the same elements.
#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    inner: Arc<RwLock<PageInner>>,
}

impl MemoryPage {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with the given tag name and return its handle
    pub fn append(&self, tag: impl Into<String>) -> MemoryElement {
        let mut inner = self.inner.write();
        let index = inner.nodes.len();
        inner.nodes.push(NodeData {
            tag: tag.into(),
            ..NodeData::default()
        });

        MemoryElement {
            inner: Arc::clone(&self.inner),
            index,
        }
    }

    /// Number of elements on the page
    pub fn len(&self) -> usize {
        self.inner.read().nodes.len()
    }

    /// Whether the page has no elements
    pub fn is_empty(&self) -> bool {
        self.inner.read().nodes.is_empty()
    }
}

impl PageDom for MemoryPage {
    type Element = MemoryElement;

    fn select_all(&self, selector: &Selector) -> Vec<MemoryElement> {
        let inner = self.inner.read();
        inner
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| selector.matches(&node.tag, node.id.as_deref(), &node.classes))
            .map(|(index, _)| MemoryElement {
                inner: Arc::clone(&self.inner),
                index,
            })
            .collect()
    }
}

/// Handle to one element of a [`MemoryPage`]
#[derive(Clone, Debug)]
pub struct MemoryElement {
    inner: Arc<RwLock<PageInner>>,
    index: usize,
}

impl MemoryElement {
    /// Add a class, returning the handle for chaining
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.inner.write().nodes[self.index].classes.push(class.into());
        self
    }

    /// Set the id, returning the handle for chaining
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.inner.write().nodes[self.index].id = Some(id.into());
        self
    }

    /// Set the text content, returning the handle for chaining
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.inner.write().nodes[self.index].text = text.into();
        self
    }
}

impl ElementHandle for MemoryElement {
    fn style(&self, property: &str) -> Option<String> {
        self.inner.read().nodes[self.index].styles.get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.inner.write().nodes[self.index]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.inner.read().nodes[self.index].text.clone()
    }

    fn set_text(&self, text: &str) {
        self.inner.write().nodes[self.index].text = text.to_string();
    }
}
