//! In-memory document used to exercise the page behaviors without a browser.
//!
//! Only the parts of layout the behaviors observe are modelled: every element
//! has an explicit bounding rect and a layout width, hit testing picks the
//! last matching element in document order, and an element hidden with
//! `display: none` (directly or through an ancestor) reports `offsetWidth` 0.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::document::{DomNode, HostDocument, Rect};

const BODY: usize = 0;

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<usize>,
    rect: Rect,
    layout_width: f64,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<NodeData>,
    viewport: (f64, f64),
    scroll: (f64, f64),
}

impl Tree {
    fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(index))
            .map(|(i, _)| i)
    }

    /// Pre-order walk from `<body>`; detached nodes are not part of the document.
    fn document_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![BODY];
        while let Some(index) = stack.pop() {
            order.push(index);
            let mut children: Vec<usize> = self.children(index).collect();
            children.reverse();
            stack.extend(children);
        }
        order
    }

    fn is_displayed(&self, index: usize) -> bool {
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            if node.style.get("display").map(String::as_str) == Some("none") {
                return false;
            }
            current = node.parent;
        }
        true
    }

    fn is_attached(&self, index: usize) -> bool {
        let mut current = index;
        loop {
            if current == BODY {
                return true;
            }
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

/// Shared handle to an in-memory document.
#[derive(Clone)]
pub struct VirtualDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for VirtualDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDocument {
    /// Empty document with a `<body>` and a 1280×800 viewport.
    pub fn new() -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            ..Default::default()
        };
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![body],
                viewport: (1280.0, 800.0),
                scroll: (0.0, 0.0),
            })),
        }
    }

    pub fn body(&self) -> VirtualNode {
        self.node(BODY)
    }

    pub fn set_scroll(&self, x: f64, y: f64) {
        self.tree.borrow_mut().scroll = (x, y);
    }

    /// Creates `<tag>` as the last child of `parent`.
    pub fn append(&self, parent: &VirtualNode, tag: &str) -> VirtualNode {
        let node = self.detached(tag);
        parent.append_child(&node);
        node
    }

    fn detached(&self, tag: &str) -> VirtualNode {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(NodeData {
            tag: tag.to_string(),
            ..Default::default()
        });
        let index = tree.nodes.len() - 1;
        drop(tree);
        self.node(index)
    }

    fn node(&self, index: usize) -> VirtualNode {
        VirtualNode {
            tree: Rc::clone(&self.tree),
            index,
        }
    }
}

impl HostDocument for VirtualDocument {
    type Node = VirtualNode;

    fn elements_by_class(&self, class: &str) -> Vec<VirtualNode> {
        let tree = self.tree.borrow();
        tree.document_order()
            .into_iter()
            .filter(|&i| tree.nodes[i].classes.iter().any(|c| c == class))
            .map(|i| self.node(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<VirtualNode> {
        let tree = self.tree.borrow();
        tree.document_order()
            .into_iter()
            .find(|&i| tree.nodes[i].attributes.get("id").map(String::as_str) == Some(id))
            .map(|i| self.node(i))
    }

    fn element_from_point(&self, x: f64, y: f64) -> Option<VirtualNode> {
        let tree = self.tree.borrow();
        let (width, height) = tree.viewport;
        if x < 0.0 || y < 0.0 || x >= width || y >= height {
            return None;
        }

        let hit = tree.document_order().into_iter().rev().find(|&i| {
            let node = &tree.nodes[i];
            i != BODY
                && node.rect.contains(x, y)
                && tree.is_displayed(i)
                && node.style.get("pointer-events").map(String::as_str) != Some("none")
        });
        Some(self.node(hit.unwrap_or(BODY)))
    }

    fn create_element(&self, tag: &str) -> Option<VirtualNode> {
        Some(self.detached(tag))
    }

    fn append_to_body(&self, node: &VirtualNode) -> bool {
        self.body().append_child(node);
        true
    }

    fn scroll_offset(&self) -> (f64, f64) {
        self.tree.borrow().scroll
    }
}

/// Handle to one element of a [`VirtualDocument`].
#[derive(Clone)]
pub struct VirtualNode {
    tree: Rc<RefCell<Tree>>,
    index: usize,
}

impl PartialEq for VirtualNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.index == other.index
    }
}

impl fmt::Debug for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.index];
        write!(f, "<{}#{}", node.tag, self.index)?;
        if !node.classes.is_empty() {
            write!(f, ".{}", node.classes.join("."))?;
        }
        write!(f, ">")
    }
}

impl VirtualNode {
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_style(self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.tree.borrow_mut().nodes[self.index].rect = rect;
        self
    }

    /// Width the element occupies once displayed.
    pub fn with_layout_width(self, width: f64) -> Self {
        self.tree.borrow_mut().nodes[self.index].layout_width = width;
        self
    }

    pub fn append_child(&self, child: &VirtualNode) {
        self.tree.borrow_mut().nodes[child.index].parent = Some(self.index);
    }

    pub fn text(&self) -> String {
        self.tree.borrow().nodes[self.index].text.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.tree.borrow().nodes[self.index].classes.clone()
    }

    /// Takes the element (and its subtree) out of the document, as a re-render does.
    pub fn remove(&self) {
        self.tree.borrow_mut().nodes[self.index].parent = None;
    }

    pub fn is_attached(&self) -> bool {
        self.tree.borrow().is_attached(self.index)
    }
}

impl DomNode for VirtualNode {
    fn tag_name(&self) -> String {
        self.tree.borrow().nodes[self.index].tag.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.tree.borrow().nodes[self.index]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.tree.borrow_mut().nodes[self.index]
                .classes
                .push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.tree.borrow_mut().nodes[self.index]
            .classes
            .retain(|c| c != class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.tree.borrow().nodes[self.index]
            .attributes
            .get(name)
            .cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[self.index]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.tree.borrow().nodes[self.index].parent;
        parent.map(|index| VirtualNode {
            tree: Rc::clone(&self.tree),
            index,
        })
    }

    fn style(&self, property: &str) -> Option<String> {
        self.tree.borrow().nodes[self.index]
            .style
            .get(property)
            .cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.tree.borrow_mut().nodes[self.index]
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.tree.borrow_mut().nodes[self.index].text = text.to_string();
    }

    fn bounding_rect(&self) -> Rect {
        self.tree.borrow().nodes[self.index].rect
    }

    fn offset_width(&self) -> f64 {
        let tree = self.tree.borrow();
        if tree.is_attached(self.index) && tree.is_displayed(self.index) {
            tree.nodes[self.index].layout_width
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_by_class_in_document_order() {
        let doc = VirtualDocument::new();
        let first = doc.append(&doc.body(), "div").with_class("tab");
        let wrapper = doc.append(&doc.body(), "div");
        let second = doc.append(&wrapper, "button").with_class("tab");
        let third = doc.append(&doc.body(), "span").with_class("tab");

        assert_eq!(doc.elements_by_class("tab"), vec![first, second, third]);
        assert!(doc.elements_by_class("missing").is_empty());
    }

    #[test]
    fn test_detached_elements_are_not_found() {
        let doc = VirtualDocument::new();
        let node = doc.create_element("div").unwrap().with_id("tooltip");
        assert!(doc.element_by_id("tooltip").is_none());

        assert!(doc.append_to_body(&node));
        assert_eq!(doc.element_by_id("tooltip"), Some(node));
    }

    #[test]
    fn test_element_from_point_picks_topmost() {
        let doc = VirtualDocument::new();
        let card = doc
            .append(&doc.body(), "div")
            .with_rect(Rect::new(0.0, 0.0, 200.0, 200.0));
        let link = doc
            .append(&card, "a")
            .with_rect(Rect::new(10.0, 10.0, 50.0, 20.0));

        assert_eq!(doc.element_from_point(20.0, 15.0), Some(link));
        assert_eq!(doc.element_from_point(150.0, 150.0), Some(card));
        assert_eq!(doc.element_from_point(500.0, 500.0), Some(doc.body()));
        assert_eq!(doc.element_from_point(-1.0, 10.0), None);
        assert_eq!(doc.element_from_point(10.0, 800.0), None);
    }

    #[test]
    fn test_hidden_elements_have_no_width_and_no_hits() {
        let doc = VirtualDocument::new();
        let panel = doc
            .append(&doc.body(), "div")
            .with_style("display", "none")
            .with_rect(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_layout_width(100.0);

        assert_eq!(panel.offset_width(), 0.0);
        assert_eq!(doc.element_from_point(50.0, 50.0), Some(doc.body()));

        panel.set_style("display", "block");
        assert_eq!(panel.offset_width(), 100.0);
        assert_eq!(doc.element_from_point(50.0, 50.0), Some(panel));
    }

    #[test]
    fn test_class_list_semantics() {
        let doc = VirtualDocument::new();
        let tab = doc.append(&doc.body(), "button").with_class("tab");
        tab.add_class("active");
        tab.add_class("active");
        assert_eq!(tab.classes(), vec!["tab".to_string(), "active".to_string()]);

        tab.remove_class("active");
        assert!(!tab.has_class("active"));
        assert!(tab.has_class("tab"));
    }
}
