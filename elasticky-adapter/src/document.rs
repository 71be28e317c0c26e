use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use elasticky::{EventKind, EventTarget, Host};

/// Handle to an element of a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

#[derive(Clone, Debug, Default)]
struct Node {
    /// Class tokens in insertion order, without duplicates (like a DOM token list).
    classes: Vec<String>,
    scroll_top: f64,
    padding_top: String,
}

/// A flat, in-memory document.
///
/// It has a root element ([`MemoryDocument::ROOT`]) plus any number of elements registered
/// under an exact-match selector. Listener registrations are recorded so tests and simulations
/// can check what a widget attached.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    selectors: BTreeMap<String, NodeId>,
    page_y: f64,
    listeners: Vec<(EventTarget<NodeId>, EventKind)>,
}

impl MemoryDocument {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        let mut selectors = BTreeMap::new();
        selectors.insert("html".to_string(), Self::ROOT);
        Self {
            nodes: alloc::vec![Node {
                padding_top: "0px".to_string(),
                ..Node::default()
            }],
            selectors,
            page_y: 0.0,
            listeners: Vec::new(),
        }
    }

    /// Adds an element reachable through `selector`. Re-registering a selector points it at the
    /// new element.
    pub fn insert(&mut self, selector: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            padding_top: "0px".to_string(),
            ..Node::default()
        });
        self.selectors.insert(selector.into(), id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn page_y(&self) -> f64 {
        self.page_y
    }

    pub fn set_page_y(&mut self, y: f64) {
        self.page_y = y;
    }

    /// Sets the scroll offset of `target`, window or element.
    pub fn scroll_to(&mut self, target: &EventTarget<NodeId>, y: f64) {
        match target {
            EventTarget::Window => self.page_y = y,
            EventTarget::Element(id) => {
                if let Some(node) = self.node_mut(*id) {
                    node.scroll_top = y;
                }
            }
        }
    }

    pub fn set_scroll_top(&mut self, id: NodeId, y: f64) {
        self.scroll_to(&EventTarget::Element(id), y);
    }

    /// Sets the computed `padding-top` as the style engine would report it, e.g. `"64px"`.
    pub fn set_padding_top(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.padding_top = value.into();
        }
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.node(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// The element's `class` attribute.
    pub fn class_name(&self, id: NodeId) -> String {
        self.classes(id).join(" ")
    }

    pub fn listeners(&self) -> &[(EventTarget<NodeId>, EventKind)] {
        &self.listeners
    }

    pub fn is_listening(&self, target: &EventTarget<NodeId>, event: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|(t, e)| t == target && *e == event)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MemoryDocument {
    type Element = NodeId;

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.selectors.get(selector).copied()
    }

    fn document_element(&self) -> NodeId {
        Self::ROOT
    }

    fn page_y_offset(&self) -> f64 {
        self.page_y
    }

    fn scroll_top(&self, element: &NodeId) -> f64 {
        self.node(*element).map_or(0.0, |n| n.scroll_top)
    }

    fn computed_padding_top(&self, element: &NodeId) -> String {
        self.node(*element)
            .map(|n| n.padding_top.clone())
            .unwrap_or_default()
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        let Some(node) = self.node_mut(*element) else {
            return;
        };
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) {
        if let Some(node) = self.node_mut(*element) {
            node.classes.retain(|c| c != class);
        }
    }

    fn add_listener(&mut self, target: &EventTarget<NodeId>, event: EventKind) {
        // One entry per registration: every widget attaches its own handler.
        self.listeners.push((target.clone(), event));
    }

    fn remove_listener(&mut self, target: &EventTarget<NodeId>, event: EventKind) {
        if let Some(i) = self
            .listeners
            .iter()
            .position(|(t, e)| t == target && *e == event)
        {
            self.listeners.remove(i);
        }
    }
}
