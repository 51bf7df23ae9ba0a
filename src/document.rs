//! In-memory document tree used by every conversion phase
//!
//! The tree is stored as an arena: every element lives in one vector and is
//! addressed by a [`NodeId`]. Parent and child links are indices into that
//! vector, so phases can collect a snapshot of node ids first and mutate the
//! tree afterwards without fighting the borrow checker or invalidating an
//! iterator mid-walk.
//!
//! Detaching a node only unlinks it from its parent. The record stays in the
//! arena but is no longer reachable from [`Document::root`], which is what
//! serialization and all queries start from.
//!
//! Character data follows the text/tail model: an element's `text` is what
//! precedes its first child, and a child's `tail` is what follows it up to
//! the next sibling. The tail belongs to the node and moves with it.

/// Handle to an element stored in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single element record
#[derive(Debug, Clone, Default)]
struct NodeData {
    name: String,
    /// Attributes in insertion order
    attributes: Vec<(String, String)>,
    text: Option<String>,
    /// Text between this element's end tag and the next sibling
    tail: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree with a single root element
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// Create a document containing only a root element called `root_name`
    pub fn new(root_name: &str) -> Self {
        let root = NodeData {
            name: root_name.to_string(),
            ..Default::default()
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// The root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a new detached element
    pub fn create_element(&mut self, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name: name.to_string(),
            ..Default::default()
        });
        id
    }

    /// Create a new element and append it as the last child of `parent`
    pub fn append_element(&mut self, parent: NodeId, name: &str) -> NodeId {
        let child = self.create_element(name);
        self.append_child(parent, child);
        child
    }

    /// Move `child` to the end of `parent`'s children
    ///
    /// The child is detached from its current parent first. `child` must not
    /// be `parent` itself or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            !self.ancestors(parent).any(|a| a == child) && parent != child,
            "appending a node below itself"
        );
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Move every subtree of `other` below `parent`, keeping `other`'s root
    ///
    /// Returns the id the other document's root received in this arena.
    pub fn graft(&mut self, parent: NodeId, other: &Document) -> NodeId {
        let copied = self.copy_from(other, other.root);
        self.append_child(parent, copied);
        copied
    }

    fn copy_from(&mut self, other: &Document, node: NodeId) -> NodeId {
        let source = &other.nodes[node.0];
        let id = self.create_element(&source.name);
        self.nodes[id.0].attributes = source.attributes.clone();
        self.nodes[id.0].text = source.text.clone();
        self.nodes[id.0].tail = source.tail.clone();
        for &child in &source.children {
            let copied = self.copy_from(other, child);
            self.append_child(id, copied);
        }
        id
    }

    /// Unlink `node` from its parent; a no-op for the root or detached nodes
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    /// Detach `node`, leaving its tail text in place
    ///
    /// The tail is appended to the previous sibling's tail, or to the parent's
    /// text when `node` is the first child.
    pub fn remove_keeping_tail(&mut self, node: NodeId) {
        if let (Some(tail), Some(parent)) = (self.nodes[node.0].tail.take(), self.parent(node)) {
            let siblings = self.children(parent);
            let previous = siblings
                .iter()
                .position(|&c| c == node)
                .and_then(|i| i.checked_sub(1))
                .map(|i| siblings[i]);
            let slot = match previous {
                Some(previous) => &mut self.nodes[previous.0].tail,
                None => &mut self.nodes[parent.0].text,
            };
            slot.get_or_insert_with(String::new).push_str(&tail);
        }
        self.detach(node);
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].name
    }

    pub fn set_name(&mut self, node: NodeId, name: &str) {
        self.nodes[node.0].name = name.to_string();
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].text.as_deref()
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0].text = Some(text.into());
    }

    pub fn tail(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].tail.as_deref()
    }

    pub fn set_tail(&mut self, node: NodeId, tail: impl Into<String>) {
        self.nodes[node.0].tail = Some(tail.into());
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing the value in place if it already exists
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.nodes[node.0].attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => attributes.push((name.to_string(), value)),
        }
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        let attributes = &mut self.nodes[node.0].attributes;
        let index = attributes.iter().position(|(key, _)| key == name)?;
        Some(attributes.remove(index).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn attributes(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.nodes[node.0]
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Mutable access to every attribute value of `node`
    pub fn attribute_values_mut(&mut self, node: NodeId) -> impl Iterator<Item = &mut String> {
        self.nodes[node.0]
            .attributes
            .iter_mut()
            .map(|(_, value)| value)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// First direct child called `name`
    pub fn find_child(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .find(|&child| self.name(child) == name)
    }

    /// All direct children called `name`, in order
    pub fn children_named(&self, node: NodeId, name: &str) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|&child| self.name(child) == name)
            .collect()
    }

    /// Every element below `node` in document order, `node` excluded
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Every element below `node` called `name`, in document order
    pub fn descendants_named(&self, node: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|&n| self.name(n) == name)
            .collect()
    }

    /// Walk from the parent of `node` up to the root
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node), move |&n| self.parent(n))
    }
}
