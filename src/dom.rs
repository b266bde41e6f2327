/// In-memory document tree
///
/// A small arena-backed element tree standing in for a browser page.
/// `detach` keeps a node alive so it can be appended elsewhere;
/// `remove_children` drops the removed subtrees and recycles their slots, so
/// handles into a removed subtree must not be used afterwards.
use thiserror::Error;
use tracing::warn;

/// Handle to a node owned by a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Errors from operations that need a particular kind of node
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Node {0:?} is not a select element")]
    NotASelect(NodeId),

    #[error("Node {0:?} is not a details element")]
    NotADetails(NodeId),
}

/// One choice of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// State of a single-choice select element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    /// Shown while nothing is selected; its value is the empty string
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
    pub value: String,
    /// Whether a change listener has been registered
    pub listening: bool,
}

impl SelectControl {
    /// Label of the current value, falling back to the placeholder
    pub fn current_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.value == self.value)
            .map(|opt| opt.label.as_str())
            .or(self.placeholder.as_deref())
    }
}

/// Raised when a listened-to select element changes value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: NodeId,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub select: Option<SelectControl>,
    /// Disclosure state for `details` elements
    pub open: bool,
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    /// Slots released by `remove_children`, reused by `push`
    free: Vec<NodeId>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty `body` root
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    /// Create a document whose body holds one empty `div` with the given id
    pub fn with_container(id: &str) -> Self {
        let mut doc = Self::new();
        let container = doc.create_element("div");
        doc.set_attribute(container, "id", id);
        doc.append_child(doc.root, container);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id).data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.node_mut(id).data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let node = Node {
            data,
            parent: None,
            children: Vec::new(),
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = node;
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Release `id` and all of its descendants for reuse
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            let slot = self.node_mut(node);
            stack.append(&mut slot.children);
            slot.parent = None;
            slot.data = NodeData::Text(String::new());
            self.free.push(node);
        }
    }

    /// Number of live nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Whether `ancestor` is `node` itself or one of its ancestors
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData {
            tag: tag.to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            select: None,
            open: false,
        }))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.node(id).data
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Child elements with the given tag, in document order
    pub fn children_by_tag<'a>(&'a self, id: NodeId, tag: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.tag(child) == Some(tag))
    }

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    ///
    /// Appending a node under itself or one of its descendants is refused.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.contains(child, parent) {
            warn!("DOM: refusing to append {:?} under its own subtree {:?}", child, parent);
            return;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Remove a node from its parent
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != id);
        }
    }

    /// Remove and drop all children of a node, along with their subtrees
    pub fn remove_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.release(child);
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute; no-op on text nodes
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            match el.attributes.iter_mut().find(|(key, _)| key == name) {
                Some(entry) => entry.1 = value.to_string(),
                None => el.attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.attribute(id, "id")
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.element(id).map(|el| el.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    /// Depth-first search below the root for an attached element with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.element_id(node) == Some(id) {
                return Some(node);
            }
            stack.extend(self.children(node).iter().rev());
        }
        None
    }

    /// Concatenated text of a node and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(_) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Turn an element into a select control
    pub fn set_select(&mut self, id: NodeId, control: SelectControl) {
        if let Some(el) = self.element_mut(id) {
            el.select = Some(control);
        }
    }

    pub fn select(&self, id: NodeId) -> Option<&SelectControl> {
        self.element(id)?.select.as_ref()
    }

    /// Change the value of a select element
    ///
    /// Like a user-driven change, this yields an event even when the value is
    /// unchanged, provided a listener is registered.
    pub fn set_select_value(&mut self, id: NodeId, value: &str) -> Result<Option<ChangeEvent>, DomError> {
        let control = self
            .element_mut(id)
            .and_then(|el| el.select.as_mut())
            .ok_or(DomError::NotASelect(id))?;
        control.value = value.to_string();
        if control.listening {
            Ok(Some(ChangeEvent {
                target: id,
                value: value.to_string(),
            }))
        } else {
            Ok(None)
        }
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.element(id).map(|el| el.open).unwrap_or(false)
    }

    /// Flip a details element between open and closed, returning the new state
    pub fn toggle_open(&mut self, id: NodeId) -> Result<bool, DomError> {
        match self.element_mut(id) {
            Some(el) if el.tag == "details" => {
                el.open = !el.open;
                Ok(el.open)
            }
            _ => Err(DomError::NotADetails(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_container_is_findable() {
        let doc = Document::with_container("content_container");
        let container = doc.get_element_by_id("content_container").unwrap();
        assert_eq!(doc.tag(container), Some("div"));
        assert_eq!(doc.parent(container), Some(doc.root()));
        assert!(doc.get_element_by_id("missing").is_none());
    }

    #[test]
    fn test_detached_elements_are_not_found_by_id() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "id", "floating");
        assert!(doc.get_element_by_id("floating").is_none());

        doc.append_child(doc.root(), el);
        assert_eq!(doc.get_element_by_id("floating"), Some(el));
    }

    #[test]
    fn test_append_child_moves_node() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_text("hi");
        doc.append_child(a, child);
        doc.append_child(b, child);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_remove_children_frees_subtrees() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let c1 = doc.create_element("span");
        let c2 = doc.create_element("span");
        let text = doc.create_text("$5");
        doc.append_child(c2, text);
        doc.append_child(parent, c1);
        doc.append_child(parent, c2);
        assert_eq!(doc.node_count(), 5);

        doc.remove_children(parent);

        assert!(doc.children(parent).is_empty());
        assert_eq!(doc.node_count(), 2);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        for _ in 0..100 {
            let child = doc.create_element("span");
            let text = doc.create_text("x");
            doc.append_child(child, text);
            doc.append_child(parent, child);
            doc.remove_children(parent);
        }
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.nodes.len(), 4);
    }

    #[test]
    fn test_append_into_own_subtree_is_refused() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner);

        doc.append_child(inner, outer);
        doc.append_child(outer, outer);

        assert_eq!(doc.parent(inner), Some(outer));
        assert_eq!(doc.parent(outer), None);
        assert_eq!(doc.children(outer), &[inner]);
        assert!(doc.children(inner).is_empty());
        assert_eq!(doc.text_content(outer), "");
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let span = doc.create_element("span");
        let t1 = doc.create_text("Spring Roll");
        let t2 = doc.create_text("$5");
        doc.append_child(span, t1);
        doc.append_child(p, span);
        doc.append_child(p, t2);

        assert_eq!(doc.text_content(p), "Spring Roll$5");
    }

    #[test]
    fn test_attributes_overwrite() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "data-x", "1");
        doc.set_attribute(el, "data-x", "2");
        assert_eq!(doc.attribute(el, "data-x"), Some("2"));
        assert_eq!(doc.attribute(el, "data-y"), None);
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut doc = Document::new();
        let el = doc.create_element("span");
        doc.add_class(el, "price");
        doc.add_class(el, "price");
        assert_eq!(doc.classes(el), &["price".to_string()]);
        assert!(doc.has_class(el, "price"));
    }

    #[test]
    fn test_set_select_value_without_listener_yields_no_event() {
        let mut doc = Document::new();
        let select = doc.create_element("select");
        doc.set_select(select, SelectControl::default());

        let event = doc.set_select_value(select, "app").unwrap();
        assert!(event.is_none());
        assert_eq!(doc.select(select).unwrap().value, "app");
    }

    #[test]
    fn test_set_select_value_with_listener_yields_event() {
        let mut doc = Document::new();
        let select = doc.create_element("select");
        doc.set_select(
            select,
            SelectControl {
                listening: true,
                ..Default::default()
            },
        );

        let event = doc.set_select_value(select, "app").unwrap().unwrap();
        assert_eq!(event, ChangeEvent { target: select, value: "app".into() });
    }

    #[test]
    fn test_set_select_value_on_plain_element_fails() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        assert_eq!(doc.set_select_value(div, "x"), Err(DomError::NotASelect(div)));
    }

    #[test]
    fn test_current_label_falls_back_to_placeholder() {
        let control = SelectControl {
            placeholder: Some("Select one".into()),
            options: vec![SelectOption::new("app", "Appetizers")],
            value: String::new(),
            listening: true,
        };
        assert_eq!(control.current_label(), Some("Select one"));

        let control = SelectControl {
            value: "app".into(),
            ..control
        };
        assert_eq!(control.current_label(), Some("Appetizers"));
    }

    #[test]
    fn test_toggle_open_only_on_details() {
        let mut doc = Document::new();
        let details = doc.create_element("details");
        let div = doc.create_element("div");

        assert_eq!(doc.toggle_open(details), Ok(true));
        assert!(doc.is_open(details));
        assert_eq!(doc.toggle_open(details), Ok(false));
        assert_eq!(doc.toggle_open(div), Err(DomError::NotADetails(div)));
    }
}
