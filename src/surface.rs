/// Rendering contract between the menu widget and its host page
///
/// The widget never touches document internals directly. Everything it needs
/// from the host goes through [`RenderSurface`]: looking up the container,
/// building the category dropdown, and creating the disclosure nodes that
/// show each dish.
use crate::dom::{ChangeEvent, Document, DomError, NodeId, SelectControl, SelectOption};

/// Attribute set on a container once a widget has bound to it
pub const BOUND_ATTRIBUTE: &str = "data-menu-widget";

/// Class of the body element inside a rendered details node
pub const DETAILS_BODY_CLASS: &str = "details-body";

/// Presentation of a dropdown
#[derive(Debug, Clone, Copy)]
pub struct DropdownSpec<'a> {
    pub element_id: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
}

/// Content injected into a freshly created element
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Text(&'a str),
    Node(NodeId),
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(text: &'a str) -> Self {
        Content::Text(text)
    }
}

impl From<NodeId> for Content<'_> {
    fn from(node: NodeId) -> Self {
        Content::Node(node)
    }
}

pub trait RenderSurface {
    /// Resolve an attached element by its id
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    fn create_element(&mut self, tag: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Remove every child of `parent`
    fn clear_children(&mut self, parent: NodeId);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Add a labelled single-choice select to `container` and listen for changes
    ///
    /// Returns the select element.
    fn populate_dropdown(
        &mut self,
        container: NodeId,
        options: &[SelectOption],
        spec: &DropdownSpec<'_>,
    ) -> NodeId;

    /// Build a `details` node around a prebuilt `summary` and put it in `container`
    ///
    /// When `append` is false the container is emptied first.
    fn create_details(
        &mut self,
        id: &str,
        desc: &str,
        summary: NodeId,
        container: NodeId,
        append: bool,
    ) -> NodeId;

    /// Create an element holding the given content
    fn create_element_content(&mut self, tag: &str, content: Content<'_>) -> NodeId;

    /// Append each node of `content` to `container`, in order
    fn insert_content_into_container(&mut self, container: NodeId, content: &[NodeId]);

    /// Set a select's value, yielding the change event if a listener is registered
    fn set_select_value(&mut self, select: NodeId, value: &str) -> Result<Option<ChangeEvent>, DomError>;
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        (**self).element_by_id(id)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        (**self).create_element(tag)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        (**self).append_child(parent, child)
    }

    fn clear_children(&mut self, parent: NodeId) {
        (**self).clear_children(parent)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        (**self).add_class(node, class)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        (**self).attribute(node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        (**self).set_attribute(node, name, value)
    }

    fn populate_dropdown(
        &mut self,
        container: NodeId,
        options: &[SelectOption],
        spec: &DropdownSpec<'_>,
    ) -> NodeId {
        (**self).populate_dropdown(container, options, spec)
    }

    fn create_details(
        &mut self,
        id: &str,
        desc: &str,
        summary: NodeId,
        container: NodeId,
        append: bool,
    ) -> NodeId {
        (**self).create_details(id, desc, summary, container, append)
    }

    fn create_element_content(&mut self, tag: &str, content: Content<'_>) -> NodeId {
        (**self).create_element_content(tag, content)
    }

    fn insert_content_into_container(&mut self, container: NodeId, content: &[NodeId]) {
        (**self).insert_content_into_container(container, content)
    }

    fn set_select_value(&mut self, select: NodeId, value: &str) -> Result<Option<ChangeEvent>, DomError> {
        (**self).set_select_value(select, value)
    }
}

impl RenderSurface for Document {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        Document::create_element(self, tag)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        Document::append_child(self, parent, child)
    }

    fn clear_children(&mut self, parent: NodeId) {
        self.remove_children(parent)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        Document::add_class(self, node, class)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        Document::attribute(self, node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        Document::set_attribute(self, node, name, value)
    }

    fn populate_dropdown(
        &mut self,
        container: NodeId,
        options: &[SelectOption],
        spec: &DropdownSpec<'_>,
    ) -> NodeId {
        let label = self.create_element_content("label", Content::Text(spec.label));
        Document::set_attribute(self, label, "for", spec.element_id);

        let select = Document::create_element(self, "select");
        Document::set_attribute(self, select, "id", spec.element_id);
        self.set_select(
            select,
            SelectControl {
                placeholder: Some(spec.placeholder.to_string()),
                options: options.to_vec(),
                value: String::new(),
                listening: true,
            },
        );

        Document::append_child(self, container, label);
        Document::append_child(self, container, select);
        select
    }

    fn create_details(
        &mut self,
        id: &str,
        desc: &str,
        summary: NodeId,
        container: NodeId,
        append: bool,
    ) -> NodeId {
        let details = Document::create_element(self, "details");
        Document::set_attribute(self, details, "id", id);
        Document::append_child(self, details, summary);

        let body = self.create_element_content("div", Content::Text(desc));
        Document::add_class(self, body, DETAILS_BODY_CLASS);
        Document::append_child(self, details, body);

        if !append {
            self.remove_children(container);
        }
        Document::append_child(self, container, details);
        details
    }

    fn create_element_content(&mut self, tag: &str, content: Content<'_>) -> NodeId {
        let el = Document::create_element(self, tag);
        let child = match content {
            Content::Text(text) => self.create_text(text),
            Content::Node(node) => node,
        };
        Document::append_child(self, el, child);
        el
    }

    fn insert_content_into_container(&mut self, container: NodeId, content: &[NodeId]) {
        for &node in content {
            Document::append_child(self, container, node);
        }
    }

    fn set_select_value(&mut self, select: NodeId, value: &str) -> Result<Option<ChangeEvent>, DomError> {
        Document::set_select_value(self, select, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: DropdownSpec<'static> = DropdownSpec {
        element_id: "select-dish-type",
        label: "Select dish type:",
        placeholder: "Select one",
    };

    #[test]
    fn test_populate_dropdown_appends_label_and_select() {
        let mut doc = Document::with_container("c");
        let container = doc.get_element_by_id("c").unwrap();
        let options = vec![SelectOption::new("app", "Appetizers")];

        let select = doc.populate_dropdown(container, &options, &SPEC);

        let children = doc.children(container).to_vec();
        assert_eq!(children.len(), 2);
        assert_eq!(doc.tag(children[0]), Some("label"));
        assert_eq!(doc.text_content(children[0]), "Select dish type:");
        assert_eq!(doc.attribute(children[0], "for"), Some("select-dish-type"));
        assert_eq!(children[1], select);
        assert_eq!(doc.get_element_by_id("select-dish-type"), Some(select));

        let control = doc.select(select).unwrap();
        assert_eq!(control.options, options);
        assert_eq!(control.placeholder.as_deref(), Some("Select one"));
        assert_eq!(control.value, "");
        assert!(control.listening);
    }

    #[test]
    fn test_create_details_structure() {
        let mut doc = Document::new();
        let container = doc.create_element("div");
        let summary = doc.create_element_content("summary", Content::Text("Spring Roll"));

        let details = doc.create_details("spring_roll", "Crispy roll", summary, container, true);

        assert_eq!(doc.children(container), &[details]);
        assert_eq!(doc.element_id(details), Some("spring_roll"));
        let parts = doc.children(details).to_vec();
        assert_eq!(parts[0], summary);
        assert!(doc.has_class(parts[1], DETAILS_BODY_CLASS));
        assert_eq!(doc.text_content(parts[1]), "Crispy roll");
        assert!(!doc.is_open(details));
    }

    #[test]
    fn test_create_details_replace_clears_container() {
        let mut doc = Document::new();
        let container = doc.create_element("div");
        let s1 = doc.create_element("summary");
        let s2 = doc.create_element("summary");
        doc.create_details("a", "first", s1, container, true);

        let second = doc.create_details("b", "second", s2, container, false);

        assert_eq!(doc.children(container), &[second]);
    }

    #[test]
    fn test_create_element_content_with_node() {
        let mut doc = Document::new();
        let inner = doc.create_element("em");
        let outer = doc.create_element_content("span", Content::from(inner));
        assert_eq!(doc.children(outer), &[inner]);
    }

    #[test]
    fn test_borrowed_surface_forwards() {
        let mut doc = Document::with_container("c");
        {
            let mut surface: &mut Document = &mut doc;
            let container = surface.element_by_id("c").unwrap();
            let el = RenderSurface::create_element(&mut surface, "p");
            RenderSurface::append_child(&mut surface, container, el);
        }
        let container = doc.get_element_by_id("c").unwrap();
        assert_eq!(doc.children(container).len(), 1);
    }
}
