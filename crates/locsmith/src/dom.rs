//! Element tree abstraction.
//!
//! The engine never parses markup. It reads trees through [`ElementNode`],
//! a small capability interface any parser adapter can implement. [`Document`]
//! is the in-crate implementation: an arena tree built from [`ElementSpec`]
//! values, used by tests, benches and callers that assemble trees in code.
//!
//! # Example
//!
//! ```
//! use locsmith::dom::{Document, ElementNode, ElementSpec};
//!
//! let doc = Document::fragment(vec![
//!     ElementSpec::new("label").attr("for", "user").text("User"),
//!     ElementSpec::new("input").attr("id", "user").attr("type", "text"),
//! ]);
//! let root = doc.root_element().unwrap();
//! assert_eq!(root.tag_name(), "label");
//! assert_eq!(doc.container().children().len(), 2);
//! ```

/// Read-only view of one element in a parsed tree
///
/// Only `tag_name`, `attributes`, `text_content`, `parent`, `children` and
/// `same_node` are required; the rest derive from them.
pub trait ElementNode: Clone {
    /// Lower-cased tag name
    fn tag_name(&self) -> String;

    /// Attributes in source order
    fn attributes(&self) -> Vec<(String, String)>;

    /// Concatenated text of all descendant text nodes (DOM `textContent`)
    fn text_content(&self) -> String;

    /// Parent element, if any
    fn parent(&self) -> Option<Self>;

    /// Element children in order (text nodes excluded)
    fn children(&self) -> Vec<Self>;

    /// Identity comparison
    fn same_node(&self, other: &Self) -> bool;

    /// Value of one attribute
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether the attribute is present (even if empty)
    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().iter().any(|(key, _)| key == name)
    }

    /// Non-empty `id` attribute
    fn id(&self) -> Option<String> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    /// Class tokens in order
    fn classes(&self) -> Vec<String> {
        self.attribute("class")
            .map(|class| class.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// No element children
    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// All descendant elements in document order, excluding `self`
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }
}

/// Index of an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    content: Vec<Content>,
}

/// Declarative description of an element subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Vec<SpecContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SpecContent {
    Element(ElementSpec),
    Text(String),
}

impl ElementSpec {
    /// Create an element with the given tag (lower-cased)
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value in place
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Shorthand for the `id` attribute
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Shorthand for the `class` attribute
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a text node
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content.push(SpecContent::Text(text.into()));
        self
    }

    /// Append a child element
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.content.push(SpecContent::Element(child));
        self
    }

    /// Append several child elements
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.content
            .extend(children.into_iter().map(SpecContent::Element));
        self
    }
}

/// Arena-backed element tree
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<ElementData>,
    container: NodeId,
}

impl Document {
    /// Build a document whose container is a synthetic `body` holding `roots`
    #[must_use]
    pub fn fragment(roots: Vec<ElementSpec>) -> Self {
        Self::from_container(ElementSpec::new("body").children(roots))
    }

    /// Build a document from a container element
    #[must_use]
    pub fn from_container(container: ElementSpec) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            container: NodeId(0),
        };
        doc.container = doc.insert(container, None);
        doc
    }

    fn insert(&mut self, spec: ElementSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementData {
            tag: spec.tag,
            attributes: spec.attributes,
            parent,
            content: Vec::new(),
        });
        for item in spec.content {
            let content = match item {
                SpecContent::Text(text) => Content::Text(text),
                SpecContent::Element(child) => Content::Element(self.insert(child, Some(id))),
            };
            self.nodes[id.0].content.push(content);
        }
        id
    }

    /// The parse container (analysis scope for label lookup and deep scan)
    #[must_use]
    pub const fn container(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: self.container,
        }
    }

    /// First element child of the container
    #[must_use]
    pub fn root_element(&self) -> Option<NodeRef<'_>> {
        self.container().children().into_iter().next()
    }

    /// Handle for a node id
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Number of elements, container included
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a document has at least its container
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed handle to an element of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Arena id of this element
    #[must_use]
    pub const fn node_id(&self) -> NodeId {
        self.id
    }

    fn data(&self) -> &'a ElementData {
        &self.doc.nodes[self.id.0]
    }

    fn collect_text(&self, out: &mut String) {
        for item in &self.data().content {
            match item {
                Content::Text(text) => out.push_str(text),
                Content::Element(child) => NodeRef {
                    doc: self.doc,
                    id: *child,
                }
                .collect_text(out),
            }
        }
    }
}

impl ElementNode for NodeRef<'_> {
    fn tag_name(&self) -> String {
        self.data().tag.clone()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.data().attributes.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.data()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| NodeRef { doc: self.doc, id })
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .content
            .iter()
            .filter_map(|item| match item {
                Content::Element(id) => Some(NodeRef {
                    doc: self.doc,
                    id: *id,
                }),
                Content::Text(_) => None,
            })
            .collect()
    }

    fn same_node(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn login_form() -> Document {
        Document::fragment(vec![ElementSpec::new("form")
            .class("login  form")
            .text("\n  ")
            .child(ElementSpec::new("label").attr("for", "u").text("User"))
            .child(ElementSpec::new("input").id("u").attr("type", "text"))
            .child(
                ElementSpec::new("BUTTON")
                    .text("Log ")
                    .child(ElementSpec::new("b").text("in")),
            )])
    }

    mod spec_tests {
        use super::*;

        #[test]
        fn test_attr_replaces_in_place() {
            let spec = ElementSpec::new("a")
                .attr("href", "/x")
                .attr("title", "t")
                .attr("href", "/y");
            let doc = Document::fragment(vec![spec]);
            let a = doc.root_element().unwrap();
            assert_eq!(
                a.attributes(),
                vec![
                    ("href".to_string(), "/y".to_string()),
                    ("title".to_string(), "t".to_string())
                ]
            );
        }

        #[test]
        fn test_tag_is_lower_cased() {
            let doc = login_form();
            let button = doc.root_element().unwrap().children()[2];
            assert_eq!(button.tag_name(), "button");
        }
    }

    mod node_tests {
        use super::*;

        #[test]
        fn test_text_content_includes_descendants() {
            let doc = login_form();
            let form = doc.root_element().unwrap();
            assert_eq!(form.text_content(), "\n  UserLog in");
        }

        #[test]
        fn test_classes_split_on_whitespace() {
            let doc = login_form();
            assert_eq!(doc.root_element().unwrap().classes(), vec!["login", "form"]);
        }

        #[test]
        fn test_empty_id_is_absent() {
            let doc = Document::fragment(vec![ElementSpec::new("div").id("")]);
            assert_eq!(doc.root_element().unwrap().id(), None);
        }

        #[test]
        fn test_parent_and_leaf() {
            let doc = login_form();
            let form = doc.root_element().unwrap();
            let input = form.children()[1];
            assert!(input.is_leaf());
            assert!(!form.is_leaf());
            assert!(input.parent().unwrap().same_node(&form));
            assert!(form.parent().unwrap().same_node(&doc.container()));
            assert!(doc.container().parent().is_none());
        }

        #[test]
        fn test_descendants_in_document_order() {
            let doc = login_form();
            let tags: Vec<String> = doc
                .container()
                .descendants()
                .iter()
                .map(ElementNode::tag_name)
                .collect();
            assert_eq!(tags, vec!["form", "label", "input", "button", "b"]);
        }

        #[test]
        fn test_get_out_of_range() {
            let doc = login_form();
            assert!(doc.get(NodeId(99)).is_none());
            assert_eq!(doc.len(), 6);
        }
    }
}
