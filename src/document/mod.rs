//! Ordered-tree model of an SVG document.
//!
//! A [`Document`] is the root element's name plus an [`Element`]. Each element
//! keeps its attributes and its children in insertion-ordered maps, because
//! the order of both is what serialization and rendering reproduce. Children
//! that repeat under the same tag are collapsed into a single key when the
//! document is parsed:
//!
//! ```text
//! <svg>                      svg
//!   <title>X</title>   ──►     title: One(<title>)
//!   <path d="a"/>              path:  Many([<path d=a>, <path d=b>])
//!   <path d="b"/>
//! </svg>
//! ```
//!
//! The collapsed key keeps the position of its first occurrence.
//!
//! # Example
//!
//! ```
//! use aegis_icons::Document;
//!
//! let doc = Document::parse(r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#).unwrap();
//! assert_eq!(doc.root_name(), "svg");
//! assert!(doc.root().child("path").is_some());
//!
//! let text = doc.to_svg_string();
//! assert_eq!(Document::parse(&text).unwrap(), doc);
//! ```

mod parse;
mod render;
mod serialize;

use indexmap::IndexMap;

// ============================================================================
// Element
// ============================================================================

/// A single element: ordered attributes, ordered children and text content.
///
/// Namespace declarations are stored as ordinary `xmlns` / `xmlns:prefix`
/// attributes, at the position they had in the start tag.
#[derive(Debug, Clone, Default, Eq)]
pub struct Element {
    /// Attribute name → value, in document order.
    pub attributes: IndexMap<String, String>,

    /// Child tag → one or more child elements, in order of first occurrence.
    pub children: IndexMap<String, Child>,

    /// Trimmed character data, if the element has any.
    pub text: Option<String>,
}

// IndexMap equality ignores order; for documents the order is the content.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.attributes.iter().eq(other.attributes.iter())
            && self.children.iter().eq(other.children.iter())
    }
}

impl Element {
    /// Creates an empty element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style text setter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an attribute.
    ///
    /// An existing attribute keeps its position and only has its value
    /// replaced; a new attribute is appended.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns the child stored under `tag`.
    pub fn child(&self, tag: &str) -> Option<&Child> {
        self.children.get(tag)
    }

    /// Appends a child element under `tag`.
    ///
    /// If `tag` is already present, the existing entry becomes (or grows) a
    /// [`Child::Many`] at its original position.
    pub fn push_child(&mut self, tag: impl Into<String>, element: Element) {
        let tag = tag.into();
        match self.children.get_mut(&tag) {
            Some(existing) => existing.push(element),
            None => {
                self.children.insert(tag, Child::One(element));
            }
        }
    }

    /// Returns true if the element has no attributes, children or text.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty() && self.text.is_none()
    }
}

// ============================================================================
// Child
// ============================================================================

/// The value stored under a child tag.
///
/// Whether a tag holds one element or a sequence is decided at parse time and
/// is not changed by later transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    One(Element),
    Many(Vec<Element>),
}

impl Child {
    /// Returns the elements under this tag, in document order.
    pub fn elements(&self) -> &[Element] {
        match self {
            Self::One(element) => std::slice::from_ref(element),
            Self::Many(elements) => elements,
        }
    }

    /// Mutable access to the elements under this tag.
    pub fn elements_mut(&mut self) -> &mut [Element] {
        match self {
            Self::One(element) => std::slice::from_mut(element),
            Self::Many(elements) => elements,
        }
    }

    /// Appends an element, turning a single element into a sequence.
    pub fn push(&mut self, element: Element) {
        let elements = match std::mem::replace(self, Self::Many(Vec::new())) {
            Self::One(first) => vec![first, element],
            Self::Many(mut elements) => {
                elements.push(element);
                elements
            }
        };
        *self = Self::Many(elements);
    }

    /// Consumes the entry, returning its elements in order.
    pub fn into_elements(self) -> Vec<Element> {
        match self {
            Self::One(element) => vec![element],
            Self::Many(elements) => elements,
        }
    }

    /// Number of elements under this tag.
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Returns true if this is an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Returns true if this entry is a sequence.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }
}

// ============================================================================
// Document
// ============================================================================

/// A parsed SVG document rooted at its top-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root_name: String,
    root: Element,
}

impl Document {
    /// Creates a document from a root element and its tag name.
    pub fn new(root_name: impl Into<String>, root: Element) -> Self {
        Self {
            root_name: root_name.into(),
            root,
        }
    }

    /// Tag name of the root element (`svg` for every glyph).
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Splits the document into its root name and root element.
    pub fn into_parts(self) -> (String, Element) {
        (self.root_name, self.root)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_child_collapses_repeats_at_first_position() {
        let mut root = Element::new();
        root.push_child("path", Element::new().with_attribute("d", "a"));
        root.push_child("title", Element::new().with_text("X"));
        root.push_child("path", Element::new().with_attribute("d", "b"));

        let keys: Vec<_> = root.children.keys().map(String::as_str).collect();
        assert_eq!(keys, ["path", "title"]);

        let paths = root.child("path").unwrap();
        assert!(paths.is_many());
        assert_eq!(paths.len(), 2);
        assert_eq!(paths.elements()[0].attribute("d"), Some("a"));
        assert_eq!(paths.elements()[1].attribute("d"), Some("b"));
    }

    #[test]
    fn set_attribute_keeps_existing_position() {
        let mut el = Element::new()
            .with_attribute("fill", "red")
            .with_attribute("d", "M0 0");
        el.set_attribute("fill", "white");
        el.set_attribute("transform", "scale(2)");

        let attrs: Vec<_> = el
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            attrs,
            [("fill", "white"), ("d", "M0 0"), ("transform", "scale(2)")]
        );
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Element::new().with_attribute("x", "1").with_attribute("y", "2");
        let b = Element::new().with_attribute("y", "2").with_attribute("x", "1");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn child_push_grows_sequence() {
        let mut child = Child::One(Element::new().with_text("1"));
        child.push(Element::new().with_text("2"));
        child.push(Element::new().with_text("3"));

        let texts: Vec<_> = child
            .elements()
            .iter()
            .map(|e| e.text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, ["1", "2", "3"]);
        assert_eq!(child.into_elements().len(), 3);
    }

    #[test]
    fn empty_element() {
        assert!(Element::new().is_empty());
        assert!(!Element::new().with_text("x").is_empty());
    }
}
