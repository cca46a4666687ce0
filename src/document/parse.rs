//! Markup → [`Document`] using roxmltree.
//!
//! roxmltree resolves namespaces and entities but reports namespace
//! declarations apart from ordinary attributes. The start tag is re-read
//! with quick-xml to put both back in source order.

use quick_xml::Reader;
use quick_xml::events::Event;
use roxmltree::{Node, ParsingOptions};

use super::{Document, Element};
use crate::error::ParseError;

impl Document {
    /// Parses SVG markup into an ordered document.
    ///
    /// A DOCTYPE is accepted but not kept. Comments and processing
    /// instructions are dropped. Text nodes of an element are concatenated
    /// and trimmed; whitespace-only text is dropped.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let xml = roxmltree::Document::parse_with_options(text, options)?;
        let root = xml.root_element();
        Ok(Self::new(qualified_tag(root), read_element(root, text)))
    }
}

impl std::str::FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn read_element(node: Node<'_, '_>, source: &str) -> Element {
    let mut element = Element::new();

    let mut attributes: Vec<(String, String)> = node
        .attributes()
        .map(|attr| {
            let name = qualify(node, attr.namespace(), attr.name());
            (name, attr.value().to_owned())
        })
        .collect();
    attributes.extend(declared_namespaces(node));

    let order = source_attribute_order(node, source);
    attributes.sort_by_key(|(name, _)| {
        order
            .iter()
            .position(|raw| raw == name)
            .unwrap_or(usize::MAX)
    });
    for (name, value) in attributes {
        element.set_attribute(name, value);
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            element.push_child(qualified_tag(child), read_element(child, source));
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }

    let text = text.trim();
    if !text.is_empty() {
        element.text = Some(text.to_owned());
    }

    element
}

/// Attribute names of the element's start tag as written, namespace
/// declarations included. Empty if the tag cannot be located in `source`.
fn source_attribute_order(node: Node<'_, '_>, source: &str) -> Vec<String> {
    let Some(tag) = source.get(node.range().start..) else {
        return Vec::new();
    };

    let mut reader = Reader::from_str(tag);
    match reader.read_event() {
        Ok(Event::Start(start) | Event::Empty(start)) => start
            .attributes()
            .filter_map(Result::ok)
            .filter_map(|attr| std::str::from_utf8(attr.key.as_ref()).ok().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

fn qualified_tag(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    qualify(node, tag.namespace(), tag.name())
}

/// Restores the `prefix:` of a namespaced name. Names in the default
/// namespace stay unprefixed.
fn qualify(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_owned(),
    }
}

/// Namespace declarations introduced by this element (not inherited ones),
/// as `xmlns` / `xmlns:prefix` attribute pairs.
fn declared_namespaces(node: Node<'_, '_>) -> Vec<(String, String)> {
    let inherited: Vec<_> = node
        .parent_element()
        .map(|parent| parent.namespaces().collect())
        .unwrap_or_default();

    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| {
            !inherited
                .iter()
                .any(|p| p.name() == ns.name() && p.uri() == ns.uri())
        })
        .map(|ns| match ns.name() {
            Some(prefix) => (format!("xmlns:{prefix}"), ns.uri().to_owned()),
            None => ("xmlns".to_owned(), ns.uri().to_owned()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLYPH: &str = r#"<svg role="img" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><title>Example</title><path d="M0 0h24v24H0z"/></svg>"#;

    #[test]
    fn parses_attributes_in_order() {
        let doc = Document::parse(GLYPH).unwrap();
        assert_eq!(doc.root_name(), "svg");

        let keys: Vec<_> = doc.root().attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["role", "viewBox", "xmlns"]);
        assert_eq!(
            doc.root().attribute("xmlns"),
            Some("http://www.w3.org/2000/svg")
        );
    }

    #[test]
    fn namespace_declarations_keep_their_position() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#,
        )
        .unwrap();

        let keys: Vec<_> = doc.root().attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["xmlns", "role", "xmlns:xlink", "viewBox"]);

        let text = doc.to_svg_string();
        assert!(text.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" role="img""#));
        assert_eq!(Document::parse(&text).unwrap(), doc);
    }

    #[test]
    fn nested_start_tags_are_ordered_independently() {
        let doc = Document::parse(
            r#"<svg b="1" a="2"><g xmlns:x="urn:x" id="g" x:k="v"/></svg>"#,
        )
        .unwrap();
        let keys: Vec<_> = doc.root().attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);

        let g = &doc.root().child("g").unwrap().elements()[0];
        let keys: Vec<_> = g.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["xmlns:x", "id", "x:k"]);
    }

    #[test]
    fn parses_children_in_order() {
        let doc = Document::parse(GLYPH).unwrap();
        let keys: Vec<_> = doc.root().children.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "path"]);

        let title = &doc.root().child("title").unwrap().elements()[0];
        assert_eq!(title.text.as_deref(), Some("Example"));
    }

    #[test]
    fn repeated_tags_collapse() {
        let doc = Document::parse(r#"<svg><path d="a"/><g/><path d="b"/></svg>"#).unwrap();
        let keys: Vec<_> = doc.root().children.keys().map(String::as_str).collect();
        assert_eq!(keys, ["path", "g"]);
        assert_eq!(doc.root().child("path").unwrap().len(), 2);
    }

    #[test]
    fn whitespace_text_is_dropped() {
        let doc = Document::parse("<svg>\n  <path d=\"a\"/>\n</svg>").unwrap();
        assert_eq!(doc.root().text, None);
    }

    #[test]
    fn comments_are_dropped() {
        let doc = Document::parse("<svg><!-- note --><path/></svg>").unwrap();
        assert_eq!(doc.root().children.len(), 1);
    }

    #[test]
    fn prefixed_names_are_kept() {
        let doc = Document::parse(
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
        )
        .unwrap();
        let used = &doc.root().child("use").unwrap().elements()[0];
        assert_eq!(used.attribute("xlink:href"), Some("#a"));
        // Inherited declarations are not repeated on children.
        assert_eq!(used.attribute("xmlns:xlink"), None);
        assert_eq!(
            doc.root().attribute("xmlns:xlink"),
            Some("http://www.w3.org/1999/xlink")
        );
    }

    #[test]
    fn malformed_markup_fails() {
        assert!(matches!(
            Document::parse("<svg><path></svg>"),
            Err(ParseError::Xml(_))
        ));
        assert!(Document::parse("not markup").is_err());
        assert!("".parse::<Document>().is_err());
    }
}
