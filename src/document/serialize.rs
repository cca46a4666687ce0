//! [`Document`] → pretty-printed markup.
//!
//! Output layout:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <svg role="img" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
//! 	<title>Example</title>
//! 	<path d="..."></path>
//! </svg>
//! ```
//!
//! Elements are indented with tabs, one per line. Text-only elements are
//! written inline and empty elements get an explicit end tag. A collapsed
//! sequence is written as consecutive siblings at the key's position.

use std::fmt::{self, Write};

use super::{Document, Element};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

impl Document {
    /// Serializes the document to SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{XML_DECLARATION}")?;
        write_element(f, self.root_name(), self.root(), 0)
    }
}

fn write_element<W: Write>(out: &mut W, name: &str, element: &Element, depth: usize) -> fmt::Result {
    let indent = "\t".repeat(depth);

    write!(out, "{indent}<{name}")?;
    for (key, value) in &element.attributes {
        write!(out, " {key}=\"{}\"", escape_attribute(value))?;
    }
    out.write_char('>')?;

    if element.children.is_empty() {
        if let Some(text) = &element.text {
            out.write_str(&escape_text(text))?;
        }
        return writeln!(out, "</{name}>");
    }

    out.write_char('\n')?;
    for (tag, child) in &element.children {
        for nested in child.elements() {
            write_element(out, tag, nested, depth + 1)?;
        }
    }
    if let Some(text) = &element.text {
        writeln!(out, "{indent}\t{}", escape_text(text))?;
    }
    writeln!(out, "{indent}</{name}>")
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

// Whitespace characters are written as references so that attribute-value
// normalization on the next parse leaves them intact.
fn escape_attribute(raw: &str) -> String {
    escape_text(raw)
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}
