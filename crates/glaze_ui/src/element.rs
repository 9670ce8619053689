//! Renderable element tree
//!
//! A minimal, host-agnostic element model: named containers carrying ordered
//! style and attribute maps. Hosts either walk the tree directly or
//! serialize it to markup with [`Node::to_html`]. The tree is plain data -
//! no layout, no event handling, no retained identity.

use std::fmt;

use glaze_core::StyleMap;
use glaze_svg::escape_attr;
use indexmap::IndexMap;

/// A named container element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `"div"`.
    pub tag: String,
    /// Style descriptor, emitted as the `style` attribute.
    pub style: StyleMap,
    /// Plain attributes in insertion order.
    pub attrs: IndexMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

/// Create a `div` element.
pub fn div() -> Element {
    Element::new("div")
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            style: StyleMap::new(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Replace the element's style descriptor.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Set a single style property.
    pub fn prop(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    /// Set an attribute, overwriting any existing value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Serialize this element and its subtree as markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.style.is_empty() {
            out.push_str(" style=\"");
            out.push_str(&escape_attr(&self.style.to_inline_css()));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// A node in the renderable tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A container element.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
    /// Pre-serialized markup, passed through verbatim.
    Raw(String),
}

impl Node {
    /// Serialize this node as markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// A sequence of sibling nodes produced by one render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    /// The nodes, in document order.
    pub nodes: Vec<Node>,
}

impl Fragment {
    /// Serialize every node in order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_markup() {
        let tree = div()
            .prop("border-radius", "24px")
            .child(div().prop("z-index", "4").child("hi"));

        assert_eq!(
            tree.to_html(),
            "<div style=\"border-radius: 24px\">\
             <div style=\"z-index: 4\">hi</div></div>"
        );
    }

    #[test]
    fn test_attrs_follow_style_in_insertion_order() {
        let el = div()
            .prop("padding", "4px")
            .attr("class", "glass")
            .attr("data-role", "panel");

        assert_eq!(
            el.to_html(),
            "<div style=\"padding: 4px\" class=\"glass\" data-role=\"panel\"></div>"
        );
    }

    #[test]
    fn test_text_and_attr_escaping() {
        let el = div().attr("title", "a\"b").child("1 < 2 & 3");

        assert_eq!(
            el.to_html(),
            "<div title=\"a&quot;b\">1 &lt; 2 &amp; 3</div>"
        );
    }

    #[test]
    fn test_raw_passes_through() {
        let fragment = Fragment {
            nodes: vec![Node::Raw("<svg></svg>".to_string()), div().into()],
        };

        assert_eq!(fragment.to_html(), "<svg></svg><div></div>");
    }
}
