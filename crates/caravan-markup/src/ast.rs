use crate::error::ParseError;

// ── Attribute ─────────────────────────────────────────────────────────────

/// `name="value"` on a start tag. Bare attributes (`defer`) have an empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

// ── Element ───────────────────────────────────────────────────────────────

/// An element with its attributes and children.
///
/// ```html
/// <canvas id="scene" width="800"></canvas>
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lower-cased tag name: `"div"`, `"script"`.
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>, attrs: Vec<Attribute>) -> Self {
        Self { name: name.into(), attrs, children: Vec::new() }
    }

    /// Look up an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// Child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
            Node::Comment(_) => {}
        }
    }
}

fn collect_named<'a>(nodes: &'a [Node], name: &str, out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(e) = node {
            if e.name.eq_ignore_ascii_case(name) {
                out.push(e);
            }
            collect_named(&e.children, name, out);
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// The top-level parse result for an HTML source string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Contents of `<!DOCTYPE ...>`, if present.
    pub doctype: Option<String>,
    /// Top-level nodes, normally a single `<html>` element.
    pub children: Vec<Node>,
    /// Malformed constructs the lexer recovered from, in source order.
    pub errors: Vec<ParseError>,
}

impl Document {
    /// Every element named `name`, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_named(&self.children, name, &mut out);
        out
    }

    /// The first element named `name`, in document order.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.find_all(name).into_iter().next()
    }

    /// Concatenated text of the whole document.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}
