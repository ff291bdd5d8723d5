use crate::ast::{Document, Element, Node};
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Elements that never have children or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

// ── Parser ────────────────────────────────────────────────────────────────

/// Builds a [`Document`] from a token stream.
///
/// Tree construction is lenient: an end tag closes the nearest open element
/// with the same name (implicitly closing anything opened inside it), end
/// tags with no open match are dropped, and elements still open at end of
/// input are closed there.
pub struct Parser {
    tokens: std::vec::IntoIter<TokenWithPos>,
    doc: Document,
    open: Vec<Element>,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens: tokens.into_iter(), doc: Document::default(), open: Vec::new() }
    }

    /// Appends `node` to the innermost open element, or to the document.
    fn append(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.doc.children.push(node),
        }
    }

    /// Pops the innermost open element into its parent.
    fn close_innermost(&mut self) {
        if let Some(el) = self.open.pop() {
            self.append(Node::Element(el));
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(mut self) -> Document {
        while let Some(TokenWithPos { token, .. }) = self.tokens.next() {
            match token {
                Token::Doctype(d) => {
                    // Only the first doctype counts.
                    if self.doc.doctype.is_none() {
                        self.doc.doctype = Some(d);
                    }
                }
                Token::StartTag { name, attrs, self_closing } => {
                    let el = Element::new(name, attrs);
                    if self_closing || is_void(&el.name) {
                        self.append(Node::Element(el));
                    } else {
                        self.open.push(el);
                    }
                }
                Token::EndTag(name) => self.end_tag(&name),
                Token::Text(t) => self.append(Node::Text(t)),
                Token::Comment(c) => self.append(Node::Comment(c)),
                Token::Eof => break,
            }
        }

        while !self.open.is_empty() {
            self.close_innermost();
        }
        self.doc
    }

    fn end_tag(&mut self, name: &str) {
        // Stray end tags are dropped.
        if let Some(idx) = self.open.iter().rposition(|el| el.name == name) {
            while self.open.len() > idx {
                self.close_innermost();
            }
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse an HTML source string into a [`Document`]. Never fails.
///
/// Lexical damage (an unterminated comment, tag or quoted attribute value)
/// is recovered and listed in [`Document::errors`]. Structural problems are
/// repaired silently.
pub fn parse_str(src: &str) -> Document {
    let lexed = Lexer::new(src).tokenize();
    let mut doc = Parser::new(lexed.tokens).parse_document();
    doc.errors = lexed.errors;
    doc
}
