//! Lexer, parser, and tree for HTML pages.
//!
//! This crate is dependency-free so page tooling can inspect markup without
//! pulling in the renderer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Element`, `Node`, `Attribute` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Lexed`, `Token`, `decode_entities` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use caravan_markup::parse_str;
//!
//! let src = r#"
//!     <!DOCTYPE html>
//!     <html><body>
//!         <canvas id="scene"></canvas>
//!         <script>if (a < b && ready) draw();</script>
//!     </body></html>
//! "#;
//!
//! let doc = parse_str(src);
//! assert!(doc.errors.is_empty());
//! assert_eq!(doc.doctype.as_deref(), Some("html"));
//! assert_eq!(doc.find("canvas").and_then(|c| c.attr("id")), Some("scene"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Attribute, Document, Element, Node};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Document {
        let doc = parse_str(src);
        assert!(doc.errors.is_empty(), "unexpected recovery in {src:?}: {:?}", doc.errors);
        doc
    }
    fn recovered(src: &str) -> Document {
        let doc = parse_str(src);
        assert!(!doc.errors.is_empty(), "expected a recovery in {src:?}");
        doc
    }

    #[test] fn empty_input() { assert_eq!(ok(""), Document::default()); }
    #[test] fn plain_text() { assert_eq!(ok("hello").text_content(), "hello"); }
    #[test] fn nested_elements() {
        let doc = ok("<div><p>a</p><p>b</p></div>");
        let div = doc.find("div").unwrap();
        assert_eq!(div.child_elements().count(), 2);
        assert_eq!(div.text_content(), "ab");
    }
    #[test] fn void_elements_take_no_children() {
        let doc = ok(r#"<head><meta charset="utf-8"><title>x</title></head>"#);
        let head = doc.find("head").unwrap();
        let names: Vec<_> = head.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["meta", "title"]);
    }
    #[test] fn self_closing_syntax() {
        assert_eq!(ok("<div/><span>x</span>").children.len(), 2);
    }
    #[test] fn stray_end_tag_ignored() {
        let doc = ok("<div>a</span>b</div>");
        assert_eq!(doc.find("div").unwrap().text_content(), "ab");
    }
    #[test] fn end_tag_closes_unclosed_children() {
        let doc = ok("<ul><li>one<li>two</ul><p>after</p>");
        let ul = doc.find("ul").unwrap();
        assert_eq!(ul.text_content(), "onetwo");
        assert_eq!(doc.children.len(), 2);
    }
    #[test] fn unclosed_at_eof() {
        let doc = ok("<html><body><p>open");
        assert_eq!(doc.find_all("p").len(), 1);
        assert_eq!(doc.text_content(), "open");
    }
    #[test] fn mixed_case_tags_match() {
        let doc = ok("<DIV Class=box>x</div>");
        assert_eq!(doc.find("div").unwrap().attr("class"), Some("box"));
    }
    #[test] fn entity_in_text_and_attr() {
        let doc = ok(r#"<a title="Tom &amp; Jerry">&lt;go&gt;</a>"#);
        let a = doc.find("a").unwrap();
        assert_eq!(a.attr("title"), Some("Tom & Jerry"));
        assert_eq!(a.text_content(), "<go>");
    }
    #[test] fn style_is_raw_text() {
        let doc = ok("<style>body > canvas { display: block; }</style>");
        assert_eq!(doc.find("style").unwrap().text_content(), "body > canvas { display: block; }");
    }
    #[test] fn comments_are_kept_but_not_text() {
        let doc = ok("<p><!-- note -->x</p>");
        let p = doc.find("p").unwrap();
        assert_eq!(p.children[0], Node::Comment(" note ".into()));
        assert_eq!(p.text_content(), "x");
    }
    #[test] fn find_all_in_document_order() {
        let doc = ok("<div id=a><div id=b></div></div><div id=c></div>");
        let ids: Vec<_> = doc.find_all("div").iter().filter_map(|d| d.attr("id")).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
    #[test] fn unterminated_comment_swallows_the_rest() {
        let doc = recovered("<p><!-- oops</p>");
        let p = doc.find("p").unwrap();
        assert_eq!(p.children, [Node::Comment(" oops</p>".into())]);
    }
    #[test] fn unterminated_comment_after_content() {
        let doc = recovered("<p>truck</p><!-- todo");
        assert_eq!(doc.find("p").unwrap().text_content(), "truck");
        assert_eq!(doc.children.last(), Some(&Node::Comment(" todo".into())));
    }
    #[test] fn unterminated_tag_becomes_text() {
        let doc = recovered("<div class=x");
        assert_eq!(doc.children, [Node::Text("<div class=x".into())]);
    }
    #[test] fn unterminated_quote_becomes_text() {
        let doc = recovered("<div>\n  <a href=\"nowhere>link</a>");
        assert_eq!(doc.errors[0].line, 2);
        assert!(doc.find("a").is_none());
        assert_eq!(doc.find("div").unwrap().text_content(), "\n  <a href=\"nowhere>link</a>");
    }
    #[test] fn unterminated_quote_inside_paragraph() {
        let doc = recovered("<p>truck <a href=\"x>go</a></p>");
        assert_eq!(doc.find("p").unwrap().text_content(), "truck <a href=\"x>go</a></p>");
    }
}
