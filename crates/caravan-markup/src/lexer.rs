use crate::ast::Attribute;
use crate::error::ParseError;

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `<!DOCTYPE html>` → `"html"`
    Doctype(String),
    StartTag {
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
    },
    EndTag(String),
    Text(String),
    Comment(String),
    // Sentinel
    Eof,
}

/// A token together with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Tokenizer for HTML source. It never fails: damaged markup is recovered
/// and reported in [`Lexed::errors`].
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
    /// Set after `<script>` / `<style>`: the end tag that closes raw text.
    raw_text_until: Option<String>,
    errors: Vec<ParseError>,
}

/// Output of [`Lexer::tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// Always ends with [`Token::Eof`].
    pub tokens: Vec<TokenWithPos>,
    /// Constructs that had to be repaired, in source order.
    pub errors: Vec<ParseError>,
}

/// Saved lexer position, for backing out of a construct that never closes.
#[derive(Debug, Copy, Clone)]
struct Mark {
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1, raw_text_until: None, errors: Vec::new() }
    }

    pub fn tokenize(mut self) -> Lexed {
        let mut tokens = Vec::new();
        loop {
            let (line, col) = (self.line, self.col);
            let token = self.next_token();
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Lexed { tokens, errors: self.errors }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Consumes `n` bytes worth of characters.
    fn advance_bytes(&mut self, n: usize) {
        let end = self.pos + n;
        while self.pos < end && self.advance().is_some() {}
    }

    /// Consumes everything left and returns it.
    fn take_rest(&mut self) -> &'s str {
        let rest = self.rest();
        self.advance_bytes(rest.len());
        rest
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn mark(&self) -> Mark {
        Mark { pos: self.pos, line: self.line, col: self.col }
    }

    fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.col = mark.col;
    }

    fn recover(&mut self, msg: impl Into<String>, at: Mark) {
        self.errors.push(ParseError::new(msg, at.line, at.col));
    }

    fn next_token(&mut self) -> Token {
        if let Some(name) = self.raw_text_until.take() {
            if let Some(text) = self.lex_raw_text(&name) {
                return Token::Text(text);
            }
        }

        let rest = self.rest();
        if rest.is_empty() {
            return Token::Eof;
        }

        let next = self.peek_nth(1);
        if rest.starts_with("<!--") {
            self.lex_comment()
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            self.lex_declaration()
        } else if rest.starts_with("</") && matches!(self.peek_nth(2), Some(c) if c.is_ascii_alphabetic()) {
            self.lex_end_tag()
        } else if rest.starts_with('<') && matches!(next, Some(c) if c.is_ascii_alphabetic()) {
            let start = self.mark();
            match self.lex_start_tag() {
                Some(token) => token,
                // The tag never closes: the rest of the input is text.
                None => {
                    self.reset(start);
                    Token::Text(decode_entities(self.take_rest()))
                }
            }
        } else {
            Token::Text(self.lex_text())
        }
    }

    /// Text up to the next markup-starting `<`. A lone `<` is kept as text.
    fn lex_text(&mut self) -> String {
        let start = self.pos;
        // Always consume at least one character so a stray `<` makes progress.
        self.advance();
        while let Some(c) = self.peek() {
            if c == '<' && matches!(self.peek_nth(1), Some(n) if n.is_ascii_alphabetic() || matches!(n, '/' | '!' | '?')) {
                break;
            }
            self.advance();
        }
        decode_entities(&self.src[start..self.pos])
    }

    /// Raw text until `</name` (ASCII case-insensitive) or end of input.
    /// Returns `None` when the element is empty.
    fn lex_raw_text(&mut self, name: &str) -> Option<String> {
        let needle = format!("</{name}");
        let rest = self.rest();
        let end = find_ascii_ci(rest, &needle).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        let text = rest[..end].to_string();
        self.advance_bytes(end);
        Some(text)
    }

    /// `<!-- ... -->`. An unclosed comment runs to end of input.
    fn lex_comment(&mut self) -> Token {
        let start = self.mark();
        self.advance_bytes(4); // consume `<!--`
        let Some(end) = self.rest().find("-->") else {
            self.recover("unterminated comment", start);
            return Token::Comment(self.take_rest().to_string());
        };
        let body = self.rest()[..end].to_string();
        self.advance_bytes(end + 3);
        Token::Comment(body)
    }

    /// `<!DOCTYPE ...>`, `<![CDATA[...]]>`, `<?xml ...?>`: anything up to `>`,
    /// or to end of input when there is none.
    fn lex_declaration(&mut self) -> Token {
        let start = self.mark();
        self.advance_bytes(2); // consume `<!` or `<?`
        let body = match self.rest().find('>') {
            Some(end) => {
                let body = self.rest()[..end].trim().to_string();
                self.advance_bytes(end + 1);
                body
            }
            None => {
                self.recover("unterminated declaration", start);
                self.take_rest().trim().to_string()
            }
        };

        let doctype = body
            .get(..7)
            .filter(|kw| kw.eq_ignore_ascii_case("doctype"))
            .map(|_| body[7..].trim().to_string());
        match doctype {
            Some(d) => Token::Doctype(d),
            None => Token::Comment(body),
        }
    }

    fn lex_tag_name(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '_' | '.')) {
            self.advance();
        }
        self.src[start..self.pos].to_ascii_lowercase()
    }

    /// `</name ...>`. An end tag cut off by end of input still closes `name`.
    fn lex_end_tag(&mut self) -> Token {
        let start = self.mark();
        self.advance_bytes(2); // consume `</`
        let name = self.lex_tag_name();
        // Anything between the name and `>` is ignored.
        match self.rest().find('>') {
            Some(end) => self.advance_bytes(end + 1),
            None => {
                self.recover(format!("unterminated end tag </{name}"), start);
                self.take_rest();
            }
        }
        Token::EndTag(name)
    }

    /// `None` when input ends inside the tag; the caller backs out.
    fn lex_start_tag(&mut self) -> Option<Token> {
        let start = self.mark();
        self.advance(); // consume `<`
        let name = self.lex_tag_name();
        let mut attrs = Vec::new();

        let self_closing = loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    self.recover(format!("unterminated tag <{name}>"), start);
                    return None;
                }
                Some('>') => {
                    self.advance();
                    break false;
                }
                Some('/') => {
                    self.advance();
                    if self.peek() == Some('>') {
                        self.advance();
                        break true;
                    }
                }
                Some(_) => match self.lex_attribute() {
                    Some(attr) => attrs.push(attr),
                    None => {
                        self.recover(format!("unterminated attribute value on <{name}>"), start);
                        return None;
                    }
                },
            }
        };

        if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.raw_text_until = Some(name.clone());
        }

        Some(Token::StartTag { name, attrs, self_closing })
    }

    /// `None` for a quoted value with no closing quote.
    fn lex_attribute(&mut self) -> Option<Attribute> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if !c.is_whitespace() && !matches!(c, '=' | '>' | '/')) {
            self.advance();
        }
        let name = self.src[start..self.pos].to_ascii_lowercase();
        if name.is_empty() {
            // A stray `=`; drop it and carry on.
            self.advance();
            return Some(Attribute { name, value: String::new() });
        }

        self.skip_whitespace();
        if self.peek() != Some('=') {
            return Some(Attribute { name, value: String::new() });
        }
        self.advance(); // consume `=`
        self.skip_whitespace();

        let value = match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.advance();
                let end = self.rest().find(q)?;
                let value = decode_entities(&self.rest()[..end]);
                self.advance_bytes(end + 1);
                value
            }
            _ => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if !c.is_whitespace() && c != '>') {
                    self.advance();
                }
                decode_entities(&self.src[start..self.pos])
            }
        };

        Some(Attribute { name, value })
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

/// Byte offset of the first ASCII case-insensitive match of `needle`.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "hellip" => '\u{2026}',
        "middot" => '\u{b7}',
        "larr" => '\u{2190}',
        "rarr" => '\u{2192}',
        "deg" => '\u{b0}',
        _ => return None,
    })
}

/// Decodes character references. Unknown or malformed references are kept verbatim.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest[1..]
            .find(';')
            .filter(|&semi| semi > 0 && semi <= 10)
            .and_then(|semi| {
                let body = &rest[1..1 + semi];
                let ch = match body.strip_prefix('#') {
                    Some(num) => match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse::<u32>().ok(),
                    }
                    .and_then(char::from_u32),
                    None => named_entity(body),
                };
                ch.map(|c| (c, semi + 2))
            });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().tokens.into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn start_tag_with_mixed_attributes() {
        let toks = tokens(r#"<CANVAS id="scene" width=800 hidden data-x='a&amp;b'>"#);
        let Token::StartTag { name, attrs, self_closing } = &toks[0] else {
            panic!("expected start tag, got {:?}", toks[0]);
        };
        assert_eq!(name, "canvas");
        assert!(!self_closing);
        let pairs: Vec<_> = attrs.iter().map(|a| (a.name.as_str(), a.value.as_str())).collect();
        assert_eq!(pairs, [("id", "scene"), ("width", "800"), ("hidden", ""), ("data-x", "a&b")]);
    }

    #[test]
    fn self_closing_and_end_tags() {
        assert_eq!(tokens("<br/></p >"), vec![
            Token::StartTag { name: "br".into(), attrs: vec![], self_closing: true },
            Token::EndTag("p".into()),
            Token::Eof,
        ]);
    }

    #[test]
    fn script_body_is_raw_text() {
        let toks = tokens("<script>if (a < b && c > d) { x = '</div>'; }</SCRIPT>");
        assert_eq!(toks[1], Token::Text("if (a < b && c > d) { x = '</div>'; }".into()));
        assert_eq!(toks[2], Token::EndTag("script".into()));
    }

    #[test]
    fn empty_script_produces_no_text() {
        let toks = tokens("<script src=x.js></script>");
        assert_eq!(toks.len(), 3);
        assert!(!toks.iter().any(|t| matches!(t, Token::Text(_))));
    }

    #[test]
    fn doctype_and_comment() {
        assert_eq!(tokens("<!DOCTYPE html><!-- hi -->"), vec![
            Token::Doctype("html".into()),
            Token::Comment(" hi ".into()),
            Token::Eof,
        ]);
    }

    #[test]
    fn stray_angle_bracket_is_text() {
        assert_eq!(tokens("a < b"), vec![Token::Text("a < b".into()), Token::Eof]);
    }

    #[test]
    fn positions_are_one_based() {
        let toks = Lexer::new("x\n  <b>").tokenize().tokens;
        assert_eq!((toks[1].line, toks[1].col), (2, 3));
    }

    #[test]
    fn entities_decode() {
        assert_eq!(decode_entities("&lt;3 &#65;&#x42; &bogus; & done"), "<3 AB &bogus; & done");
    }

    #[test]
    fn unclosed_comment_runs_to_end_of_input() {
        let lexed = Lexer::new("ok\n<!-- never closed").tokenize();
        let toks: Vec<_> = lexed.tokens.into_iter().map(|t| t.token).collect();
        assert_eq!(toks, vec![
            Token::Text("ok\n".into()),
            Token::Comment(" never closed".into()),
            Token::Eof,
        ]);
        assert_eq!(lexed.errors.len(), 1);
        assert_eq!((lexed.errors[0].line, lexed.errors[0].col), (2, 1));
    }

    #[test]
    fn unclosed_declaration_becomes_a_comment() {
        assert_eq!(tokens("<![CDATA[ x"), vec![Token::Comment("[CDATA[ x".into()), Token::Eof]);
        assert_eq!(tokens("<!DOCTYPE html"), vec![Token::Doctype("html".into()), Token::Eof]);
    }

    #[test]
    fn unclosed_start_tag_falls_back_to_text() {
        let lexed = Lexer::new("<b>x</b><div class=x").tokenize();
        assert_eq!(lexed.tokens[3].token, Token::Text("<div class=x".into()));
        assert_eq!((lexed.tokens[3].line, lexed.tokens[3].col), (1, 9));
        assert_eq!(lexed.errors.len(), 1);
        assert!(lexed.errors[0].message.contains("<div>"));
    }

    #[test]
    fn unclosed_quote_falls_back_to_text() {
        assert_eq!(tokens("<p>truck <a href=\"x>go</a></p>"), vec![
            Token::StartTag { name: "p".into(), attrs: vec![], self_closing: false },
            Token::Text("truck ".into()),
            Token::Text("<a href=\"x>go</a></p>".into()),
            Token::Eof,
        ]);
    }

    #[test]
    fn unclosed_end_tag_still_closes() {
        let lexed = Lexer::new("<p>x</p").tokenize();
        assert_eq!(lexed.tokens[2].token, Token::EndTag("p".into()));
        assert_eq!(lexed.errors.len(), 1);
    }

    #[test]
    fn well_formed_input_records_no_errors() {
        assert!(Lexer::new("<!DOCTYPE html><p a='1'>x<!-- c --></p>").tokenize().errors.is_empty());
    }
}
