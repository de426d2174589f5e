use crate::tag::{CHAIN_TOKEN, TAG_TOKEN};

pub(crate) fn is_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-')
}

fn is_horizontal_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n'
}

/// Character cursor over the template source.
/// The parser decides what the characters mean, the lexer only
/// knows how to move forward and how to look ahead.
pub(crate) struct Lexer<'src> {
    pub(crate) src: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the next char if it's `c`
    pub(crate) fn eat(&mut self, c: char) -> bool {
        match self.peek() {
            Some(next) if next == c => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        match self.rest().starts_with(s) {
            true => {
                self.pos += s.len();
                true
            }
            false => false,
        }
    }

    pub(crate) fn take_name(&mut self) -> &'src str {
        let rest = self.rest();
        let len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let len = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
        self.pos += len;
    }

    /// Is the cursor at the start of a tag?
    /// That is either `#(` or `#name(`, where the name can be prefixed
    /// with the chain token.
    pub(crate) fn at_tag(&self) -> bool {
        let Some(rest) = self.rest().strip_prefix(TAG_TOKEN) else { return false };
        if rest.starts_with('(') {
            return true;
        }

        let rest = rest.strip_prefix(CHAIN_TOKEN).unwrap_or(rest);
        let len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        len > 0 && rest[len..].starts_with('(')
    }

    /// If the next non-whitespace char on the current line is `{`,
    /// consume everything up to and including the `{`.
    pub(crate) fn eat_body_start(&mut self) -> bool {
        let rest = self.rest();
        let len = rest.find(|c: char| !is_horizontal_whitespace(c)).unwrap_or(rest.len());
        match rest[len..].starts_with('{') {
            true => {
                self.pos += len + 1;
                true
            }
            false => false,
        }
    }
}
