use std::mem::take;

use crate::error::{ParseError, ParseErrorKind, Result};
use crate::leaf::{Component, Leaf};
use crate::lexer::{Lexer, is_name_char};
use crate::tag::{CHAIN_TOKEN, INTERPOLATION, Parameter, TAG_TOKEN, TagTemplate};

/// Parse a template into a [`Leaf`].
/// ```
/// # use leaflet_templates::parse;
/// let leaf = parse("Hello, #(name)!").unwrap();
/// assert_eq!(leaf.len(), 3);
/// ```
pub fn parse(src: &str) -> Result<Leaf> {
    Parser::new(src).parse()
}

// What ends the sequence of components currently being parsed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Terminator {
    Eof,
    // `}` closing a tag body
    Body,
    // `"` closing a constant parameter
    Quote,
}

struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    fn new(src: &'src str) -> Self {
        Self { lexer: Lexer::new(src) }
    }

    fn error(&self, start: usize, kind: ParseErrorKind) -> ParseError {
        ParseError::new(start, self.lexer.src, kind)
    }

    fn parse(mut self) -> Result<Leaf> {
        let components = self.parse_components(Terminator::Eof, 0)?;
        Ok(components.into())
    }

    // -----------------------------------------------------------------------------
    //     - Components -
    // -----------------------------------------------------------------------------
    fn parse_components(&mut self, terminator: Terminator, start: usize) -> Result<Vec<Component>> {
        let mut components = vec![];
        let mut text = String::new();
        // Balanced curly braces inside a body are plain text
        let mut depth = 0usize;

        loop {
            let Some(c) = self.lexer.peek() else {
                match terminator {
                    Terminator::Eof => break,
                    Terminator::Body => return Err(self.error(start, ParseErrorKind::UnterminatedBody)),
                    Terminator::Quote => return Err(self.error(start, ParseErrorKind::UnterminatedString)),
                }
            };

            match c {
                '"' if terminator == Terminator::Quote => {
                    self.lexer.next();
                    break;
                }
                '\\' => {
                    self.lexer.next();
                    match self.lexer.peek() {
                        Some(escaped @ TAG_TOKEN) => {
                            self.lexer.next();
                            text.push(escaped);
                        }
                        Some(escaped @ ('"' | '\\')) if terminator == Terminator::Quote => {
                            self.lexer.next();
                            text.push(escaped);
                        }
                        _ => text.push('\\'),
                    }
                }
                '{' if terminator == Terminator::Body => {
                    self.lexer.next();
                    depth += 1;
                    text.push(c);
                }
                '}' if terminator == Terminator::Body => {
                    self.lexer.next();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    text.push(c);
                }
                TAG_TOKEN if self.lexer.at_tag() => {
                    if !text.is_empty() {
                        components.push(Component::Raw(take(&mut text)));
                    }
                    let tag_start = self.lexer.pos();
                    let tag = self.parse_tag()?;
                    self.push_tag(&mut components, tag, tag_start)?;
                }
                _ => {
                    self.lexer.next();
                    text.push(c);
                }
            }
        }

        if !text.is_empty() {
            components.push(Component::Raw(text));
        }

        Ok(components)
    }

    // A chain tag has to follow a tag, any blank text between the two is dropped.
    fn push_tag(&self, components: &mut Vec<Component>, tag: TagTemplate, start: usize) -> Result<()> {
        if tag.is_chain() {
            if components.last().is_some_and(Component::is_blank) {
                components.pop();
            }

            if !matches!(components.last(), Some(Component::Tag(_))) {
                let kind = ParseErrorKind::OrphanChain(tag.name().to_string());
                return Err(ParseError::new(start, self.lexer.src, kind));
            }
        }

        components.push(Component::Tag(tag));
        Ok(())
    }

    // -----------------------------------------------------------------------------
    //     - Tags -
    // -----------------------------------------------------------------------------
    fn parse_tag(&mut self) -> Result<TagTemplate> {
        let start = self.lexer.pos();
        self.lexer.eat(TAG_TOKEN);

        let name = match self.lexer.peek() {
            Some('(') => INTERPOLATION.to_string(),
            _ => {
                let chain = self.lexer.eat_str(CHAIN_TOKEN);
                let name = self.lexer.take_name();
                if name.is_empty() {
                    return Err(self.error(start, ParseErrorKind::MissingTagName));
                }
                match chain {
                    true => format!("{CHAIN_TOKEN}{name}"),
                    false => name.to_string(),
                }
            }
        };

        let parameters = self.parse_parameters(start)?;

        let body = match self.lexer.eat_body_start() {
            true => {
                let body_start = self.lexer.pos();
                let mut components = self.parse_components(Terminator::Body, body_start)?;
                trim_body(&mut components);
                Some(components.into())
            }
            false => None,
        };

        Ok(TagTemplate::new(name, parameters, body))
    }

    fn parse_parameters(&mut self, start: usize) -> Result<Vec<Parameter>> {
        let mut parameters = vec![];

        if !self.lexer.eat('(') {
            return Err(self.error(start, ParseErrorKind::UnterminatedArguments));
        }

        self.lexer.skip_whitespace();
        if self.lexer.eat(')') {
            return Ok(parameters);
        }

        loop {
            self.lexer.skip_whitespace();
            parameters.push(self.parse_parameter(start)?);
            self.lexer.skip_whitespace();

            match self.lexer.next() {
                Some(',') => continue,
                Some(')') => break Ok(parameters),
                Some(_) => break Err(self.error(start, ParseErrorKind::InvalidArgument)),
                None => break Err(self.error(start, ParseErrorKind::UnterminatedArguments)),
            }
        }
    }

    fn parse_parameter(&mut self, start: usize) -> Result<Parameter> {
        match self.lexer.peek() {
            Some('"') => {
                let string_start = self.lexer.pos();
                self.lexer.next();
                let components = self.parse_components(Terminator::Quote, string_start)?;
                Ok(Parameter::Constant(components.into()))
            }
            Some(c) if is_name_char(c) => self.parse_path(),
            Some(_) => Err(self.error(start, ParseErrorKind::InvalidArgument)),
            None => Err(self.error(start, ParseErrorKind::UnterminatedArguments)),
        }
    }

    fn parse_path(&mut self) -> Result<Parameter> {
        let start = self.lexer.pos();
        let mut path = vec![self.lexer.take_name().to_string()];

        while self.lexer.eat('.') {
            let segment = self.lexer.take_name();
            if segment.is_empty() {
                return Err(self.error(start, ParseErrorKind::InvalidPath));
            }
            path.push(segment.to_string());
        }

        Ok(Parameter::Variable(path))
    }
}

// Drop the whitespace at both ends of a body.
// Whitespace between components is kept.
fn trim_body(components: &mut Vec<Component>) {
    if let Some(Component::Raw(text)) = components.first_mut() {
        *text = text.trim_start().to_string();
    }

    if let Some(Component::Raw(text)) = components.last_mut() {
        let len = text.trim_end().len();
        text.truncate(len);
    }

    components.retain(|component| !matches!(component, Component::Raw(text) if text.is_empty()));
}
