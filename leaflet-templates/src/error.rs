use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

// Line number and column starts at one, not zero,
// because actual humans might read this
pub(crate) fn src_line_no(end: usize, src: &str) -> (usize, usize) {
    let end = end.min(src.len());
    let mut line_no = 1;
    let mut pos = 0;

    while let Some(p) = src[pos..end].find('\n') {
        pos += p + 1;
        line_no += 1;
    }

    let col = 1 + src[pos..end].chars().count();

    (line_no, col)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub col: usize,
    pub src: String,
}

impl StdError for ParseError {}

impl ParseError {
    /// `offset` is the byte offset into `src` that the error is reported at
    pub(crate) fn new(offset: usize, src: &str, kind: ParseErrorKind) -> Self {
        let (line, col) = src_line_no(offset, src);
        Self {
            line,
            col,
            src: src.to_string(),
            kind,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let start_line = self.line;
        let lines = self.src.lines().enumerate().skip(start_line.saturating_sub(2)).take(3);

        writeln!(f, "error on line {start_line}, column {}: {}", self.col, self.kind)?;

        for (no, line) in lines {
            let no = no + 1;
            let mark = if self.line == no { "-> " } else { "   " };
            writeln!(f, "{mark}{no} {line}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnterminatedString,
    UnterminatedArguments,
    UnterminatedBody,
    InvalidPath,
    InvalidArgument,
    MissingTagName,
    /// A chain tag (`#@@name`) that does not follow another tag.
    OrphanChain(String),
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::UnterminatedArguments => write!(f, "unterminated arguments (missing `)`)"),
            Self::UnterminatedBody => write!(f, "unterminated body (missing `}}`)"),
            Self::InvalidPath => write!(f, "invalid path"),
            Self::InvalidArgument => write!(f, "invalid argument (expected a path or a string)"),
            Self::MissingTagName => write!(f, "missing tag name"),
            Self::OrphanChain(name) => write!(f, "chain tag `{name}` does not follow a tag"),
        }
    }
}
