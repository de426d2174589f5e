use std::fmt::{self, Display, Formatter};

use crate::leaf::Leaf;

/// Every tag starts with this character.
pub const TAG_TOKEN: char = '#';

/// A tag name starting with the chain token is a chain continuation,
/// e.g `#@@else() { ... }`.
pub const CHAIN_TOKEN: &str = "@@";

/// The reserved tag name used for `#(path)` interpolation.
/// This is not a valid identifier so it can never be written as `#name(...)`.
pub const INTERPOLATION: &str = "$";

/// A tag argument as it was written in the template.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// A dotted path, e.g `friend.name` or `list.0`
    Variable(Vec<String>),
    /// A quoted string. The content is a template of its own
    /// so `"Hello #(name)"` is rendered before it's used.
    Constant(Leaf),
}

impl Parameter {
    pub fn variable<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Variable(path.into_iter().map(Into::into).collect())
    }

    pub fn constant(leaf: impl Into<Leaf>) -> Self {
        Self::Constant(leaf.into())
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(path) => write!(f, "{}", path.join(".")),
            Self::Constant(leaf) => write!(f, "\"{leaf}\""),
        }
    }
}

/// A single tag invocation: `#name(parameters) { body }`
#[derive(Debug, Clone)]
pub struct TagTemplate {
    name: String,
    parameters: Vec<Parameter>,
    body: Option<Leaf>,
    is_chain: bool,
}

impl TagTemplate {
    /// Create a new tag template.
    /// If the name starts with the [`CHAIN_TOKEN`] the token is stripped
    /// and the tag is marked as a chain continuation.
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, body: Option<Leaf>) -> Self {
        let name = name.into();
        let (name, is_chain) = match name.strip_prefix(CHAIN_TOKEN) {
            Some(stripped) => (stripped.to_string(), true),
            None => (name, false),
        };

        Self {
            name,
            parameters,
            body,
            is_chain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn body(&self) -> Option<&Leaf> {
        self.body.as_ref()
    }

    pub fn is_chain(&self) -> bool {
        self.is_chain
    }
}

// The chain flag is derived from the name and is not compared
impl PartialEq for TagTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parameters == other.parameters && self.body == other.body
    }
}

impl Display for TagTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{TAG_TOKEN}")?;
        if self.is_chain {
            write!(f, "{CHAIN_TOKEN}")?;
        }
        if self.name != INTERPOLATION {
            write!(f, "{}", self.name)?;
        }

        write!(f, "(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;

        if let Some(body) = &self.body {
            write!(f, " {{ {body} }}")?;
        }

        Ok(())
    }
}
