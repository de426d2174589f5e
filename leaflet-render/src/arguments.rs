use std::slice::Iter;

use leaflet_templates::{Leaf, Parameter, TagTemplate};
use serde_json::Value;

use crate::context::Context;
use crate::error::Result;
use crate::stem::Stem;

/// A parameter resolved against a context
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<'tpl> {
    /// A path and the value found at that path, if any
    Variable { path: &'tpl [String], value: Option<Value> },
    /// A constant is rendered when the value is accessed
    Constant(&'tpl Leaf),
}

impl<'tpl> Argument<'tpl> {
    pub fn new(parameter: &'tpl Parameter, context: &Context) -> Self {
        match parameter {
            Parameter::Variable(path) => Self::Variable {
                path,
                value: context.get(path),
            },
            Parameter::Constant(leaf) => Self::Constant(leaf),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable { .. })
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// The value of the argument.
    /// A constant is rendered against `context` and returned as a string.
    pub fn value(&self, stem: &Stem, context: &Context) -> Result<Option<Value>> {
        match self {
            Self::Variable { value, .. } => Ok(value.clone()),
            Self::Constant(leaf) => {
                let rendered = stem.render(leaf, context)?;
                Ok(Some(Value::String(rendered)))
            }
        }
    }
}

/// The arguments of a tag, resolved against the context the tag is rendered in.
///
/// Values are not cached: every call to [`ArgumentList::value`] resolves the
/// argument again, which means constants are rendered once per access.
/// As long as the context isn't changed between two calls the result is the same.
pub struct ArgumentList<'a> {
    list: Vec<Argument<'a>>,
    stem: &'a Stem,
    context: &'a Context,
}

impl<'a> ArgumentList<'a> {
    pub fn new(tag: &'a TagTemplate, stem: &'a Stem, context: &'a Context) -> Self {
        let list = tag
            .parameters()
            .iter()
            .map(|param| Argument::new(param, context))
            .collect();

        Self { list, stem, context }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument<'a>> {
        self.list.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Argument<'a>> {
        self.list.iter()
    }

    pub fn stem(&self) -> &'a Stem {
        self.stem
    }

    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// The value of the argument at `index`.
    /// An index out of range is `None`, not an error.
    pub fn value(&self, index: usize) -> Result<Option<Value>> {
        match self.list.get(index) {
            Some(arg) => arg.value(self.stem, self.context),
            None => Ok(None),
        }
    }

    pub fn first(&self) -> Result<Option<Value>> {
        self.value(0)
    }

    pub fn last(&self) -> Result<Option<Value>> {
        match self.list.len() {
            0 => Ok(None),
            len => self.value(len - 1),
        }
    }
}
