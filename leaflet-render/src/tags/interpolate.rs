use leaflet_templates::{Leaf, TagTemplate};
use serde_json::Value;

use super::Tag;
use crate::arguments::ArgumentList;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterpolateError {
    #[error("expected one argument")]
    ExpectedOneArgument,
}

/// `#(path)`: the value at `path`.
/// With a body, the body is rendered if there is a value,
/// with the value as the innermost scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpolate;

impl Tag for Interpolate {
    fn run(&self, tag: &TagTemplate, arguments: &ArgumentList<'_>) -> Result<Option<Value>> {
        if arguments.len() != 1 {
            return Err(Error::tag(tag, InterpolateError::ExpectedOneArgument));
        }
        arguments.value(0)
    }

    fn should_render(&self, _: &TagTemplate, _: &ArgumentList<'_>, value: Option<&Value>) -> bool {
        value.is_some()
    }

    fn render(&self, _: &TagTemplate, arguments: &ArgumentList<'_>, value: Option<Value>, body: &Leaf) -> Result<String> {
        let context = arguments.context();
        match value {
            Some(value) => arguments.stem().render(body, &context.push_scope(value)),
            None => Ok(String::new()),
        }
    }
}
