use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use leaflet_templates::{INTERPOLATION, Leaf, TagTemplate};
use serde_json::Value;

pub use self::conditional::{Else, If, IfError};
pub use self::interpolate::{Interpolate, InterpolateError};
pub use self::loops::{Loop, LoopError};
use crate::arguments::ArgumentList;
use crate::error::Result;

mod conditional;
mod interpolate;
mod loops;

/// A tag is the only way to extend a template.
///
/// For every tag node the [`Stem`](crate::Stem) resolves the arguments, calls [`Tag::run`]
/// followed by [`Tag::should_render`]. If the tag should render and it has a body,
/// [`Tag::render`] produces the output, otherwise the value returned from
/// `run` is the output.
pub trait Tag: Send + Sync {
    fn run(&self, tag: &TagTemplate, arguments: &ArgumentList<'_>) -> Result<Option<Value>>;

    /// Decide if the tag renders.
    /// A chain of tags renders the first tag that returns `true`.
    fn should_render(&self, tag: &TagTemplate, arguments: &ArgumentList<'_>, value: Option<&Value>) -> bool;

    /// Render the body of the tag.
    /// `value` is what [`Tag::run`] returned. The stem and the context the tag
    /// is rendered in are reachable through `arguments`.
    /// Override this to render the body against a different scope,
    /// or any number of times.
    fn render(
        &self,
        _tag: &TagTemplate,
        arguments: &ArgumentList<'_>,
        _value: Option<Value>,
        body: &Leaf,
    ) -> Result<String> {
        arguments.stem().render(body, arguments.context())
    }
}

/// Tags by name
#[derive(Default)]
pub struct Tags {
    inner: HashMap<String, Box<dyn Tag>>,
}

impl Tags {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Interpolation, `loop`, `if` and `else`
    pub fn builtin() -> Self {
        let mut tags = Self::empty();
        tags.register(INTERPOLATION, Interpolate);
        tags.register("loop", Loop);
        tags.register("if", If);
        tags.register("else", Else);
        tags
    }

    /// Register a tag.
    /// If a tag is already registered under this name it's replaced
    /// and the previous tag is returned.
    pub fn register(&mut self, name: impl Into<String>, tag: impl Tag + 'static) -> Option<Box<dyn Tag>> {
        let name = name.into();
        let previous = self.inner.insert(name.clone(), Box::new(tag));
        match previous {
            Some(_) => log::debug!("replaced tag `{name}`"),
            None => log::debug!("registered tag `{name}`"),
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tag> {
        self.inner.get(name).map(|tag| &**tag)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Debug for Tags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names = self.names().collect::<Vec<_>>();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}
