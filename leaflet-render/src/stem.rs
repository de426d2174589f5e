use leaflet_templates::{Component, Leaf, TagTemplate, parse};

use crate::arguments::ArgumentList;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::tags::{Tag, Tags};
use crate::value::stringify;

// -----------------------------------------------------------------------------
//   - Chain group -
//   A tag followed by any number of chain tags:
//
//   #if(a) { .. } #@@if(b) { .. } #@@else() { .. }
//
//   The first candidate that should render is the output of the group.
// -----------------------------------------------------------------------------
struct ChainGroup<'leaf> {
    candidates: Vec<&'leaf TagTemplate>,
}

impl<'leaf> ChainGroup<'leaf> {
    // Split the group off the front of `components`.
    // The first component has to be a tag that isn't a chain.
    fn take(first: &'leaf TagTemplate, components: &mut &'leaf [Component]) -> Self {
        let mut candidates = vec![first];
        let mut rest: &'leaf [Component] = components;
        while let Some((Component::Tag(tag), tail)) = rest.split_first() {
            if !tag.is_chain() {
                break;
            }
            candidates.push(tag);
            rest = tail;
        }
        *components = rest;
        Self { candidates }
    }

    fn render(&self, stem: &Stem, context: &Context) -> Result<String> {
        for tag in &self.candidates {
            if let Some(output) = stem.render_tag(tag, context)? {
                return Ok(output);
            }
        }
        Ok(String::new())
    }
}

/// The render engine.
///
/// A `Stem` owns the tags and renders a [`Leaf`] against a [`Context`].
/// Tags are registered up front, rendering only needs a shared reference,
/// so one `Stem` can render any number of templates from any number of threads.
/// ```
/// # use leaflet_render::{Context, Stem};
/// # use serde_json::json;
/// let stem = Stem::new();
/// let context = Context::new(json!({"names": ["Venus", "Pluto"]}));
/// let output = stem.render_str("#loop(names, \"name\") {<b>#(name)</b>}", &context).unwrap();
/// assert_eq!(output, "<b>Venus</b>\n<b>Pluto</b>");
/// ```
#[derive(Debug)]
pub struct Stem {
    tags: Tags,
}

impl Stem {
    /// A stem with the built-in tags registered
    pub fn new() -> Self {
        Self::with_tags(Tags::builtin())
    }

    /// A stem without any tags, not even interpolation
    pub fn empty() -> Self {
        Self::with_tags(Tags::empty())
    }

    pub fn with_tags(tags: Tags) -> Self {
        Self { tags }
    }

    pub fn register(&mut self, name: impl Into<String>, tag: impl Tag + 'static) -> Option<Box<dyn Tag>> {
        self.tags.register(name, tag)
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Render a leaf.
    /// Any error aborts the render, there is no partial output.
    pub fn render(&self, leaf: &Leaf, context: &Context) -> Result<String> {
        let mut output = String::new();
        let mut components = leaf.components();

        while let Some((component, rest)) = components.split_first() {
            components = rest;
            match component {
                Component::Raw(text) => output.push_str(text),
                Component::Tag(tag) if tag.is_chain() => return Err(Error::OrphanChain(tag.name().to_string())),
                Component::Tag(tag) => {
                    let group = ChainGroup::take(tag, &mut components);
                    output.push_str(&group.render(self, context)?);
                }
            }
        }

        Ok(output)
    }

    /// Parse and render a template
    pub fn render_str(&self, src: &str, context: &Context) -> Result<String> {
        let leaf = parse(src)?;
        self.render(&leaf, context)
    }

    // Render a single tag.
    // `None` means the tag decided not to render.
    fn render_tag(&self, tag: &TagTemplate, context: &Context) -> Result<Option<String>> {
        let implementation = self
            .tags
            .get(tag.name())
            .ok_or_else(|| Error::UnknownTag(tag.name().to_string()))?;

        log::trace!("run tag `{}`", tag.name());
        let arguments = ArgumentList::new(tag, self, context);
        let value = implementation.run(tag, &arguments)?;
        if !implementation.should_render(tag, &arguments, value.as_ref()) {
            return Ok(None);
        }

        let output = match tag.body() {
            Some(body) => implementation.render(tag, &arguments, value, body)?,
            None => value.as_ref().map(stringify).unwrap_or_default(),
        };

        Ok(Some(output))
    }
}

impl Default for Stem {
    fn default() -> Self {
        Self::new()
    }
}
