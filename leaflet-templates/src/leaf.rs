use std::fmt::{self, Display, Formatter};
use std::slice::Iter;

use crate::tag::TagTemplate;

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Raw(String),
    Tag(TagTemplate),
}

impl Component {
    pub fn as_tag(&self) -> Option<&TagTemplate> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Raw(_) => None,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Self::Raw(text) => text.chars().all(char::is_whitespace),
            Self::Tag(_) => false,
        }
    }
}

impl From<TagTemplate> for Component {
    fn from(tag: TagTemplate) -> Self {
        Self::Tag(tag)
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(text) => write!(f, "{text}"),
            Self::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// A parsed template.
/// Once parsed a leaf is never modified, so one leaf can be rendered
/// any number of times, from any number of threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaf(Vec<Component>);

impl Leaf {
    pub fn new(components: Vec<Component>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[Component] {
        &self.0
    }

    pub fn iter(&self) -> Iter<'_, Component> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Component>> for Leaf {
    fn from(components: Vec<Component>) -> Self {
        Self(components)
    }
}

impl From<&str> for Leaf {
    fn from(text: &str) -> Self {
        Self(vec![Component::Raw(text.to_string())])
    }
}

impl FromIterator<Component> for Leaf {
    fn from_iter<T: IntoIterator<Item = Component>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Leaf {
    type IntoIter = Iter<'a, Component>;
    type Item = &'a Component;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for component in &self.0 {
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
