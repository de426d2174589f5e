use std::error::Error as StdError;

use leaflet_templates::{ParseError, TagTemplate};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No tag is registered with this name
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    /// A chain tag was rendered without a preceding tag
    #[error("chain tag `{0}` does not follow a tag")]
    OrphanChain(String),

    /// A tag rejected its arguments
    #[error("tag `{tag}`: {source}")]
    Tag {
        tag: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn tag(tag: &TagTemplate, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Tag {
            tag: tag.name().to_string(),
            source: source.into(),
        }
    }

    /// The tag specific error, if this is a tag error of type `E`.
    /// ```
    /// # use leaflet_render::{Context, LoopError, Stem};
    /// let stem = Stem::new();
    /// let err = stem.render_str("#loop(a)", &Context::empty()).unwrap_err();
    /// assert_eq!(err.tag_error::<LoopError>(), Some(&LoopError::ExpectedTwoArguments));
    /// ```
    pub fn tag_error<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::Tag { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}
