use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;

use leaflet_render::{Context, Stem, Tag};
use leaflet_templates::{Leaf, parse};

use crate::config::Config;
use crate::error::{Error, Result};

/// Templates by name, and the [`Stem`] that renders them.
/// ```no_run
/// # use leaflet::{Config, Context, Document};
/// # use serde_json::json;
/// let document = Document::new(Config::new("templates"));
/// let context = Context::new(json!({"friends": ["Venus", "Pluto"]}));
/// // Renders `templates/friends.leaf`
/// let output = document.render_template("friends", &context).unwrap();
/// ```
#[derive(Debug)]
pub struct Document {
    config: Config,
    stem: Stem,
}

impl Document {
    pub fn new(config: Config) -> Self {
        Self::with_stem(config, Stem::new())
    }

    pub fn with_stem(config: Config, stem: Stem) -> Self {
        Self { config, stem }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stem(&self) -> &Stem {
        &self.stem
    }

    pub fn stem_mut(&mut self) -> &mut Stem {
        &mut self.stem
    }

    /// Register a tag with the stem.
    /// A tag already registered under `name` is replaced and returned.
    pub fn register(&mut self, name: impl Into<String>, tag: impl Tag + 'static) -> Option<Box<dyn Tag>> {
        self.stem.register(name, tag)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.config.path(name)
    }

    /// Load and parse a template by name
    pub fn spawn_leaf(&self, name: &str) -> Result<Leaf> {
        let path = self.path(name);
        log::debug!("loading template {}", path.display());

        let src = match read_to_string(&path) {
            Ok(src) => src,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(Error::MissingTemplate(path)),
            Err(source) => return Err(Error::Io { path, source }),
        };

        Ok(parse(&src)?)
    }

    /// Parse a template
    pub fn spawn_leaf_raw(&self, src: &str) -> Result<Leaf> {
        Ok(parse(src)?)
    }

    pub fn render(&self, leaf: &Leaf, context: &Context) -> Result<String> {
        Ok(self.stem.render(leaf, context)?)
    }

    /// Load, parse and render a template by name
    pub fn render_template(&self, name: &str, context: &Context) -> Result<String> {
        let leaf = self.spawn_leaf(name)?;
        self.render(&leaf, context)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
