use std::path::PathBuf;

/// Where named templates are loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the templates
    pub root: PathBuf,
    /// File extension of a template, without the leading dot
    pub extension: String,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// The path of a named template.
    /// A name that already has an extension is used as is.
    pub fn path(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        match path.extension() {
            Some(_) => path,
            None if self.extension.is_empty() => path,
            None => path.with_extension(&self.extension),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "leaf".into(),
        }
    }
}
