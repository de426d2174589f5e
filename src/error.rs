use std::path::PathBuf;

use leaflet_templates::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] leaflet_render::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// There is no template at this path
    #[error("missing template: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// See [`leaflet_render::Error::tag_error`]
    pub fn tag_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Render(err) => err.tag_error(),
            _ => None,
        }
    }
}
