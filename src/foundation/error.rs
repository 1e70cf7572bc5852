use std::path::PathBuf;

/// Convenience result type used across album-page.
pub type AlbumResult<T> = Result<T, AlbumError>;

/// Top-level error taxonomy used by registry and compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum AlbumError {
    /// Layout id is not part of the registry.
    #[error("unknown layout: '{0}'")]
    UnknownLayout(String),

    /// Layout id does not start with a slot count token.
    #[error("malformed layout id: '{0}' (expected a leading slot count such as '3-...')")]
    MalformedLayoutId(String),

    /// Print-size code is not part of the print-size table.
    #[error("unknown print size: '{0}'")]
    UnknownPrintSize(String),

    /// Caller supplied a different number of sources than the layout has slots.
    #[error("layout '{layout}' expects {expected} image(s), got {actual}")]
    SlotCountMismatch {
        /// Layout id being composed.
        layout: String,
        /// Number of slots in the layout.
        expected: usize,
        /// Number of sources supplied.
        actual: usize,
    },

    /// A source image could not be read or decoded.
    #[error("source image not found or unreadable: '{}'", path.display())]
    SourceImageNotFound {
        /// Path as supplied by the caller.
        path: PathBuf,
        /// Underlying IO/decode failure.
        #[source]
        source: anyhow::Error,
    },

    /// Invalid settings.
    #[error("config error: {0}")]
    Config(String),

    /// Raster or text rendering failure.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AlbumError {
    /// Build an [`AlbumError::UnknownLayout`] value.
    pub fn unknown_layout(id: impl Into<String>) -> Self {
        Self::UnknownLayout(id.into())
    }

    /// Build an [`AlbumError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`AlbumError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AlbumError::SourceImageNotFound`] value.
    pub fn source_not_found(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::SourceImageNotFound {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
