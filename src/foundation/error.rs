/// Convenience result type used across meshstitch.
pub type MeshResult<T> = Result<T, MeshError>;

/// Error taxonomy for conditions the renderer cannot recover from.
///
/// Malformed thread data is never an error; it is defaulted during normalization.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    /// A configuration file exists but could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The raster backend cannot satisfy the planned canvas.
    #[error("render error: {0}")]
    Render(String),

    /// The finished image could not be written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MeshError {
    /// Build a [`MeshError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MeshError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MeshError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
