/// Convenience result type used across the crate.
pub type OdysseyResult<T> = Result<T, OdysseyError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Playback operations themselves never fail; these errors only surface while loading
/// content or configuration and while producing pixels.
#[derive(thiserror::Error, Debug)]
pub enum OdysseyError {
    /// Invalid content or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or exporting a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OdysseyError {
    /// Build an [`OdysseyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OdysseyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OdysseyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
