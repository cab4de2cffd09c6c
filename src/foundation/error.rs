/// Convenience result type used across thumbsmith.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Top-level error taxonomy used by the rendering pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// The source image could not be decoded. Terminal for the render request.
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration that cannot be clamped into a usable range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No usable font face could be resolved.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while rasterizing a scene.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the output raster.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing requests.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbError {
    /// Build a [`ThumbError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ThumbError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`ThumbError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ThumbError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ThumbError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ThumbError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for source image decode failures.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
