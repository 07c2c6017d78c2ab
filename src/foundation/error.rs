/// Convenience result type used across scrollseq.
pub type SeqResult<T> = Result<T, SeqError>;

/// Top-level error taxonomy used by player, loader and renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum SeqError {
    /// Invalid configuration or out-of-range input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame could not be fetched or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// Errors while painting into a surface or writing it out.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeqError {
    /// Build a [`SeqError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeqError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`SeqError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SeqError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
