/// Crate-wide result alias.
pub type TempoResult<T> = Result<T, TempoError>;

/// Errors surfaced at the boundaries of the animation core.
///
/// Sampling and per-frame evaluation never produce these; they are total over their input
/// domain. Errors only come out of validation, project import, and export.
#[derive(thiserror::Error, Debug)]
pub enum TempoError {
    /// A config or track violates a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation operation received input it cannot represent.
    #[error("animation error: {0}")]
    Animation(String),

    /// A project file was rejected; the current project is left unchanged.
    #[error("import error: {0}")]
    Import(String),

    /// The standalone program could not be generated.
    #[error("export error: {0}")]
    Export(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure (I/O and friends).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TempoError {
    /// Build a [`TempoError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TempoError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`TempoError::Import`].
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Build a [`TempoError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`TempoError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TempoError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
