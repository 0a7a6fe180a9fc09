/// Result alias used across the crate.
pub type RippleResult<T> = Result<T, RippleError>;

/// Error type for everything around the kernel: buffer plumbing, thread pools and config loading.
///
/// The per-pixel kernel itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum RippleError {
    /// Caller-supplied options are unusable.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pass could not be executed (bad buffer sizes, pool setup).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Config JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, typically IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RippleError {
    /// Build a [`RippleError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RippleError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RippleError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
