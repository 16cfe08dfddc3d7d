//! Error types for the launcher library.

/// Errors produced by the launcher core and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LauncherError {
    #[error("sprite data is {actual} bytes, expected {expected}")]
    SpriteSize { expected: usize, actual: usize },

    #[error("{0} unavailable")]
    Query(&'static str),
}

/// Convenience alias.
pub type Result<T> = core::result::Result<T, LauncherError>;
