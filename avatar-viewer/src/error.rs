//! Failure modes of the avatar loading pipeline.
//!
//! Every variant is fatal: the pipeline logs it and parks the app in
//! `AppState::Failed` without rendering a partial scene.

// Standard library and external crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvatarError {
    /// The manifest could not be fetched or was not valid JSON.
    #[error("failed to fetch scene manifest '{path}': {reason}")]
    Network { path: String, reason: String },

    #[error("file '{file}' is not valid base64: {source}")]
    Decode {
        file: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("avatar bundle has no '{0}' entry")]
    MissingFile(String),

    #[error("file '{file}' is not UTF-8 text: {source}")]
    NotText {
        file: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Malformed OBJ or MTL content, as reported by `tobj`.
    #[error("failed to parse '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: tobj::LoadError,
    },
}
