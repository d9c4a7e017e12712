use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by a translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A display name that is not in the language registry
    #[error("Unknown language: '{name}'")]
    UnknownLanguage { name: String },

    /// Any failure raised by the model backend, passed through unchanged
    #[error(transparent)]
    ModelInvocation(anyhow::Error),
}

impl TranslateError {
    pub fn unknown_language(name: &str) -> Self {
        Self::UnknownLanguage {
            name: name.to_string(),
        }
    }

    /// HTTP status used when the error reaches a route handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownLanguage { .. } => StatusCode::BAD_REQUEST,
            Self::ModelInvocation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Errors raised while building the language registry from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Language table is empty")]
    Empty,

    #[error("Duplicate language name: '{0}'")]
    DuplicateName(String),

    #[error("Language entry #{0} has an empty name or tag")]
    EmptyField(usize),
}
