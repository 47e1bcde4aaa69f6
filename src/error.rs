//! Typed errors for the domain layer
//!
//! The event loop itself works with `anyhow::Result`; these enums exist for
//! the places where callers need to tell failures apart.

use thiserror::Error;

/// Failures reading or writing the local key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine storage directory")]
    NoStorageDir,
}

/// A wizard refused to move to another step. Messages are shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("selecciona al menos una entrada para continuar")]
    NoTicketsSelected,

    #[error("faltan campos obligatorios: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("no hay un paso anterior")]
    NoPreviousStep,

    #[error("el proceso ya está completo")]
    AlreadyComplete,

    #[error("revisa el evento antes de publicarlo")]
    NotReadyToPublish,
}

/// Image fetch failures, kept per URL in the loader cache
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("response was empty")]
    Empty,

    #[error("response is not an image")]
    NotAnImage,
}
