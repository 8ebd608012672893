//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid parameters, unusable grids, grids rejected by station validation,
//! document serialization, and generic errors.
use thiserror::Error;

use crate::diagnostics::Diagnostics;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("grid rejected: {0}")]
    Rejected(Diagnostics),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Diagnostics attached to a rejected grid, if this is a rejection.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::Rejected(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }
}
