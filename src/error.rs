// Ringvault — Top-level error types
//
// Aggregates errors from the xml and store modules into a single
// error enum for the application boundary.

use thiserror::Error;

/// Top-level error type for all Ringvault operations.
#[derive(Debug, Error)]
pub enum RingvaultError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("XML error: {0}")]
    Xml(#[from] crate::xml::XmlError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RingvaultError>;
