// Ringvault — Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Database error: {0}")]
    Connectivity(#[from] mongodb::error::Error),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("XML error: {0}")]
    Xml(#[from] crate::xml::XmlError),

    #[error("{0}")]
    Other(String),
}
