// Ringvault — XML error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("XML write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("Fragment contains no element")]
    NoElement,

    #[error("Serialized fragment is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}
