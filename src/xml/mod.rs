// Ringvault — XML Module
//
// Owned XML key fragments held in canonical compact text form. The
// fragment's internal schema is opaque; only well-formedness is checked.

mod element;
mod error;

pub use element::KeyElement;
pub use error::XmlError;
