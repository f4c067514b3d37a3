// Ringvault — Store Module
//
// MongoDB-backed persistence for data-protection key rings. Each key
// document is one record with a single `xml` string field; writes are
// append-only and reads are full-collection scans.

mod accessor;
mod collection;
mod error;
mod models;
mod repository;

pub use accessor::{CollectionAccessor, DEFAULT_COLLECTION};
pub use collection::{KeyCollection, MongoKeyCollection, RecordCursor};
pub use error::StoreError;
pub use models::{StoredRecord, XML_FIELD};
pub use repository::{MongoXmlRepository, XmlRepository};
