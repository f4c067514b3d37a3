// Ringvault — Collection handle seam
//
// The contract against the document store: an unfiltered full-collection
// scan yielding a cursor of raw records, and a single-document append.
// The repository never updates or deletes a record.

use mongodb::bson::Document;
use mongodb::sync::Collection;

use super::StoreError;

/// Iterator over the raw records of one scan, in cursor order.
pub type RecordCursor = Box<dyn Iterator<Item = Result<Document, StoreError>>>;

/// Abstraction over the target collection.
pub trait KeyCollection: Send + Sync {
    /// Open a cursor over every record in the collection.
    fn scan(&self) -> Result<RecordCursor, StoreError>;

    /// Append one record.
    fn insert(&self, record: Document) -> Result<(), StoreError>;

    /// The `database.collection` label, used in trace events.
    fn namespace(&self) -> String;
}

/// `KeyCollection` backed by a MongoDB collection handle.
pub struct MongoKeyCollection {
    inner: Collection<Document>,
}

impl MongoKeyCollection {
    pub fn new(inner: Collection<Document>) -> Self {
        Self { inner }
    }
}

impl KeyCollection for MongoKeyCollection {
    fn scan(&self) -> Result<RecordCursor, StoreError> {
        let cursor = self.inner.find(None, None)?;
        Ok(Box::new(cursor.map(|record| record.map_err(StoreError::from))))
    }

    fn insert(&self, record: Document) -> Result<(), StoreError> {
        self.inner.insert_one(record, None)?;
        Ok(())
    }

    fn namespace(&self) -> String {
        self.inner.namespace().to_string()
    }
}
