// Ringvault — Key-ring repository
//
// Implements the host framework's two-method key-repository contract
// against a document collection: read every stored key document, or append
// one new one. The repository keeps no state of its own between calls —
// everything lives in the external store.

use mongodb::sync::Client;

use crate::xml::KeyElement;

use super::accessor::CollectionAccessor;
use super::collection::KeyCollection;
use super::models::StoredRecord;
use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over key-document storage, matching the host's pluggable
/// key-repository extension point.
pub trait XmlRepository {
    /// Read every stored key document, in cursor order.
    ///
    /// A record without a string `xml` field aborts the whole read; no
    /// partial result is returned.
    fn get_all_elements(&self) -> Result<Vec<KeyElement>, StoreError>;

    /// Append one key document as a new record.
    ///
    /// `friendly_name` is accepted for interface compatibility; it is
    /// recorded on the trace event but never persisted. There is no
    /// idempotency key — a retried call appends a duplicate record.
    fn store_element(&self, element: &KeyElement, friendly_name: &str) -> Result<(), StoreError>;
}

// ─── MongoDB Implementation ──────────────────────────────────────────────────

pub struct MongoXmlRepository {
    accessor: CollectionAccessor,
}

impl MongoXmlRepository {
    pub fn new(accessor: CollectionAccessor) -> Self {
        Self { accessor }
    }

    /// Build a repository from a caller-supplied collection factory.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn KeyCollection>, StoreError> + Send + Sync + 'static,
    {
        Self::new(CollectionAccessor::from_factory(factory))
    }

    /// Build a repository over a live client and database/collection names.
    pub fn with_client(
        client: Client,
        database: &str,
        collection: Option<&str>,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(CollectionAccessor::with_client(
            client, database, collection,
        )?))
    }

    /// Build a repository from a connection string. The client is
    /// constructed eagerly; configuration problems surface here.
    pub fn with_uri(
        uri: &str,
        database: &str,
        collection: Option<&str>,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(CollectionAccessor::with_uri(
            uri, database, collection,
        )?))
    }
}

impl XmlRepository for MongoXmlRepository {
    fn get_all_elements(&self) -> Result<Vec<KeyElement>, StoreError> {
        let collection = self.accessor.resolve()?;

        let mut elements = Vec::new();
        for record in collection.scan()? {
            let stored = StoredRecord::from_document(&record?)?;
            elements.push(KeyElement::parse(&stored.xml)?);
        }

        tracing::debug!(
            namespace = %collection.namespace(),
            count = elements.len(),
            "Key ring scan completed"
        );

        Ok(elements)
    }

    fn store_element(&self, element: &KeyElement, friendly_name: &str) -> Result<(), StoreError> {
        let collection = self.accessor.resolve()?;

        let record = StoredRecord::from_element(element);
        collection.insert(record.into_document())?;

        tracing::info!(
            namespace = %collection.namespace(),
            friendly_name = %friendly_name,
            "Key element stored"
        );

        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
