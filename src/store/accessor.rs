// Ringvault — Collection accessor
//
// Lazily produces collection handles for the repository. The handle is
// re-resolved on every operation, so a caller-supplied factory may rotate
// connections freely; nothing here caches a live handle. Configuration
// problems surface at construction time, never at first use.

use std::sync::Arc;

use mongodb::bson::Document;
use mongodb::sync::Client;

use super::collection::{KeyCollection, MongoKeyCollection};
use super::StoreError;

/// Collection name used when the caller does not supply one.
pub const DEFAULT_COLLECTION: &str = "DataProtection-Keys";

type CollectionFactory = Arc<dyn Fn() -> Result<Box<dyn KeyCollection>, StoreError> + Send + Sync>;

/// Deferred provider of collection handles.
#[derive(Clone)]
pub struct CollectionAccessor {
    factory: CollectionFactory,
}

impl CollectionAccessor {
    /// Build an accessor from a caller-supplied factory.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn KeyCollection>, StoreError> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Build an accessor over a live client. The named collection is
    /// resolved anew on every `resolve` call; `collection` defaults to
    /// [`DEFAULT_COLLECTION`].
    pub fn with_client(
        client: Client,
        database: &str,
        collection: Option<&str>,
    ) -> Result<Self, StoreError> {
        if database.is_empty() {
            return Err(StoreError::InvalidConfig(
                "database name must not be empty".into(),
            ));
        }
        let collection = collection.unwrap_or(DEFAULT_COLLECTION);
        if collection.is_empty() {
            return Err(StoreError::InvalidConfig(
                "collection name must not be empty".into(),
            ));
        }

        let database = database.to_owned();
        let collection = collection.to_owned();
        Ok(Self::from_factory(move || {
            let handle = client
                .database(&database)
                .collection::<Document>(&collection);
            Ok(Box::new(MongoKeyCollection::new(handle)) as Box<dyn KeyCollection>)
        }))
    }

    /// Build an accessor from a connection string. The client is
    /// constructed once, here, and reused by every later resolution.
    pub fn with_uri(
        uri: &str,
        database: &str,
        collection: Option<&str>,
    ) -> Result<Self, StoreError> {
        if uri.is_empty() {
            return Err(StoreError::InvalidConfig(
                "connection string must not be empty".into(),
            ));
        }
        let client = Client::with_uri_str(uri)
            .map_err(|e| StoreError::InvalidConfig(format!("invalid connection string: {e}")))?;
        Self::with_client(client, database, collection)
    }

    /// Resolve a live collection handle.
    pub fn resolve(&self) -> Result<Box<dyn KeyCollection>, StoreError> {
        (self.factory)()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_connection_string_is_rejected() {
        let result = CollectionAccessor::with_uri("", "keys", None);
        assert!(matches!(result, Err(StoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_unparseable_connection_string_is_rejected() {
        let result = CollectionAccessor::with_uri("not-a-mongodb-uri", "keys", None);
        assert!(matches!(result, Err(StoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_database_name_is_rejected() {
        let result = CollectionAccessor::with_uri("mongodb://localhost", "", None);
        assert!(matches!(result, Err(StoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_collection_name_is_rejected() {
        let result = CollectionAccessor::with_uri("mongodb://localhost", "keys", Some(""));
        assert!(matches!(result, Err(StoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_database_name_with_client_is_rejected() {
        let client = Client::with_uri_str("mongodb://localhost").unwrap();
        let result = CollectionAccessor::with_client(client, "", None);
        assert!(matches!(result, Err(StoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_collection_name_defaults() {
        // Client construction is lazy: no connection is made until an
        // operation actually runs, so resolving the namespace is safe
        // without a server.
        let accessor = CollectionAccessor::with_uri("mongodb://localhost", "keys", None).unwrap();
        let handle = accessor.resolve().unwrap();
        assert_eq!(handle.namespace(), "keys.DataProtection-Keys");
    }

    #[test]
    fn test_explicit_collection_name_is_honored() {
        let accessor =
            CollectionAccessor::with_uri("mongodb://localhost", "keys", Some("Ring")).unwrap();
        let handle = accessor.resolve().unwrap();
        assert_eq!(handle.namespace(), "keys.Ring");
    }

    #[test]
    fn test_factory_failure_surfaces_on_resolve() {
        let accessor =
            CollectionAccessor::from_factory(|| Err(StoreError::Other("store offline".into())));
        let result = accessor.resolve();
        assert!(matches!(result, Err(StoreError::Other(_))));
    }
}
