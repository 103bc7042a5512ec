pub mod constant;
pub mod error;
pub mod mongodb;

use crate::types::schema::IndexSpec;
use async_trait::async_trait;
pub use error::DatabaseError;

/// Trait defining the schema-level database operations the provisioner needs
///
/// Abstracts over the concrete driver so the provisioning sequence can be
/// tested in isolation against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// ping - Health check against the target database
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// drop_collection - Drop a collection and all its documents.
    /// Succeeds silently when the collection does not exist.
    async fn drop_collection(&self, name: &str) -> Result<(), DatabaseError>;

    /// create_collection - Create a new, empty collection
    async fn create_collection(&self, name: &str) -> Result<(), DatabaseError>;

    /// create_index - Build an index on a collection from its declarative spec
    async fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<(), DatabaseError>;

    /// list_index_names - Names of all indexes currently defined on a collection
    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>, DatabaseError>;

    /// count_documents - Number of documents in a collection
    async fn count_documents(&self, collection: &str) -> Result<u64, DatabaseError>;
}
