use super::error::DatabaseError;
use crate::core::client::database::DatabaseClient;
use crate::types::params::DatabaseArgs;
use crate::types::schema::IndexSpec;
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use std::sync::Arc;
use tracing::debug;

/// MongoDB client implementation
pub struct MongoDbClient {
    client: Client,
    database: Arc<Database>,
}

impl MongoDbClient {
    pub async fn new(config: &DatabaseArgs) -> Result<Self, DatabaseError> {
        let client = Client::with_uri_str(&config.connection_uri).await?;
        let database = Arc::new(client.database(&config.database_name));
        Ok(Self { client, database })
    }

    /// Raw driver handle, for operations above the collection level such as
    /// dropping a whole database. Cloning is cheap, the driver shares state
    /// through an internal Arc.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Get a typed collection
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DatabaseClient for MongoDbClient {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn drop_collection(&self, name: &str) -> Result<(), DatabaseError> {
        // The server treats dropping an absent collection as a success.
        self.collection::<Document>(name).drop(None).await?;
        debug!(collection = name, "Dropped collection");
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> Result<(), DatabaseError> {
        self.database.create_collection(name, None).await?;
        debug!(collection = name, "Created collection");
        Ok(())
    }

    async fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<(), DatabaseError> {
        let result = self.collection::<Document>(collection).create_index(index.to_index_model(), None).await?;
        debug!(collection, index = %result.index_name, "Created index");
        Ok(())
    }

    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>, DatabaseError> {
        Ok(self.collection::<Document>(collection).list_index_names().await?)
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, DatabaseError> {
        Ok(self.collection::<Document>(collection).count_documents(None, None).await?)
    }
}
