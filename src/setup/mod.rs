use crate::cli::SetupCmd;
use crate::core::client::database::DatabaseClient;
use crate::core::client::MongoDbClient;
use crate::types::params::DatabaseArgs;
use crate::types::schema::{message_schema, CollectionSchema};
use crate::{ProvisionerError, ProvisionerResult};
use tracing::{debug, info, warn};

/// Setup function that provisions the message store schema
pub async fn setup(setup_cmd: &SetupCmd) -> ProvisionerResult<()> {
    let database_params = DatabaseArgs::try_from(setup_cmd.clone())?;
    debug!("Database Params: {:?}", database_params);

    info!(database = %database_params.database_name, "Setting up message store schema...");

    let client = MongoDbClient::new(&database_params).await?;
    // Fail on an unreachable or unauthenticated deployment before any
    // destructive step runs.
    client.ping().await?;

    provision(&client, &message_schema()).await
}

/// Reset a collection to a clean, indexed state.
///
/// Runs the strict drop -> create -> index sequence, each step awaited before
/// the next. Destructive: any documents in the collection are permanently
/// removed. There is no rollback; on failure the database is left in whatever
/// state the failed step produced.
pub async fn provision<C: DatabaseClient + ?Sized>(client: &C, schema: &CollectionSchema) -> ProvisionerResult<()> {
    schema.validate()?;

    warn!(collection = %schema.collection, "Dropping collection, existing documents will be lost");
    client.drop_collection(&schema.collection).await?;

    info!(collection = %schema.collection, "Creating collection");
    client.create_collection(&schema.collection).await?;

    info!(collection = %schema.collection, index = %schema.index.name, "Creating compound index");
    client.create_index(&schema.collection, &schema.index).await?;

    // Read back the index list so a silently skipped build surfaces as a
    // fatal error instead of a degraded collection.
    let index_names = client.list_index_names(&schema.collection).await?;
    if !index_names.iter().any(|name| name == &schema.index.name) {
        return Err(ProvisionerError::ResourceSetupError(format!(
            "Index {} missing after provisioning collection {}",
            schema.index.name, schema.collection
        )));
    }
    debug!(collection = %schema.collection, indexes = ?index_names, "Provisioning complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::database::{DatabaseError, MockDatabaseClient};
    use crate::types::schema::{IndexSpec, message_schema};
    use assert_matches::assert_matches;
    use mockall::Sequence;

    fn connection_refused() -> DatabaseError {
        DatabaseError::ConnectionError("connection refused".to_string())
    }

    #[tokio::test]
    async fn runs_drop_create_index_in_strict_order() {
        let schema = message_schema();
        let mut client = MockDatabaseClient::new();
        let mut seq = Sequence::new();

        client
            .expect_drop_collection()
            .withf(|name| name == "message")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        client
            .expect_create_collection()
            .withf(|name| name == "message")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        client
            .expect_create_index()
            .withf(|name, index| name == "message" && index.name == "idx_convertId_createTime")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        client
            .expect_list_index_names()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec!["_id_".to_string(), "idx_convertId_createTime".to_string()]));

        provision(&client, &schema).await.unwrap();
    }

    #[tokio::test]
    async fn aborts_without_indexing_when_create_fails() {
        let schema = message_schema();
        let mut client = MockDatabaseClient::new();

        client.expect_drop_collection().times(1).returning(|_| Ok(()));
        client.expect_create_collection().times(1).returning(|_| Err(connection_refused()));
        client.expect_create_index().never();
        client.expect_list_index_names().never();

        let result = provision(&client, &schema).await;
        assert_matches!(result, Err(ProvisionerError::DatabaseError(DatabaseError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn surfaces_drop_failure_before_touching_schema() {
        let schema = message_schema();
        let mut client = MockDatabaseClient::new();

        client
            .expect_drop_collection()
            .times(1)
            .returning(|_| Err(DatabaseError::PermissionError("not authorized".to_string())));
        client.expect_create_collection().never();
        client.expect_create_index().never();

        let result = provision(&client, &schema).await;
        assert_matches!(result, Err(ProvisionerError::DatabaseError(DatabaseError::PermissionError(_))));
    }

    #[tokio::test]
    async fn duplicate_index_definition_is_fatal() {
        let schema = message_schema();
        let mut client = MockDatabaseClient::new();

        client.expect_drop_collection().times(1).returning(|_| Ok(()));
        client.expect_create_collection().times(1).returning(|_| Ok(()));
        client
            .expect_create_index()
            .times(1)
            .returning(|_, _| Err(DatabaseError::DuplicateIndexName("incompatible definition".to_string())));
        client.expect_list_index_names().never();

        let result = provision(&client, &schema).await;
        assert_matches!(result, Err(ProvisionerError::DatabaseError(DatabaseError::DuplicateIndexName(_))));
    }

    #[tokio::test]
    async fn missing_index_after_build_is_a_setup_error() {
        let schema = message_schema();
        let mut client = MockDatabaseClient::new();

        client.expect_drop_collection().times(1).returning(|_| Ok(()));
        client.expect_create_collection().times(1).returning(|_| Ok(()));
        client.expect_create_index().times(1).returning(|_, _| Ok(()));
        client.expect_list_index_names().times(1).returning(|_| Ok(vec!["_id_".to_string()]));

        let result = provision(&client, &schema).await;
        assert_matches!(result, Err(ProvisionerError::ResourceSetupError(_)));
    }

    #[tokio::test]
    async fn invalid_schema_never_reaches_the_database() {
        let schema = CollectionSchema {
            collection: "message".to_string(),
            index: IndexSpec::new("idx_convertId_createTime", vec![]),
        };
        let mut client = MockDatabaseClient::new();
        client.expect_drop_collection().never();

        let result = provision(&client, &schema).await;
        assert_matches!(result, Err(ProvisionerError::ConfigError(_)));
    }
}
