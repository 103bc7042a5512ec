use clap::Args;

use crate::core::client::database::constant::DEFAULT_DATABASE;

/// Parameters used to config MongoDB.
#[derive(Debug, Clone, Args)]
pub struct MongoDBCliArgs {
    /// The connection string to the MongoDB server.
    #[arg(env = "PROVISIONER_MONGODB_CONNECTION_URL", long, default_value = "mongodb://localhost:27017")]
    pub mongodb_connection_url: String,

    /// The name of the target database.
    #[arg(env = "PROVISIONER_DATABASE_NAME", long, default_value = DEFAULT_DATABASE)]
    pub database_name: String,
}
