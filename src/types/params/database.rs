use crate::cli::SetupCmd;
use crate::error::ProvisionerError;

/// DatabaseArgs - Validated arguments used to connect to the target database
#[derive(Debug, Clone)]
pub struct DatabaseArgs {
    pub connection_uri: String,
    pub database_name: String,
}

impl TryFrom<SetupCmd> for DatabaseArgs {
    type Error = ProvisionerError;

    fn try_from(setup_cmd: SetupCmd) -> Result<Self, Self::Error> {
        let args = setup_cmd.mongodb_args;
        if args.mongodb_connection_url.trim().is_empty() {
            return Err(ProvisionerError::ConfigError("MongoDB connection URL cannot be empty".to_string()));
        }
        if args.database_name.trim().is_empty() {
            return Err(ProvisionerError::ConfigError("Database name cannot be empty".to_string()));
        }
        Ok(Self { connection_uri: args.mongodb_connection_url, database_name: args.database_name })
    }
}
