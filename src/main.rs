use clap::Parser as _;
use dotenvy::dotenv;
use message_provisioner::cli::{Cli, Commands};
use message_provisioner::setup::setup;
use message_provisioner::utils::logging::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Setup { setup_command } => {
            info!("Executing setup command with args: {:?}", setup_command);
            match setup(setup_command).await {
                Ok(_) => {
                    info!("Message store provisioning completed successfully");
                }
                Err(e) => {
                    error!(
                        error = %e,
                        error_chain = ?e,
                        "Failed to provision message store"
                    );
                    panic!("Failed to provision message store: {}", e);
                }
            }
        }
    }
}
