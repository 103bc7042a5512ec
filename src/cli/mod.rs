use clap::{Parser, Subcommand};

pub mod database;

#[derive(Parser, Debug)]
#[command(
    name = "provisioner",
    about = "Message store provisioner - MongoDB schema setup for the message service",
    long_about = "Provisions the `message` collection used by the message service.\n\n\
    The collection is dropped (if present), recreated empty, and indexed with\n\
    the compound conversation index (convert_id, create_time).\n\n\
    Quick Start:\n  \
    provisioner setup\n  \
    provisioner setup --database-name douyin_test"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Setup the message store schema
    #[command(long_about = "Reset the message collection and create its compound index.\n\n\
        This is a destructive, one-shot administrative operation: any documents\n\
        in the collection are permanently removed before it is recreated.")]
    Setup {
        #[command(flatten)]
        setup_command: Box<SetupCmd>,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct SetupCmd {
    #[clap(flatten)]
    pub mongodb_args: database::mongodb::MongoDBCliArgs,
}
