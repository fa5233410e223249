use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-service")]
#[command(about = "Instrumented CRUD operations over a User store")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use a JSON file store at this path, overriding the configured backend
    #[arg(long)]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all users
    List,
    /// Fetch one user by id
    Get { id: Uuid },
    /// Create a user; a random id is assigned when none is given
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        id: Option<Uuid>,
    },
    /// Delete a user by id
    Delete { id: Uuid },
}
