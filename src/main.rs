use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use user_service::config::toml_config::BACKEND_JSON_FILE;
use user_service::config::{Command, StorageConfig};
use user_service::utils::{logger, validation::Validate};
use user_service::{CliConfig, ServiceConfig, TracingLogger, User, UserService};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => ServiceConfig::default(),
    };

    if let Some(data_file) = &cli.data_file {
        config.storage = StorageConfig {
            backend: BACKEND_JSON_FILE.to_string(),
            path: Some(data_file.clone()),
        };
    }

    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    config.validate().context("Configuration validation failed")?;
    tracing::debug!("Service config: {:?}", config);

    let repository = config.storage.build_repository()?;
    let service = UserService::new(repository, Arc::new(TracingLogger::new()));

    match cli.command {
        Command::List => {
            let users = service.get_all().await?;
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        Command::Get { id } => match service.get_by_id(id).await? {
            Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
            None => {
                eprintln!("No user with id {}", id);
                std::process::exit(2);
            }
        },
        Command::Create { name, id } => {
            let user = User::new(id.unwrap_or_else(Uuid::new_v4), name);
            let created = service.create(&user).await?;
            println!("{}", serde_json::json!({ "id": user.id, "created": created }));
        }
        Command::Delete { id } => {
            let deleted = service.delete_by_id(id).await?;
            println!("{}", serde_json::json!({ "id": id, "deleted": deleted }));
        }
    }

    Ok(())
}
