use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

mod cli;
mod commands;

use cli::{Cli, Commands};
use todo_api::{telemetry, ApiConfig};
use todo_core::TodoManager;
use todo_db::PgTodoStore;

/// One-shot commands only log warnings unless `RUST_LOG` says otherwise.
const CLI_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Get configuration
    let mut config = ApiConfig::load()?;

    // Initialize tracing
    telemetry::init_tracing(log_filter(&cli.command, &config), config.log_format);

    if cli.database_url.is_some() {
        config.database_url = cli.database_url.clone();
    }

    // Run CLI
    run(cli, config).await
}

fn log_filter<'a>(command: &Commands, config: &'a ApiConfig) -> &'a str {
    match command {
        Commands::Serve { .. } => config.log_filter.as_str(),
        _ => CLI_LOG_FILTER,
    }
}

async fn run(cli: Cli, mut config: ApiConfig) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            println!("Starting API server on {}...", config.addr());
            todo_api::serve(&config).await
        }

        Commands::InitDb => {
            let db = connect(&config).await?;
            println!("Initializing database schema...");
            db.init_schema().await?;
            println!("✓ Database initialized successfully");
            Ok(())
        }

        command => {
            let db = connect(&config).await?;
            let manager = TodoManager::new(Arc::new(db));
            commands::execute(command, &manager, cli.json).await
        }
    }
}

async fn connect(config: &ApiConfig) -> Result<PgTodoStore> {
    let db_url = config
        .database_url
        .as_deref()
        .context("Database URL required: pass --database-url or set DATABASE_URL")?;

    let db = PgTodoStore::with_max_connections(db_url, config.max_connections).await?;
    tracing::debug!("Connected to database");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_server_keeps_configured_filter() {
        let config = config();
        let serve = Commands::Serve {
            host: None,
            port: None,
        };

        assert_eq!(log_filter(&serve, &config), config.log_filter);
    }

    #[test]
    fn test_todo_commands_log_quietly() {
        let config = config();

        for command in [
            Commands::Add {
                title: "Learn X".to_string(),
                description: None,
                completed: false,
            },
            Commands::Search {
                text: "learn".to_string(),
            },
            Commands::InitDb,
        ] {
            assert_eq!(log_filter(&command, &config), CLI_LOG_FILTER);
        }
    }
}
