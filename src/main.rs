use anyhow::Result;
use clap::{Parser, Subcommand};
use fruits_api::{
    commands,
    commands::migrate::MigrateAction,
    config::{DatabaseArgs, ServerArgs},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "fruits_api=info,tower_http=info";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServerArgs),
    /// Manage the database schema
    Migrate {
        /// Migration action to perform
        #[arg(value_enum, default_value_t = MigrateAction::Up)]
        action: MigrateAction,
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Populate an empty database with the seed catalog
    Seed {
        /// YAML catalog used instead of the built-in seed data
        #[arg(long, env = "SEED_FILE")]
        seed_file: Option<PathBuf>,
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => commands::serve::execute_serve(args.resolve()?).await,
        Commands::Migrate { action, database } => {
            commands::migrate::execute_migrate(&database.resolve()?, action).await
        }
        Commands::Seed {
            seed_file,
            database,
        } => commands::seed::execute_seed(&database.resolve()?, seed_file.as_deref()).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    Ok(())
}
