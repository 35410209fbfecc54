pub mod database;

use anyhow::{Context, Result};
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

pub use database::{DatabaseArgs, DatabaseConfig, DatabaseType};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub environment: String,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedConfig {
    Disabled,
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Address the HTTP server binds to
    #[arg(long, env = "FRUITS_API_BIND", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// Deployment environment reported by /health
    #[arg(long, env = "ENVIRONMENT", default_value = "production")]
    pub environment: String,

    /// YAML catalog used instead of the built-in seed data
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Skip seeding an empty database on startup
    #[arg(long, env = "NO_SEED")]
    pub no_seed: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServerArgs {
    pub fn resolve(self) -> Result<AppConfig> {
        let bind = self
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address: {}", self.bind))?;

        let seed = match (self.no_seed, self.seed_file) {
            (true, _) => SeedConfig::Disabled,
            (false, Some(path)) => SeedConfig::File(path),
            (false, None) => SeedConfig::Builtin,
        };

        Ok(AppConfig {
            bind,
            environment: self.environment,
            database: self.database.resolve()?,
            seed,
        })
    }
}
