use anyhow::Result;
use clap::{Args, ValueEnum};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatabaseType {
    Sqlite,
    Mysql,
    Postgresql,
}

impl DatabaseType {
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme)?;
        match scheme {
            "sqlite" => Some(Self::Sqlite),
            "mysql" => Some(Self::Mysql),
            "postgres" | "postgresql" => Some(Self::Postgresql),
            _ => None,
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::Sqlite => None,
            Self::Mysql => Some(3306),
            Self::Postgresql => Some(5432),
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Mysql => write!(f, "mysql"),
            Self::Postgresql => write!(f, "postgresql"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub ty: DatabaseType,
    pub url: Option<String>,
    pub path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseConfig {
    pub fn sqlite(path: impl Into<String>) -> Self {
        Self {
            ty: DatabaseType::Sqlite,
            url: None,
            path: Some(path.into()),
            host: None,
            port: None,
            database: None,
            username: None,
            password: None,
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("ty", &self.ty)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("path", &self.path)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Args)]
pub struct DatabaseArgs {
    /// Full connection string (sqlite://, mysql://, postgres://); overrides the discrete settings
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DATABASE_TYPE", value_enum, default_value_t = DatabaseType::Sqlite)]
    pub database_type: DatabaseType,

    #[arg(long, env = "SQLITE_PATH", default_value = "./fruits.db")]
    pub sqlite_path: String,

    #[arg(long, env = "MYSQL_HOST")]
    pub db_host: Option<String>,

    #[arg(long, env = "MYSQL_PORT")]
    pub db_port: Option<u16>,

    #[arg(long, env = "MYSQL_DATABASE")]
    pub db_name: Option<String>,

    #[arg(long, env = "MYSQL_USER")]
    pub db_user: Option<String>,

    #[arg(long, env = "MYSQL_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Use the embedded SQLite store when networked settings are incomplete
    #[arg(long, env = "FALLBACK_TO_SQLITE")]
    pub fallback_to_sqlite: bool,
}

impl Default for DatabaseArgs {
    fn default() -> Self {
        Self {
            database_url: None,
            database_type: DatabaseType::Sqlite,
            sqlite_path: "./fruits.db".to_string(),
            db_host: None,
            db_port: None,
            db_name: None,
            db_user: None,
            db_password: None,
            fallback_to_sqlite: false,
        }
    }
}

impl DatabaseArgs {
    pub fn resolve(self) -> Result<DatabaseConfig> {
        if let Some(url) = self.database_url.filter(|url| !url.trim().is_empty()) {
            let ty = DatabaseType::from_url(&url).ok_or_else(|| {
                anyhow::anyhow!("Unsupported database URL scheme; expected sqlite, mysql or postgres")
            })?;
            return Ok(DatabaseConfig {
                ty,
                url: Some(url),
                path: None,
                host: None,
                port: None,
                database: None,
                username: None,
                password: None,
            });
        }

        let ty = self.database_type;
        if ty == DatabaseType::Sqlite {
            return Ok(DatabaseConfig::sqlite(self.sqlite_path));
        }

        let missing: Vec<&str> = [
            ("MYSQL_HOST", self.db_host.is_none()),
            ("MYSQL_DATABASE", self.db_name.is_none()),
            ("MYSQL_USER", self.db_user.is_none()),
            ("MYSQL_PASSWORD", self.db_password.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if !missing.is_empty() {
            if self.fallback_to_sqlite {
                warn!(
                    database_type = %ty,
                    missing = %missing.join(", "),
                    path = %self.sqlite_path,
                    "Networked database settings incomplete, falling back to SQLite"
                );
                return Ok(DatabaseConfig::sqlite(self.sqlite_path));
            }
            return Err(anyhow::anyhow!(
                "Missing required environment variables for {ty}: {}",
                missing.join(", ")
            ));
        }

        Ok(DatabaseConfig {
            ty,
            url: None,
            path: None,
            host: self.db_host,
            port: self.db_port.or(ty.default_port()),
            database: self.db_name,
            username: self.db_user,
            password: self.db_password,
        })
    }
}
