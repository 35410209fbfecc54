pub mod connection;
pub mod entities;
pub mod migration;

pub use connection::{connect_app_db, open_app_db, pending_migrations};
