pub mod api;
pub mod commands;
pub mod config;
pub mod database;
pub mod seed;
pub mod store;

#[cfg(test)]
pub mod test_helpers;
