pub mod error;
pub mod filesystem;
pub mod models;
pub mod provider;
pub mod utils;
