pub mod history;
pub mod offsets;
pub mod provider;
