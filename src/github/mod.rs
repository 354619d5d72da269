pub mod client;
pub mod loader;
pub mod project;
pub mod types;
