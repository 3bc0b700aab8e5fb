pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;
pub mod scanner;
pub mod stats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
