pub mod config;
pub mod debugger;
pub mod types;
