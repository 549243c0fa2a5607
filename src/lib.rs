pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod types;
