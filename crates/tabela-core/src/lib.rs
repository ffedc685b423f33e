//! Tabela Core - API-to-CSV extraction pipeline
//!
//! This crate provides the three pipeline stages (fetch, tabulate, write)
//! and the sequential runner that threads them together.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod runner;
pub mod sink;
pub mod table;

// Re-exports for convenience
pub use config::{FetchConfig, PipelineConfig, TableConfig, WriteConfig};
pub use error::PipelineError;
pub use fetch::{SHARED_RUNTIME, fetch, http_client, join_url};
pub use logging::init_logging;
pub use runner::{Summary, run};
pub use sink::{ensure_csv_extension, write_csv, write_table};
pub use table::{Table, tabulate};
