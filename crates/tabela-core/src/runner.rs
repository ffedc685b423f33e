//! Sequential pipeline driver: fetch, tabulate, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::PipelineConfig;
use crate::fetch::{fetch, join_url};
use crate::sink::write_table;
use crate::table::tabulate;

/// Per-run result record.
///
/// Callers (and tests) use this to inspect what each stage produced
/// without re-reading the output file.
#[derive(Debug)]
pub struct Summary {
    pub url: String,
    pub rows: usize,
    pub columns: usize,
    pub output_path: PathBuf,
    pub elapsed: std::time::Duration,
}

/// Run the full pipeline once.
///
/// Exactly one success path; a failure at any stage aborts the run and
/// no output file is produced.
pub fn run(config: &PipelineConfig) -> Result<Summary> {
    let start = Instant::now();
    let url = join_url(&config.fetch.api_endpoint, &config.fetch.api_path);

    log::info!("Fetching {url}");
    let payload = fetch(&config.fetch)?;

    log::info!("Tabulating key \"{}\"", config.table.data_key);
    let table = tabulate(&payload, &config.table.data_key)?;
    log::info!("{} rows, {} columns", table.num_rows(), table.num_columns());

    let output_path = write_table(&table, &config.write)
        .with_context(|| format!("failed to write {}", config.write.output_filename))?;
    log::info!("Wrote {}", output_path.display());

    Ok(Summary {
        url,
        rows: table.num_rows(),
        columns: table.num_columns(),
        output_path,
        elapsed: start.elapsed(),
    })
}
