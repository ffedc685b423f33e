//! Run the default pipeline: Rio BRT vehicle positions to veiculos.csv
//!
//! Usage: cargo run -p tabela-core --example extract_brt

use tabela_core::PipelineConfig;

fn main() -> anyhow::Result<()> {
    tabela_core::init_logging(false, false);

    let summary = tabela_core::run(&PipelineConfig::default())?;
    println!(
        "{} rows x {} columns -> {}",
        summary.rows,
        summary.columns,
        summary.output_path.display()
    );
    Ok(())
}
