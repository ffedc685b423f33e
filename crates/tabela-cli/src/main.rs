//! tabela - extract a CSV file from a JSON API
//!
//! Fetches a JSON payload from a configured endpoint, flattens one
//! array field into a table, and writes the table as a CSV file.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "tabela")]
#[command(about = "Extract a CSV file from a JSON API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file path (default: ./tabela.toml or ~/.config/tabela/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline once: fetch, tabulate, write
    Run(RunArgs),
    /// Show current configuration
    Config,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// API base endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Path appended to the endpoint
    #[arg(long)]
    path: Option<String>,

    /// Payload key holding the array to tabulate
    #[arg(long)]
    data_key: Option<String>,

    /// Output file name (".csv" appended when missing)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tabela_core::init_logging(cli.quiet, cli.debug);

    // Load configuration (file values, CLI flags override)
    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Run(args) => {
            let pipeline = tabela_core::PipelineConfig {
                fetch: tabela_core::FetchConfig {
                    api_endpoint: args.endpoint.unwrap_or(config.api.endpoint),
                    api_path: args.path.unwrap_or(config.api.path),
                },
                table: tabela_core::TableConfig {
                    data_key: args.data_key.unwrap_or(config.table.data_key),
                },
                write: tabela_core::WriteConfig {
                    output_filename: args.output.unwrap_or(config.output.filename),
                },
            };

            let summary = tabela_core::run(&pipeline)?;
            println!(
                "{} rows x {} columns -> {} ({:.2}s)",
                summary.rows,
                summary.columns,
                summary.output_path.display(),
                summary.elapsed.as_secs_f64()
            );
            Ok(())
        }
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec!["API endpoint", &config.api.endpoint]);
            table.add_row(vec!["API path", &config.api.path]);
            table.add_row(vec!["Data key", &config.table.data_key]);
            table.add_row(vec!["Output filename", &config.output.filename]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
