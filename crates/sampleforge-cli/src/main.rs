use std::path::{Path, PathBuf};

use clap::Parser;
use sampleforge_generate::{FileReport, GenerateOptions, GenerationEngine, GenerationError, RecordKind};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "sampleforge", version, about = "Sample business data generator")]
struct Cli {
    /// Output directory for the generated files.
    #[arg(long, default_value = "sample-data")]
    out_dir: PathBuf,
    /// Seed for reproducible output. Omitted means a fresh random run.
    #[arg(long)]
    seed: Option<u64>,
    /// Records per transactions file.
    #[arg(long, default_value_t = 1000)]
    transactions: u64,
    /// Records per customers file.
    #[arg(long, default_value_t = 500)]
    customers: u64,
    /// Records per products file.
    #[arg(long, default_value_t = 200)]
    products: u64,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging();
    tracing::debug!(?cli, "parsed arguments");

    let options = GenerateOptions {
        out_dir: cli.out_dir,
        seed: cli.seed,
        transactions: cli.transactions,
        customers: cli.customers,
        products: cli.products,
    };

    let engine = GenerationEngine::new(options);

    print_rule();
    println!("Sample Data Generator");
    print_rule();
    println!();

    let mut run = engine.start()?;
    println!(
        "Output directory: {}",
        absolute_display(&engine.options().out_dir)
    );
    println!();

    for kind in RecordKind::ALL {
        println!("Generating {} data...", kind.label());
        let files = run.generate_kind(kind)?;
        for file in files {
            print_file_line(&engine.options().out_dir, file);
        }
        println!();
    }

    let result = run.finish();

    print_rule();
    println!("Sample data generation complete!");
    print_rule();
    println!();
    println!(
        "Wrote {} files ({} rows, {} bytes) in {} ms",
        result.report.files_written,
        result.report.rows_total,
        result.report.bytes_written,
        result.report.duration_ms
    );
    println!();
    println!("Next steps:");
    println!("1. Upload the files to your object-storage bucket");
    println!("2. Create ingestion jobs in the demo application");
    println!("3. Monitor job progress in the Jobs page");
    println!();
    println!("Example upload command:");
    println!(
        "  mc cp {}/*.json minio/your-bucket/data/",
        result.out_dir.display()
    );
    println!();

    Ok(())
}

fn print_file_line(out_dir: &Path, file: &FileReport) {
    let path = out_dir.join(&file.file_name);
    match &file.skip_reason {
        None => println!("\u{2713} Created {} ({} records)", path.display(), file.rows),
        Some(reason) => println!("\u{26a0} Skipped {} - {}", path.display(), reason),
    }
}

fn print_rule() {
    println!("{}", "=".repeat(60));
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
