use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use sales_report::config::ReportConfig;
use sales_report::pipeline;
use sales_report::report::StylesheetStatus;

#[derive(Parser)]
#[command(name = "sales-report", about = "Mock sales dataset and report generator")]
struct Cli {
    /// Output directory for all report artifacts
    #[arg(long, default_value = "reports")]
    output_dir: PathBuf,

    /// Stylesheet source file copied into the output directory if present
    #[arg(long, default_value = "style.css")]
    stylesheet: PathBuf,

    /// Random seed for the dataset generator
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of records to generate
    #[arg(long, default_value = "100")]
    records: usize,

    /// Date of the first record (YYYY-MM-DD)
    #[arg(long, default_value = "2025-01-01")]
    start_date: String,
}

fn main() {
    let cli = Cli::parse();

    let start_date = NaiveDate::parse_from_str(&cli.start_date, "%Y-%m-%d")
        .expect("Invalid start date (use YYYY-MM-DD)");

    let config = ReportConfig {
        output_dir: cli.output_dir,
        stylesheet_src: cli.stylesheet,
        seed: cli.seed,
        record_count: cli.records,
        start_date,
        ..ReportConfig::default()
    };

    match pipeline::run(&config) {
        Ok(artifacts) => {
            println!("Report generation complete!");
            println!("  CSV report:    {}", artifacts.csv_path.display());
            println!("  HTML report:   {}", artifacts.html_path.display());
            println!("  Chart:         {}", artifacts.chart_path.display());
            match artifacts.stylesheet {
                StylesheetStatus::Copied(path) => {
                    println!("  CSS copied to: {}", path.display())
                }
                StylesheetStatus::Skipped => println!(
                    "  CSS skipped:   {} not found",
                    config.stylesheet_src.display()
                ),
            }
            println!("  Zipped backup: {}", artifacts.archive_path.display());
        }
        Err(e) => {
            eprintln!("Error generating report: {}", e);
            std::process::exit(1);
        }
    }
}
