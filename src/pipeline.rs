use crate::config::ReportConfig;
use crate::report::StylesheetStatus;
use crate::{aggregate, archive, chart, dataset, report};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Paths of the artifacts produced by a completed run.
#[derive(Debug)]
pub struct RunArtifacts {
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
    pub stylesheet: StylesheetStatus,
    pub html_path: PathBuf,
    pub archive_path: PathBuf,
}

/// Execute the full report pipeline: generate, aggregate, plot, write,
/// archive.
///
/// Stages run sequentially and the first failure aborts the run; a partially
/// written output directory after an error should be deleted and the run
/// repeated.
pub fn run(config: &ReportConfig) -> Result<RunArtifacts, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&config.output_dir)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let records = dataset::generate(&mut rng, config);

    let region_totals = aggregate::revenue_by_region(&records, &config.regions);
    let ranking = aggregate::product_ranking(&records);

    let chart_path = config.chart_path();
    chart::render_bar_chart(&region_totals, &chart_path)?;

    let csv_path = config.csv_path();
    report::write_csv(&records, &csv_path)?;

    let stylesheet = report::copy_stylesheet(&config.stylesheet_src, &config.output_dir)?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = report::render_html(&records, &ranking, &generated_at);
    let html_path = config.html_path();
    report::save_report(&html, &html_path)?;

    let archive_path = config.archive_path();
    archive::create_archive(&config.output_dir, &archive_path)?;

    Ok(RunArtifacts {
        csv_path,
        chart_path,
        stylesheet,
        html_path,
        archive_path,
    })
}
