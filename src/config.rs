use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File names of the artifacts produced under the output directory.
pub const CSV_FILE: &str = "sales_report.csv";
pub const CHART_FILE: &str = "revenue_by_region.png";
pub const STYLE_FILE: &str = "style.css";
pub const HTML_FILE: &str = "sales_report.html";
pub const ARCHIVE_FILE: &str = "reports_backup.zip";

/// Configuration for a report run.
///
/// Every stage takes what it needs from here instead of reading module-level
/// constants, so tests can point a run at a temp directory with any seed.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory all artifacts are written into. Created if missing.
    pub output_dir: PathBuf,
    /// Stylesheet copied into the output directory when present.
    pub stylesheet_src: PathBuf,
    /// Seed for the dataset RNG.
    pub seed: u64,
    /// Number of records to generate.
    pub record_count: usize,
    /// Date of the first record; subsequent records advance one day each.
    pub start_date: NaiveDate,
    /// Fixed region set. Region totals are reported in this order.
    pub regions: Vec<String>,
    /// Fixed product set.
    pub products: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_dir: PathBuf::from("reports"),
            stylesheet_src: PathBuf::from("style.css"),
            seed: 42,
            record_count: 100,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            regions: ["North", "South", "East", "West"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            products: ["Flooring", "Adhesive", "Coating"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ReportConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILE)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE)
    }

    pub fn style_path(&self) -> PathBuf {
        self.output_dir.join(STYLE_FILE)
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(HTML_FILE)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(ARCHIVE_FILE)
    }

    /// Config with the default constants but a caller-chosen output directory.
    pub fn with_output_dir(dir: &Path) -> Self {
        ReportConfig {
            output_dir: dir.to_path_buf(),
            ..ReportConfig::default()
        }
    }
}
