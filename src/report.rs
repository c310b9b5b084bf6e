use crate::aggregate::ProductTotal;
use crate::config::{CHART_FILE, STYLE_FILE};
use crate::dataset::Record;
use std::path::{Path, PathBuf};

/// How many records the HTML report previews.
const PREVIEW_ROWS: usize = 10;

/// Outcome of the stylesheet copy stage.
///
/// The absent-source case is an expected, non-fatal outcome, so it is
/// reported back to the caller instead of being swallowed.
#[derive(Debug, Clone, PartialEq)]
pub enum StylesheetStatus {
    Copied(PathBuf),
    Skipped,
}

/// Serialize the full dataset to a CSV file, header row first.
pub fn write_csv(records: &[Record], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Copy the stylesheet into the output directory if the source exists.
///
/// A missing source is skipped, not an error; a copy failure on an existing
/// source propagates.
pub fn copy_stylesheet(
    src: &Path,
    output_dir: &Path,
) -> Result<StylesheetStatus, Box<dyn std::error::Error>> {
    if !src.exists() {
        return Ok(StylesheetStatus::Skipped);
    }
    let dest = output_dir.join(STYLE_FILE);
    std::fs::copy(src, &dest)?;
    Ok(StylesheetStatus::Copied(dest))
}

fn record_rows(records: &[Record]) -> String {
    let mut rows = String::new();
    for r in records.iter().take(PREVIEW_ROWS) {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
            r.date, r.region, r.product, r.units_sold, r.unit_price, r.revenue
        ));
    }
    rows
}

fn ranking_rows(ranking: &[ProductTotal]) -> String {
    let mut rows = String::new();
    for t in ranking {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td></tr>\n",
            t.product, t.revenue
        ));
    }
    rows
}

/// Compose the HTML report document.
///
/// References the chart image and stylesheet by relative path; the stylesheet
/// link is emitted even when the copy was skipped (broken link accepted).
/// `generated_at` is formatted by the caller so this stays a pure function.
pub fn render_html(records: &[Record], ranking: &[ProductTotal], generated_at: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Sales Report</title>
<link rel="stylesheet" type="text/css" href="{style_file}">
</head>
<body>
<h1>Automated Sales Report</h1>
<p><b>Generated on:</b> {generated_at}</p>
<p>This automatically generated report summarizes sales performance by region and product.</p>
<h2>Data Preview (first {preview} rows)</h2>
<table>
<tr><th>Date</th><th>Region</th><th>Product</th><th>Units_Sold</th><th>Unit_Price</th><th>Revenue</th></tr>
{preview_rows}
</table>
<h2>Revenue by Region</h2>
<img src="{chart_file}" alt="Revenue Chart">
<h2>Top Products by Revenue</h2>
<table>
<tr><th>Product</th><th>Revenue</th></tr>
{ranking_rows}
</table>
</body>
</html>"#,
        style_file = STYLE_FILE,
        generated_at = generated_at,
        preview = PREVIEW_ROWS,
        preview_rows = record_rows(records),
        chart_file = CHART_FILE,
        ranking_rows = ranking_rows(ranking),
    )
}

/// Write the HTML document, creating parent directories as needed.
pub fn save_report(html: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}
