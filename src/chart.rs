//! Bar chart rendering for region revenue totals.
//!
//! Uses the [`plotters`] bitmap backend so rendering works in headless
//! environments (Docker/CI, no display).

use crate::aggregate::RegionTotal;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Sky blue, matching the published report chart color.
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// Draws one vertical bar per region and saves the chart as a PNG file.
///
/// Chart properties: 800x500 resolution, title "Revenue by Region", x axis
/// "Region" labeled with the region names, y axis "Total Revenue" starting at
/// zero. Overwrites any existing file at `output_path`.
pub fn render_bar_chart(totals: &[RegionTotal], output_path: &Path) -> Result<()> {
    if totals.is_empty() {
        return Err(ChartError::InvalidData(
            "Region totals cannot be empty".to_string(),
        ));
    }

    let names: Vec<String> = totals.iter().map(|t| t.region.clone()).collect();
    let y_max = totals
        .iter()
        .map(|t| t.revenue)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.05;

    let root = BitMapBackend::new(output_path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Revenue by Region", ("sans-serif", 32))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(90)
        .build_cartesian_2d(
            (0u32..totals.len() as u32 - 1).into_segmented(),
            0.0..y_max,
        )
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Region")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => names
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("Total Revenue")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(24)
                .data(
                    totals
                        .iter()
                        .enumerate()
                        .map(|(i, t)| (i as u32, t.revenue)),
                ),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}
