use std::path::Path;

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;
use tracing::{debug, warn};

use crate::models::report::ReportRequest;
use crate::models::revenue::{RevenueRecord, RevenueSeries};
use crate::utils::errors::ReportError;

const CHART_WIDTH: u32 = 1200;
const CHART_HEIGHT: u32 = 600;

// Green for the raw series, red for the trend overlay
const REVENUE_COLOR: RGBColor = RGBColor(46, 204, 113);
const AVERAGE_COLOR: RGBColor = RGBColor(231, 76, 60);

/// Render the revenue series as a PNG line chart at the request's
/// output path, overwriting any previous file.
///
/// Draws a solid line for the raw values and a dashed overlay for the
/// trailing moving average. Positions with no defined average are left
/// out of the overlay entirely. The caller must not pass an empty
/// series.
pub fn render_chart(series: &RevenueSeries, request: &ReportRequest) -> Result<(), ReportError> {
    let root =
        BitMapBackend::new(&request.output_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::Render(format!("Failed to fill canvas: {}", e)))?;

    let (x_min, x_max) = x_bounds(&series.records);
    let (y_min, y_max) = y_bounds(&series.records);

    let caption = format!(
        "{} {} Trend (User: {})",
        request.period.adjective(),
        request.metric.noun(),
        request.user_id
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(&caption, ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ReportError::Render(format!("Failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(request.metric.axis_label())
        .x_labels(12)
        .x_label_formatter(&|d| d.format("%Y-%m-%d").to_string())
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(|e| ReportError::Render(format!("Failed to draw mesh: {}", e)))?;

    let raw_points: Vec<(NaiveDate, f64)> = series
        .records
        .iter()
        .map(|r| (r.date, r.revenue))
        .collect();
    chart
        .draw_series(LineSeries::new(raw_points, REVENUE_COLOR.stroke_width(2)))
        .map_err(|e| ReportError::Render(format!("Failed to draw series: {}", e)))?
        .label(format!(
            "{} {}",
            request.period.adjective(),
            request.metric.noun()
        ))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REVENUE_COLOR.stroke_width(2)));

    let avg_points = overlay_points(series);
    if !avg_points.is_empty() {
        chart
            .draw_series(DashedLineSeries::new(
                avg_points,
                6,
                4,
                AVERAGE_COLOR.stroke_width(2),
            ))
            .map_err(|e| ReportError::Render(format!("Failed to draw overlay: {}", e)))?
            .label(format!("7-{} Moving Avg", request.period.unit()))
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], AVERAGE_COLOR.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| ReportError::Render(format!("Failed to draw legend: {}", e)))?;

    root.present()
        .map_err(|e| ReportError::Render(format!("Failed to render chart: {}", e)))?;

    Ok(())
}

/// Best-effort interactive display of the written chart. The file is
/// already on disk at this point, so viewer failures are only logged.
pub fn open_viewer(path: &Path) {
    #[cfg(target_os = "macos")]
    let viewer = "open";
    #[cfg(not(target_os = "macos"))]
    let viewer = "xdg-open";

    match std::process::Command::new(viewer).arg(path).spawn() {
        Ok(_) => debug!("Opened {} with {}", path.display(), viewer),
        Err(e) => warn!("Could not open chart viewer: {}", e),
    }
}

/// Date range of the series, widened by a day on each side when the
/// series holds a single date so the axis still has extent.
fn x_bounds(records: &[RevenueRecord]) -> (NaiveDate, NaiveDate) {
    let first = records[0].date;
    let last = records[records.len() - 1].date;
    if first == last {
        (first - Duration::days(1), last + Duration::days(1))
    } else {
        (first, last)
    }
}

/// Value range padded 10% above and below, floored at zero
fn y_bounds(records: &[RevenueRecord]) -> (f64, f64) {
    let min = records
        .iter()
        .map(|r| r.revenue)
        .fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(|r| r.revenue)
        .fold(f64::NEG_INFINITY, f64::max);

    let range = (max - min).max(1e-8);
    let padding = range * 0.1;
    ((min - padding).max(0.0), max + padding)
}

/// Moving-average overlay points. Positions with no defined average are
/// omitted, not plotted as zero or interpolated.
fn overlay_points(series: &RevenueSeries) -> Vec<(NaiveDate, f64)> {
    series
        .records
        .iter()
        .zip(series.rolling.iter())
        .filter_map(|(record, avg)| avg.map(|value| (record.date, value)))
        .collect()
}
