//! PNG snapshots of the dashboard charts.

use anyhow::{Context, Result};
use metroscape_core::dashboard::{ChartKind, DashboardView, NamedSeries, Panel};
use metroscape_schemas::status::Classification;
use plotters::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const YELLOW_ACCENT: RGBColor = RGBColor(240, 224, 80);
const BLUE_ACCENT: RGBColor = RGBColor(80, 128, 224);
const GREEN_ACCENT: RGBColor = RGBColor(64, 224, 160);
const RED_ACCENT: RGBColor = RGBColor(224, 80, 80);
const GAUGE_TRACK: RGBColor = RGBColor(225, 225, 225);

/// A dashboard view that draws every chart it is given into `output_dir`.
///
/// Charts outside `targets` are skipped without error, as are text panels.
pub struct PlotView {
    output_dir: PathBuf,
    targets: HashSet<ChartKind>,
    written: Vec<PathBuf>,
}

impl PlotView {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            targets: ChartKind::ALL.into_iter().collect(),
            written: Vec::new(),
        }
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = ChartKind>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DashboardView for PlotView {
    type Error = anyhow::Error;

    fn render_series(&mut self, chart: ChartKind, labels: &[String], series: &[NamedSeries]) -> Result<()> {
        if !self.targets.contains(&chart) {
            tracing::debug!(?chart, "no target for chart, skipping");
            return Ok(());
        }
        let path = self.output_dir.join(format!("{}.png", chart.file_stem()));

        let rendered = match chart {
            ChartKind::Insights => {
                plot_line_chart(&path, "City Index: Actual vs Ideal", "Index", labels, series, None)
            }
            ChartKind::GreenCover => {
                plot_line_chart(&path, "Green Cover (NDVI)", "NDVI", labels, series, None)
            }
            ChartKind::WaterReservoir => plot_line_chart(
                &path,
                "Water Reservoir Levels",
                "Level (%)",
                labels,
                series,
                Some(100.0),
            ),
            ChartKind::Mobility => plot_line_chart(
                &path,
                "Mobility and Air Quality",
                "Air Quality (µg/m³)",
                labels,
                series,
                None,
            ),
            ChartKind::Waste => plot_waste_chart(&path, labels, series),
            ChartKind::SustainabilityGauge => plot_sustainability_gauge(&path, series),
        };
        rendered.with_context(|| format!("Failed to render chart {}", path.display()))?;

        self.written.push(path);
        Ok(())
    }

    fn render_status(&mut self, _panel: Panel, _status: &Classification) -> Result<()> {
        Ok(())
    }

    fn render_text(&mut self, _panel: Panel, _text: &str) -> Result<()> {
        Ok(())
    }

    fn render_progress(&mut self, _panel: Panel, _percent: f64, _color: &str) -> Result<()> {
        Ok(())
    }
}

fn month_label(labels: &[String], x: u32) -> String {
    labels.get(x as usize).cloned().unwrap_or_default()
}

/// Generates a line chart with one line per series over the month labels.
fn plot_line_chart(
    path: &Path,
    caption: &str,
    y_desc: &str,
    labels: &[String],
    series: &[NamedSeries],
    y_max: Option<f64>,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let last_x = labels.len().saturating_sub(1).max(1) as u32;
    let max_value = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max);
    let y_max = y_max.unwrap_or(if max_value > 0.0 { max_value * 1.1 } else { 1.0 });

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..last_x, 0f64..y_max)?;

    let formatter = |x: &u32| month_label(labels, *x);
    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&formatter)
        .y_desc(y_desc)
        .draw()?;

    let colors = [YELLOW_ACCENT, BLUE_ACCENT, GREEN_ACCENT, RED_ACCENT];
    for (i, s) in series.iter().enumerate() {
        let color = colors[i % colors.len()];
        chart
            .draw_series(LineSeries::new(
                s.values.iter().enumerate().map(|(x, y)| (x as u32, *y)),
                color.stroke_width(3),
            ))?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Generates the disposal bars with the diversion line on a secondary 0-100% axis.
fn plot_waste_chart(path: &Path, labels: &[String], series: &[NamedSeries]) -> Result<()> {
    let (disposed, diversion) = match series {
        [disposed, diversion, ..] => (disposed, diversion),
        _ => anyhow::bail!("waste chart needs a disposal series and a diversion series"),
    };

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let months = labels.len().max(1) as f64;
    let peak = disposed.values.iter().copied().fold(0.0, f64::max);
    let y_max = (peak * 1.5).ceil().max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Waste Disposal and Diversion", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .right_y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..months - 0.5, 0f64..y_max)?
        .set_secondary_coord(-0.5f64..months - 0.5, 0f64..100f64);

    let formatter = |x: &f64| {
        if (x - x.round()).abs() < 1e-6 && *x >= 0.0 {
            labels.get(x.round() as usize).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&formatter)
        .y_desc("Tons / month")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Diversion (%)")
        .draw()?;

    chart
        .draw_series(disposed.values.iter().enumerate().map(|(i, v)| {
            let x = i as f64;
            Rectangle::new([(x - 0.35, 0.0), (x + 0.35, *v)], RED_ACCENT.mix(0.85).filled())
        }))?
        .label(disposed.label.as_str())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], RED_ACCENT.filled()));

    chart
        .draw_secondary_series(LineSeries::new(
            diversion.values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
            GREEN_ACCENT.stroke_width(3),
        ))?
        .label(diversion.label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN_ACCENT.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Generates a horizontal gauge: the score segment followed by the remainder to 100.
fn plot_sustainability_gauge(path: &Path, series: &[NamedSeries]) -> Result<()> {
    let score = series
        .first()
        .and_then(|s| s.values.first().copied())
        .context("sustainability gauge needs a score")?;

    let root = BitMapBackend::new(path, (1024, 256)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Sustainability Score: {score}"),
            ("sans-serif", 30).into_font(),
        )
        .margin(20)
        .x_label_area_size(30)
        .build_cartesian_2d(0f64..100f64, 0f64..1f64)?;

    chart
        .configure_mesh()
        .disable_y_axis()
        .disable_y_mesh()
        .x_desc("Score")
        .draw()?;

    let filled = score.clamp(0.0, 100.0);
    chart.draw_series([
        Rectangle::new([(0.0, 0.25), (100.0, 0.75)], GAUGE_TRACK.filled()),
        Rectangle::new([(0.0, 0.25), (filled, 0.75)], YELLOW_ACCENT.filled()),
    ])?;

    root.present()?;
    Ok(())
}
