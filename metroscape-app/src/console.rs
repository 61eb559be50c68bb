use anyhow::Result;
use metroscape_core::dashboard::{ChartKind, DashboardView, NamedSeries, Panel};
use metroscape_schemas::status::Classification;

const BAR_WIDTH: usize = 30;

/// A dashboard view that prints panels to stdout as they are rendered.
#[derive(Default)]
pub struct ConsoleView {
    /// Also print the numbers behind each chart.
    pub show_series: bool,
}

fn panel_name(panel: Panel) -> &'static str {
    match panel {
        Panel::IndexAnalysis => "Index Analysis",
        Panel::Sustainability => "Sustainability",
        Panel::Climate => "Climate Scenario",
        Panel::Infrastructure => "Infrastructure",
        Panel::GreenCover => "Green Cover",
        Panel::WaterReservoir => "Water Reservoirs",
        Panel::Landfill => "Landfill",
        Panel::WasteDiversion => "Waste Diversion",
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

impl DashboardView for ConsoleView {
    type Error = anyhow::Error;

    fn render_series(&mut self, chart: ChartKind, labels: &[String], series: &[NamedSeries]) -> Result<()> {
        if !self.show_series {
            return Ok(());
        }
        println!("  [{}] {}", chart.file_stem(), labels.join(" "));
        for s in series {
            let values: Vec<String> = s.values.iter().map(|v| format!("{v:.2}")).collect();
            println!("    - {}: {}", s.label, values.join(", "));
        }
        Ok(())
    }

    fn render_status(&mut self, panel: Panel, status: &Classification) -> Result<()> {
        println!(
            "  {:<17} {} {} ({})",
            panel_name(panel),
            status.tier.icon(),
            status.title,
            status.class_name()
        );
        println!("  {:<17} {}", "", status.message);
        Ok(())
    }

    fn render_text(&mut self, panel: Panel, text: &str) -> Result<()> {
        println!("  {:<17} {}", panel_name(panel), text);
        Ok(())
    }

    fn render_progress(&mut self, panel: Panel, percent: f64, color: &str) -> Result<()> {
        println!(
            "  {:<17} {} {:.1}% ({})",
            panel_name(panel),
            progress_bar(percent),
            percent,
            color
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_clamped() {
        assert_eq!(progress_bar(0.0), format!("[{}]", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(250.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(-5.0), progress_bar(0.0));
        assert_eq!(progress_bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }
}
