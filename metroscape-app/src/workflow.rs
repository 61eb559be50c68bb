use crate::console::ConsoleView;
use crate::plotting::PlotView;
use anyhow::{Context, Result};
use metroscape_core::{
    dashboard::{ChartKind, Dashboard, InputEvent},
    export, geo,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvReport {
    Indexes,
    Waste,
}

/// Renders every panel to the console, then the waste model breakdown.
pub fn run_report(dashboard: &mut Dashboard, show_series: bool) -> Result<()> {
    println!("\n--- [Metroscape] Dashboard Report ---");
    let mut view = ConsoleView { show_series };
    dashboard.apply(InputEvent::Initialize, &mut view)?;
    print_waste_breakdown(dashboard)?;
    Ok(())
}

/// Prints every derived metric as JSON.
pub fn run_json_report(dashboard: &Dashboard) -> Result<()> {
    let snapshot = dashboard.snapshot()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

pub fn run_charts(dashboard: &mut Dashboard, output_dir: &Path, targets: &[ChartKind]) -> Result<Vec<PathBuf>> {
    println!("[Plotting] Generating chart snapshots...");
    let mut view = PlotView::new(output_dir);
    if !targets.is_empty() {
        view = view.with_targets(targets.iter().copied());
    }
    dashboard.apply(InputEvent::Initialize, &mut view)?;

    let written = view.written().to_vec();
    if written.is_empty() {
        println!("[Plotting] Warning: No charts were selected.");
    }
    println!("[Plotting] {} chart(s) saved to '{}'.", written.len(), output_dir.display());
    Ok(written)
}

pub fn run_export_csv(dashboard: &Dashboard, output_dir: &Path, report: CsvReport) -> Result<PathBuf> {
    let path = match report {
        CsvReport::Indexes => export::export_to_file(output_dir, export::INDEXES_CSV, |file| {
            export::write_index_csv(file, &dashboard.dataset().indices)
        }),
        CsvReport::Waste => {
            let outcome = dashboard.waste()?;
            let inputs = dashboard.waste_inputs();
            export::export_to_file(output_dir, export::WASTE_CSV, |file| {
                export::write_waste_csv(file, &outcome, &inputs)
            })
        }
    }
    .with_context(|| format!("Failed to export {:?} report", report))?;

    println!("Report written to '{}'.", path.display());
    Ok(path)
}

pub fn run_markers(dashboard: &Dashboard, output_dir: &Path) -> Result<PathBuf> {
    let dataset = dashboard.dataset();
    let hotspots = geo::hotspot_markers(&dataset.hotspots);
    let overlay = geo::ndvi_overlay(&dataset.hotspots, &dataset.ndvi)?;
    let layers = [("hotspots", hotspots.as_slice()), ("ndvi_overlay", overlay.as_slice())];

    let path = export::export_to_file(output_dir, export::MAP_GEOJSON, |file| {
        export::write_geojson(file, &layers)
    })
    .context("Failed to export map layers")?;

    println!(
        "Map layers ({} hotspots, {} NDVI circles, centered on {:.4}, {:.4} at zoom {}) written to '{}'.",
        hotspots.len(),
        overlay.len(),
        dataset.map.center_lat,
        dataset.map.center_lon,
        dataset.map.zoom,
        path.display()
    );
    Ok(path)
}

fn print_waste_breakdown(dashboard: &Dashboard) -> Result<()> {
    let outcome = dashboard.waste()?;
    let inputs = dashboard.waste_inputs();

    println!("\n--- [Waste Stream Summary] ---");
    println!("========================================");
    println!(
        "Inputs: growth {}% | economic index {}x | policy {}% | landfill cost ${}/ton",
        inputs.population_growth_pct,
        inputs.economic_index,
        inputs.policy_effectiveness_pct,
        inputs.landfill_cost_usd_per_ton
    );
    println!("  - Effective Population:     {:>12.0}", outcome.effective_population);
    println!("  - Total Monthly Waste:      {:>12.2} t", outcome.total_monthly_tons);
    println!("----------------------------------------");
    println!("  Stream                 Generated    Diverted");
    println!(
        "  - Residential:       {:>10.2} {:>11.2}",
        outcome.streams.residential, outcome.diverted.residential_recycled
    );
    println!(
        "  - Commercial:        {:>10.2} {:>11.2}",
        outcome.streams.commercial, outcome.diverted.commercial_recycled
    );
    println!(
        "  - Organics:          {:>10.2} {:>11.2}",
        outcome.streams.organics, outcome.diverted.organics_composted
    );
    println!(
        "  - Construction/Demo: {:>10.2} {:>11.2}",
        outcome.streams.construction_and_demolition, 0.0
    );
    println!("----------------------------------------");
    println!("  - Disposed to Landfill:     {:>12.2} t", outcome.disposed_to_landfill_tons);
    println!("  - Total Diversion:          {:>12.2} %", outcome.diversion_percent);
    println!("  - Landfill Lifespan:        {}", outcome.lifespan);
    println!("========================================");
    Ok(())
}
