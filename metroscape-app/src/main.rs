use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use metroscape_core::{
    dashboard::{ChartKind, Dashboard},
    Validation,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod console;
mod plotting;
mod workflow;

#[derive(Debug, Parser)]
#[command(name = "metroscape", version, about = "Environmental dashboard models, reports and exports")]
struct Cli {
    /// Dashboard YAML file (defaults to data/dashboard.yaml, then the built-in sample city).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject inputs outside the documented model ranges instead of computing with them.
    #[arg(long, global = true)]
    strict: bool,

    #[command(flatten)]
    sliders: config::SliderArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every dashboard panel for the current inputs.
    Report {
        /// Emit the derived metrics as JSON instead.
        #[arg(long)]
        json: bool,
        /// Include the numbers behind each chart.
        #[arg(long)]
        series: bool,
    },
    /// Write one of the two-column CSV reports.
    ExportCsv {
        #[arg(long, value_enum)]
        kind: CsvKind,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Render PNG snapshots of the charts.
    Charts {
        /// Only render these charts (repeatable).
        #[arg(long = "chart", value_enum)]
        charts: Vec<ChartArg>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Write hotspot markers and the NDVI overlay as GeoJSON.
    Markers {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the effective dashboard configuration as YAML.
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CsvKind {
    Indexes,
    Waste,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartArg {
    Insights,
    Green,
    Water,
    Mobility,
    Waste,
    Sustainability,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Insights => ChartKind::Insights,
            ChartArg::Green => ChartKind::GreenCover,
            ChartArg::Water => ChartKind::WaterReservoir,
            ChartArg::Mobility => ChartKind::Mobility,
            ChartArg::Waste => ChartKind::Waste,
            ChartArg::Sustainability => ChartKind::SustainabilityGauge,
        }
    }
}

/// Creates the requested output directory, or a fresh timestamped run directory.
fn prepare_output_dir(out_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = out_dir.unwrap_or_else(|| {
        PathBuf::from(format!(
            "./data/runs/metroscape_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ))
    });
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(dir)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let validation = if cli.strict {
        Validation::Strict
    } else {
        Validation::Lenient
    };

    let mut dashboard_config = config::load(cli.config.as_deref())?;
    cli.sliders.apply(&mut dashboard_config)?;
    let mut dashboard = Dashboard::new(dashboard_config, validation)?;

    match cli.command {
        Command::Report { json: true, .. } => workflow::run_json_report(&dashboard)?,
        Command::Report { json: false, series } => workflow::run_report(&mut dashboard, series)?,
        Command::ExportCsv { kind, out_dir } => {
            let dir = prepare_output_dir(out_dir)?;
            let report = match kind {
                CsvKind::Indexes => workflow::CsvReport::Indexes,
                CsvKind::Waste => workflow::CsvReport::Waste,
            };
            workflow::run_export_csv(&dashboard, &dir, report)?;
        }
        Command::Charts { charts, out_dir } => {
            let dir = prepare_output_dir(out_dir)?;
            let targets: Vec<ChartKind> = charts.into_iter().map(ChartKind::from).collect();
            workflow::run_charts(&mut dashboard, &dir, &targets)?;
        }
        Command::Markers { out_dir } => {
            let dir = prepare_output_dir(out_dir)?;
            workflow::run_markers(&dashboard, &dir)?;
        }
        Command::Config => print!("{}", config::to_yaml(&dashboard)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_sliders_accept_negative_values() {
        let cli = Cli::try_parse_from([
            "metroscape",
            "--temp",
            "-0.5",
            "--rainfall",
            "-10",
            "--pop-growth",
            "-150",
            "--economic-index",
            "-1",
            "config",
        ])
        .unwrap();
        assert_eq!(cli.sliders.temp, Some(-0.5));
        assert_eq!(cli.sliders.rainfall, Some(-10));
        assert_eq!(cli.sliders.pop_growth, Some(-150.0));
        assert_eq!(cli.sliders.economic_index, Some(-1.0));
        assert!(matches!(cli.command, Command::Config));
    }
}
