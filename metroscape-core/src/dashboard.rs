use crate::{
    analysis::{
        climate::{assess_climate_risk, assess_infrastructure, ClimateRisk},
        index::{compare_index, IndexComparison},
        mobility::{estimate_air_quality, replace_latest},
        resources::{analyze_green_cover, analyze_water_reservoir},
        sustainability::{calculate_sustainability, SustainabilityInputs, SustainabilityScore},
    },
    config::{validate_dataset, DashboardConfig},
    error::{MetroscapeError, Result},
    simulation::{simulate_waste, WasteOutcome},
    validation::Validation,
};
use metroscape_schemas::{
    dataset::DashboardDataset,
    index::IndexName,
    inputs::{InfrastructureCategory, SliderInputs, WasteInputs},
    status::Classification,
};
use serde::Serialize;

/// Charts a view can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Insights,
    GreenCover,
    WaterReservoir,
    Mobility,
    Waste,
    SustainabilityGauge,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Insights,
        ChartKind::GreenCover,
        ChartKind::WaterReservoir,
        ChartKind::Mobility,
        ChartKind::Waste,
        ChartKind::SustainabilityGauge,
    ];

    /// Base name used for image snapshots.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::Insights => "city_indexes",
            ChartKind::GreenCover => "green_cover",
            ChartKind::WaterReservoir => "water_reservoirs",
            ChartKind::Mobility => "mobility_air_quality",
            ChartKind::Waste => "waste_chart",
            ChartKind::SustainabilityGauge => "sustainability_gauge",
        }
    }
}

/// Text panels a view can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    IndexAnalysis,
    Sustainability,
    Climate,
    Infrastructure,
    GreenCover,
    WaterReservoir,
    Landfill,
    WasteDiversion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Output side of the dashboard: charts, status panels and progress bars.
///
/// Implementations own whatever chart or widget handles they need. A view that
/// has no target for a chart or panel should return `Ok(())` and skip it.
pub trait DashboardView {
    type Error: From<MetroscapeError>;

    fn render_series(
        &mut self,
        chart: ChartKind,
        labels: &[String],
        series: &[NamedSeries],
    ) -> std::result::Result<(), Self::Error>;

    fn render_status(
        &mut self,
        panel: Panel,
        status: &Classification,
    ) -> std::result::Result<(), Self::Error>;

    fn render_text(&mut self, panel: Panel, text: &str) -> std::result::Result<(), Self::Error>;

    fn render_progress(
        &mut self,
        panel: Panel,
        percent: f64,
        color: &str,
    ) -> std::result::Result<(), Self::Error>;
}

/// A change to one of the dashboard controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// First render: every panel is drawn.
    Initialize,
    IndexSelected(IndexName),
    TemperatureChanged(f64),
    RainfallChanged(i32),
    InfrastructureChanged(InfrastructureCategory),
    TrafficChanged(u32),
    EvAdoptionChanged(u32),
    PopulationGrowthChanged(f64),
    EconomicIndexChanged(f64),
    PolicyEffectivenessChanged(u32),
    LandfillCostChanged(u32),
}

/// Every derived metric for the current inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub index: IndexComparison,
    pub sustainability: SustainabilityScore,
    pub climate: ClimateRisk,
    pub infrastructure: Classification,
    pub air_quality_estimate: f64,
    pub mobility_series: Vec<f64>,
    pub green_cover: Classification,
    pub water_reservoir: Classification,
    pub waste: WasteOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Section {
    Insights,
    Climate,
    Infrastructure,
    Mobility,
    Resources,
    Sustainability,
    Waste,
}

impl InputEvent {
    fn sections(&self) -> &'static [Section] {
        use Section::*;
        match self {
            InputEvent::Initialize => &[
                Insights,
                Climate,
                Infrastructure,
                Mobility,
                Resources,
                Sustainability,
                Waste,
            ],
            InputEvent::IndexSelected(_) => &[Insights],
            InputEvent::TemperatureChanged(_) | InputEvent::RainfallChanged(_) => {
                &[Climate, Infrastructure, Sustainability]
            }
            InputEvent::InfrastructureChanged(_) => &[Infrastructure],
            InputEvent::TrafficChanged(_) | InputEvent::EvAdoptionChanged(_) => {
                &[Mobility, Sustainability]
            }
            InputEvent::PopulationGrowthChanged(_)
            | InputEvent::EconomicIndexChanged(_)
            | InputEvent::PolicyEffectivenessChanged(_)
            | InputEvent::LandfillCostChanged(_) => &[Waste, Sustainability],
        }
    }
}

/// Holds the static dataset and the live control values, and recomputes
/// whatever an input event affects.
pub struct Dashboard {
    dataset: DashboardDataset,
    inputs: SliderInputs,
    selected_index: IndexName,
    validation: Validation,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, validation: Validation) -> Result<Self> {
        validate_dataset(&config.dataset)?;
        Ok(Self {
            dataset: config.dataset,
            inputs: config.inputs,
            selected_index: config.selected_index.unwrap_or(IndexName::Air),
            validation,
        })
    }

    pub fn dataset(&self) -> &DashboardDataset {
        &self.dataset
    }

    pub fn inputs(&self) -> &SliderInputs {
        &self.inputs
    }

    pub fn selected_index(&self) -> IndexName {
        self.selected_index
    }

    /// Records the new control value, then re-renders the sections it feeds.
    pub fn apply<V: DashboardView>(
        &mut self,
        event: InputEvent,
        view: &mut V,
    ) -> std::result::Result<(), V::Error> {
        self.update_inputs(event);
        tracing::debug!(?event, "dashboard input");

        for section in event.sections() {
            match section {
                Section::Insights => self.render_insights(view)?,
                Section::Climate => self.render_climate(view)?,
                Section::Infrastructure => self.render_infrastructure(view)?,
                Section::Mobility => self.render_mobility(view)?,
                Section::Resources => self.render_resources(view)?,
                Section::Sustainability => self.render_sustainability(view)?,
                Section::Waste => self.render_waste(view)?,
            }
        }
        Ok(())
    }

    fn update_inputs(&mut self, event: InputEvent) {
        let inputs = &mut self.inputs;
        match event {
            InputEvent::Initialize => {}
            InputEvent::IndexSelected(name) => self.selected_index = name,
            InputEvent::TemperatureChanged(v) => inputs.temperature_anomaly_c = v,
            InputEvent::RainfallChanged(v) => inputs.rainfall_increase_pct = v,
            InputEvent::InfrastructureChanged(v) => inputs.infrastructure = v,
            InputEvent::TrafficChanged(v) => inputs.traffic_density_pct = v,
            InputEvent::EvAdoptionChanged(v) => inputs.ev_adoption_pct = v,
            InputEvent::PopulationGrowthChanged(v) => inputs.population_growth_pct = v,
            InputEvent::EconomicIndexChanged(v) => inputs.economic_index = v,
            InputEvent::PolicyEffectivenessChanged(v) => inputs.policy_effectiveness_pct = v,
            InputEvent::LandfillCostChanged(v) => inputs.landfill_cost_usd_per_ton = v,
        }
    }

    /// Computes every derived metric without touching a view.
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        let (air_quality_estimate, mobility_series) = self.mobility()?;
        Ok(DashboardSnapshot {
            index: compare_index(self.selected_index, &self.dataset.indices)?,
            sustainability: self.sustainability()?,
            climate: assess_climate_risk(
                self.inputs.temperature_anomaly_c,
                self.inputs.rainfall_increase_pct,
            ),
            infrastructure: assess_infrastructure(
                self.inputs.infrastructure,
                self.inputs.temperature_anomaly_c,
                self.inputs.rainfall_increase_pct,
            ),
            air_quality_estimate,
            mobility_series,
            green_cover: analyze_green_cover(&self.dataset.ndvi)?,
            water_reservoir: analyze_water_reservoir(&self.dataset.water_reservoir)?,
            waste: self.waste()?,
        })
    }

    pub fn waste_inputs(&self) -> WasteInputs {
        WasteInputs::from(&self.inputs)
    }

    pub fn waste(&self) -> Result<WasteOutcome> {
        simulate_waste(&self.dataset.waste, self.waste_inputs(), self.validation)
    }

    fn sustainability(&self) -> Result<SustainabilityScore> {
        let inputs = SustainabilityInputs::from_dataset(&self.dataset)?;
        calculate_sustainability(&inputs, self.validation)
    }

    /// Baseline history with the current month replaced by the model estimate.
    fn mobility(&self) -> Result<(f64, Vec<f64>)> {
        let estimate = estimate_air_quality(
            self.inputs.traffic_density_pct,
            self.inputs.ev_adoption_pct,
            self.validation,
        )?;
        let mut series = self.dataset.mobility_baseline.clone();
        replace_latest(&mut series, estimate)?;
        Ok((estimate, series))
    }

    fn render_insights<V: DashboardView>(&self, view: &mut V) -> std::result::Result<(), V::Error> {
        let name = self.selected_index;
        let series = self.dataset.indices.get(name);
        let comparison = compare_index(name, &self.dataset.indices)?;
        view.render_series(
            ChartKind::Insights,
            &self.dataset.months,
            &[
                NamedSeries::new("Actual Index", series.actual.clone()),
                NamedSeries::new("Ideal Index", series.ideal.clone()),
            ],
        )?;
        view.render_status(Panel::IndexAnalysis, &comparison.classification)
    }

    fn render_climate<V: DashboardView>(&self, view: &mut V) -> std::result::Result<(), V::Error> {
        let risk = assess_climate_risk(
            self.inputs.temperature_anomaly_c,
            self.inputs.rainfall_increase_pct,
        );
        view.render_status(Panel::Climate, &risk.classification)
    }

    fn render_infrastructure<V: DashboardView>(
        &self,
        view: &mut V,
    ) -> std::result::Result<(), V::Error> {
        let verdict = assess_infrastructure(
            self.inputs.infrastructure,
            self.inputs.temperature_anomaly_c,
            self.inputs.rainfall_increase_pct,
        );
        view.render_status(Panel::Infrastructure, &verdict)
    }

    fn render_mobility<V: DashboardView>(&self, view: &mut V) -> std::result::Result<(), V::Error> {
        let (_, series) = self.mobility()?;
        view.render_series(
            ChartKind::Mobility,
            &self.dataset.months,
            &[NamedSeries::new("Air Quality (µg/m³)", series)],
        )
    }

    fn render_resources<V: DashboardView>(&self, view: &mut V) -> std::result::Result<(), V::Error> {
        view.render_series(
            ChartKind::GreenCover,
            &self.dataset.months,
            &[NamedSeries::new("NDVI (Green Cover)", self.dataset.ndvi.clone())],
        )?;
        view.render_status(Panel::GreenCover, &analyze_green_cover(&self.dataset.ndvi)?)?;
        view.render_series(
            ChartKind::WaterReservoir,
            &self.dataset.months,
            &[NamedSeries::new(
                "Reservoir Level (%)",
                self.dataset.water_reservoir.clone(),
            )],
        )?;
        view.render_status(
            Panel::WaterReservoir,
            &analyze_water_reservoir(&self.dataset.water_reservoir)?,
        )
    }

    fn render_sustainability<V: DashboardView>(
        &self,
        view: &mut V,
    ) -> std::result::Result<(), V::Error> {
        let score = self.sustainability()?;
        let [value, remaining] = score.gauge();
        view.render_series(
            ChartKind::SustainabilityGauge,
            &["Score".to_string(), "Remaining".to_string()],
            &[NamedSeries::new("Sustainability", vec![value, remaining])],
        )?;
        view.render_text(Panel::Sustainability, &score.display_text())
    }

    fn render_waste<V: DashboardView>(&self, view: &mut V) -> std::result::Result<(), V::Error> {
        let outcome = self.waste()?;
        let (disposed, diversion) = outcome.monthly_series(self.dataset.months.len());
        view.render_series(
            ChartKind::Waste,
            &self.dataset.months,
            &[
                NamedSeries::new("Waste Disposed (tons / month)", disposed),
                NamedSeries::new("Total Diversion (%)", diversion),
            ],
        )?;
        view.render_progress(Panel::Landfill, outcome.lifespan_bar_percent, outcome.bar_color())?;
        view.render_text(Panel::Landfill, &outcome.lifespan.to_string())?;
        view.render_status(Panel::Landfill, &outcome.lifespan_status)?;
        view.render_status(Panel::WasteDiversion, &outcome.diversion_status)
    }
}
