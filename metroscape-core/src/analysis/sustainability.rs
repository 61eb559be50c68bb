use crate::{
    error::Result,
    validation::{latest, latest_pair, Validation},
};
use metroscape_schemas::{dataset::DashboardDataset, index::IndexName};
use serde::Serialize;
use std::fmt;

/// Latest readings that feed the composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SustainabilityInputs {
    pub air: f64,
    pub water: f64,
    pub noise: f64,
    pub human: f64,
    /// Green cover fraction, 0-1.
    pub green_cover: f64,
    /// Reservoir level, 0-100.
    pub water_reservoir: f64,
}

impl SustainabilityInputs {
    pub fn from_dataset(dataset: &DashboardDataset) -> Result<Self> {
        let reading = |name| latest_pair(name, dataset.indices.get(name)).map(|(actual, _)| actual);
        Ok(Self {
            air: reading(IndexName::Air)?,
            water: reading(IndexName::Water)?,
            noise: reading(IndexName::Noise)?,
            human: reading(IndexName::Human)?,
            green_cover: latest("ndvi", &dataset.ndvi)?,
            water_reservoir: latest("water_reservoir", &dataset.water_reservoir)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SustainabilityBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl SustainabilityBand {
    /// Strict thresholds; a score sitting on a boundary falls into the lower band.
    pub fn from_score(score: i64) -> Self {
        if score > 80 {
            SustainabilityBand::Excellent
        } else if score > 60 {
            SustainabilityBand::Good
        } else if score > 40 {
            SustainabilityBand::Average
        } else {
            SustainabilityBand::Poor
        }
    }
}

impl fmt::Display for SustainabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SustainabilityBand::Excellent => "Excellent",
            SustainabilityBand::Good => "Good",
            SustainabilityBand::Average => "Average",
            SustainabilityBand::Poor => "Poor",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SustainabilityScore {
    pub score: i64,
    pub band: SustainabilityBand,
}

impl SustainabilityScore {
    pub fn display_text(&self) -> String {
        format!("{} — {}", self.score, self.band)
    }

    /// Gauge segments: the score and what remains to 100.
    pub fn gauge(&self) -> [f64; 2] {
        [self.score as f64, (100 - self.score) as f64]
    }
}

/// Pollutant indices live on a 0-10 scale where lower is better.
fn pollutant_sub_score(value: f64) -> f64 {
    (100.0 - value * 10.0).max(0.0)
}

pub fn calculate_sustainability(
    inputs: &SustainabilityInputs,
    validation: Validation,
) -> Result<SustainabilityScore> {
    validation.check_range("air", inputs.air, 0.0, 10.0, "0-10")?;
    validation.check_range("water", inputs.water, 0.0, 10.0, "0-10")?;
    validation.check_range("noise", inputs.noise, 0.0, 10.0, "0-10")?;
    validation.check_range("human", inputs.human, 0.0, 100.0, "0-100")?;
    validation.check_range("green_cover", inputs.green_cover, 0.0, 1.0, "0-1")?;
    validation.check_range("water_reservoir", inputs.water_reservoir, 0.0, 100.0, "0-100")?;

    let sub_scores = [
        pollutant_sub_score(inputs.air),
        pollutant_sub_score(inputs.water),
        pollutant_sub_score(inputs.noise),
        inputs.human,
        inputs.green_cover * 100.0,
        inputs.water_reservoir,
    ];
    let mean = sub_scores.iter().sum::<f64>() / sub_scores.len() as f64;
    let score = mean.round() as i64;
    tracing::debug!(score, "sustainability score recomputed");

    Ok(SustainabilityScore {
        score,
        band: SustainabilityBand::from_score(score),
    })
}
