use crate::{
    error::{MetroscapeError, Result},
    validation::latest_pair,
};
use metroscape_schemas::{
    index::{IndexHistory, IndexName},
    status::{Classification, Tier},
};
use serde::Serialize;

/// Latest actual vs ideal reading for one index, with its verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexComparison {
    pub name: IndexName,
    pub actual: f64,
    pub ideal: f64,
    pub classification: Classification,
}

pub fn parse_index_name(value: &str) -> Result<IndexName> {
    match value.trim().to_ascii_lowercase().as_str() {
        "air" => Ok(IndexName::Air),
        "water" => Ok(IndexName::Water),
        "noise" => Ok(IndexName::Noise),
        "human" => Ok(IndexName::Human),
        _ => Err(MetroscapeError::UnknownIndex(value.to_string())),
    }
}

pub fn compare_index(name: IndexName, history: &IndexHistory) -> Result<IndexComparison> {
    let (actual, ideal) = latest_pair(name, history.get(name))?;
    Ok(IndexComparison {
        name,
        actual,
        ideal,
        classification: classify_index(name, actual, ideal),
    })
}

/// Pollutant indices warn when above ideal; the health index is critical when below it.
pub fn classify_index(name: IndexName, actual: f64, ideal: f64) -> Classification {
    let off_target = if name.higher_is_worse() {
        actual > ideal
    } else {
        actual < ideal
    };

    match (name, off_target) {
        (IndexName::Air, true) => Classification::new(
            Tier::Warning,
            "Air pollution above ideal",
            "Air pollution is above ideal. Take action to improve air quality.",
        ),
        (IndexName::Water, true) => Classification::new(
            Tier::Warning,
            "Water pollution above ideal",
            "Water pollution exceeds ideal levels. Risk of waterborne diseases.",
        ),
        (IndexName::Noise, true) => Classification::new(
            Tier::Warning,
            "Noise pollution above ideal",
            "Noise pollution is above ideal. Potential for health stress.",
        ),
        (IndexName::Human, true) => Classification::new(
            Tier::Critical,
            "Human health below ideal",
            "Human Health Index is low. Strengthen economy and healthcare.",
        ),
        (IndexName::Human, false) => Classification::new(
            Tier::Good,
            "Human health on target",
            "Human Health Index is healthy.",
        ),
        (other, false) => Classification::new(
            Tier::Good,
            "Within ideal range",
            format!(
                "All good. {} quality is within ideal range.",
                capitalize(other.as_str())
            ),
        ),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
