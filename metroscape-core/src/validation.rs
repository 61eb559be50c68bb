use crate::error::{MetroscapeError, Result};
use metroscape_schemas::index::{IndexName, IndexSeries};

/// How models treat inputs outside their documented domain.
///
/// `Lenient` reproduces the unclamped arithmetic of the dashboard, which can
/// yield scores above 100 or negative landfill tonnage for extreme inputs.
/// `Strict` rejects those inputs with [`MetroscapeError::OutOfDomain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Lenient,
    Strict,
}

impl Validation {
    pub fn is_strict(&self) -> bool {
        matches!(self, Validation::Strict)
    }

    /// Checks `min <= value <= max` in strict mode; always passes in lenient mode.
    pub fn check_range(
        &self,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
        range: &'static str,
    ) -> Result<()> {
        if self.is_strict() && !(min..=max).contains(&value) {
            return Err(MetroscapeError::OutOfDomain { field, value, range });
        }
        Ok(())
    }
}

/// Last sample of a non-empty series.
pub fn latest(name: &str, series: &[f64]) -> Result<f64> {
    series
        .last()
        .copied()
        .ok_or_else(|| MetroscapeError::EmptySeries(name.to_string()))
}

/// Validates an index series and returns its last (actual, ideal) pair.
pub fn latest_pair(name: IndexName, series: &IndexSeries) -> Result<(f64, f64)> {
    if series.actual.len() != series.ideal.len() {
        return Err(MetroscapeError::SeriesLengthMismatch {
            name: name.to_string(),
            actual: series.actual.len(),
            ideal: series.ideal.len(),
        });
    }
    let actual = latest(name.as_str(), &series.actual)?;
    let ideal = latest(name.as_str(), &series.ideal)?;
    Ok((actual, ideal))
}
