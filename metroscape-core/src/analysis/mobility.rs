use crate::{
    error::{MetroscapeError, Result},
    validation::Validation,
};

/// Lowest air-quality value the model reports.
pub const AIR_QUALITY_FLOOR: f64 = 10.0;
const BASELINE_AIR_QUALITY: f64 = 150.0;

pub fn estimate_air_quality(
    traffic_density_pct: u32,
    ev_adoption_pct: u32,
    validation: Validation,
) -> Result<f64> {
    validation.check_range("traffic_density", f64::from(traffic_density_pct), 0.0, 100.0, "0-100")?;
    validation.check_range("ev_adoption", f64::from(ev_adoption_pct), 0.0, 100.0, "0-100")?;

    let raw = BASELINE_AIR_QUALITY
        - f64::from(traffic_density_pct) * 0.5
        - f64::from(ev_adoption_pct) * 0.7;
    Ok(raw.round().max(AIR_QUALITY_FLOOR))
}

/// Overwrites the current month with `estimate`. The series length never changes.
pub fn replace_latest(series: &mut [f64], estimate: f64) -> Result<()> {
    let last = series
        .last_mut()
        .ok_or_else(|| MetroscapeError::EmptySeries("mobility".to_string()))?;
    *last = estimate;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sliders() {
        // 150 - 25 - 14
        assert_eq!(estimate_air_quality(50, 20, Validation::Lenient).unwrap(), 111.0);
    }

    #[test]
    fn estimate_never_drops_below_floor() {
        for traffic in (0..=100).step_by(5) {
            for ev in (0..=100).step_by(5) {
                let value = estimate_air_quality(traffic, ev, Validation::Lenient).unwrap();
                assert!(value >= AIR_QUALITY_FLOOR, "traffic={traffic} ev={ev}");
            }
        }
        assert_eq!(estimate_air_quality(100, 100, Validation::Lenient).unwrap(), 30.0);
        assert_eq!(estimate_air_quality(250, 100, Validation::Lenient).unwrap(), 10.0);
    }

    #[test]
    fn strict_rejects_percentages_above_100() {
        assert!(estimate_air_quality(120, 0, Validation::Strict).is_err());
    }

    #[test]
    fn replaces_only_the_last_point() {
        let mut series = vec![120.0, 115.0, 90.0];
        replace_latest(&mut series, 42.0).unwrap();
        assert_eq!(series, vec![120.0, 115.0, 42.0]);

        let mut empty: Vec<f64> = Vec::new();
        assert!(replace_latest(&mut empty, 42.0).is_err());
    }
}
