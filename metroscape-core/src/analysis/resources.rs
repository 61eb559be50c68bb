//! Green cover and water reservoir health.

use crate::{error::Result, validation::latest};
use metroscape_schemas::status::{Classification, Tier};

pub fn analyze_green_cover(ndvi: &[f64]) -> Result<Classification> {
    let last = latest("ndvi", ndvi)?;
    Ok(if last > 0.5 {
        Classification::new(
            Tier::Good,
            "Healthy green cover",
            "Green cover is healthy. This helps regulate heat and reduce flooding risk.",
        )
    } else {
        Classification::new(
            Tier::Warning,
            "Green cover below ideal",
            "Green cover is below ideal. Prioritize reforestation and urban parks to improve \
             climate resilience.",
        )
    })
}

pub fn analyze_water_reservoir(levels: &[f64]) -> Result<Classification> {
    let last = latest("water_reservoir", levels)?;
    Ok(if last > 60.0 {
        Classification::new(
            Tier::Good,
            "Stable water levels",
            "Water levels are stable. The city has a good supply, but conservation is key.",
        )
    } else if last < 40.0 {
        Classification::new(
            Tier::Critical,
            "Low water levels",
            "Water levels are low. The city is facing water stress. Implement conservation measures.",
        )
    } else {
        Classification::new(
            Tier::Warning,
            "Declining water levels",
            "Water levels are declining. A medium risk of water scarcity exists.",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_cover_threshold_is_exclusive() {
        assert_eq!(analyze_green_cover(&[0.4, 0.55]).unwrap().tier, Tier::Good);
        assert_eq!(analyze_green_cover(&[0.5]).unwrap().tier, Tier::Warning);
        assert!(analyze_green_cover(&[]).is_err());
    }

    #[test]
    fn reservoir_bands() {
        assert_eq!(analyze_water_reservoir(&[70.0]).unwrap().tier, Tier::Good);
        assert_eq!(analyze_water_reservoir(&[60.0]).unwrap().tier, Tier::Warning);
        assert_eq!(analyze_water_reservoir(&[40.0]).unwrap().tier, Tier::Warning);
        assert_eq!(analyze_water_reservoir(&[39.9]).unwrap().tier, Tier::Critical);
    }
}
