use serde::{Deserialize, Serialize};

use crate::comparisons::{comparisons, Comparison, ComparisonFactors};
use crate::emissions::{estimate_co2e, CabinClass, EmissionFactors};

/// Renders a mass in kg for display: a metric ton or more is shown in tons
/// to one decimal place, anything smaller as whole kg.
pub fn format_mass(kg: f64) -> String {
    if kg >= 1000.0 {
        format!("{:.1} metric tons", kg / 1000.0)
    } else {
        format!("{} kg", kg.round() as i64)
    }
}

/// Everything a presentation layer needs to render one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub passengers: u32,
    /// display string of the total, e.g. `"1.5 metric tons"`
    pub total: String,
    /// display string of the per-passenger share
    pub per_passenger: String,
    /// distance rounded to the km
    pub distance_km: i64,
    pub comparisons: Vec<Comparison>,
}

/// Computes the full result of one calculation: total and per-passenger
/// CO₂e display strings, the rounded distance and the equivalence list.
/// The total and per-passenger figures are each formatted against their own
/// metric-ton threshold. Pure; identical inputs yield identical summaries.
pub fn summarize(
    distance_km: f64,
    class: CabinClass,
    passengers: u32,
    factors: &EmissionFactors,
    comparison_factors: &ComparisonFactors,
) -> Summary {
    let total = estimate_co2e(distance_km, class, passengers, factors);
    Summary {
        passengers,
        total: format_mass(total),
        per_passenger: format_mass(total / passengers as f64),
        distance_km: distance_km.round() as i64,
        comparisons: comparisons(total, comparison_factors),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn masses_below_a_ton_render_in_kg() {
        assert_eq!(format_mass(999.0), "999 kg");
        assert_eq!(format_mass(728.0), "728 kg");
        assert_eq!(format_mass(0.4), "0 kg");
    }

    #[test]
    fn masses_of_a_ton_or_more_render_in_tons() {
        assert_eq!(format_mass(1000.0), "1.0 metric tons");
        assert_eq!(format_mass(2549.0), "2.5 metric tons");
        assert_eq!(format_mass(13000.0 * 0.4), "5.2 metric tons");
    }

    #[test]
    fn business_trip_for_two() {
        let summary = summarize(
            2800.0,
            CabinClass::Business,
            2,
            &EmissionFactors::default(),
            &ComparisonFactors::default(),
        );
        assert_eq!(summary.total, "1.5 metric tons");
        assert_eq!(summary.per_passenger, "728 kg");
        assert_eq!(summary.distance_km, 2800);
        assert_eq!(summary.comparisons.len(), 4);
    }

    #[test]
    fn thresholds_apply_independently() {
        // total crosses a ton, the per-passenger share does not
        let summary = summarize(
            5550.0,
            CabinClass::Economy,
            3,
            &EmissionFactors::default(),
            &ComparisonFactors::default(),
        );
        assert_eq!(summary.total, "1.5 metric tons");
        assert_eq!(summary.per_passenger, "500 kg");
    }
}
