use serde::{Deserialize, Serialize};

/// Cabin class of a commercial flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    Premium,
    Business,
    First,
}

impl CabinClass {
    /// Parses a class identifier. Unrecognized identifiers fall back to
    /// [`CabinClass::Economy`]; the permissive default is part of the contract.
    pub fn parse(identifier: &str) -> Self {
        match identifier {
            "premium" => Self::Premium,
            "business" => Self::Business,
            "first" => Self::First,
            _ => Self::Economy,
        }
    }
}

/// Emission factors in kg of CO₂e per passenger-km, per cabin class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub economy: f64,
    pub premium: f64,
    pub business: f64,
    pub first: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EmissionFactors {
            economy: 0.09,
            premium: 0.14,
            business: 0.26,
            first: 0.4,
        }
    }
}

impl EmissionFactors {
    pub fn factor(&self, class: CabinClass) -> f64 {
        match class {
            CabinClass::Economy => self.economy,
            CabinClass::Premium => self.premium,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }
}

/// Returns emissions of a flight of `distance_km` in kg of CO₂e for
/// `passengers` passengers travelling in `class`.
pub fn estimate_co2e(
    distance_km: f64,
    class: CabinClass,
    passengers: u32,
    factors: &EmissionFactors,
) -> f64 {
    distance_km * factors.factor(class) * passengers as f64
}
