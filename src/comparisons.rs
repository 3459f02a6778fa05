use serde::{Deserialize, Serialize};

/// Reference quantities used to express an emissions figure in everyday
/// terms, all in kg of CO₂.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComparisonFactors {
    /// released per liter of gasoline burned
    pub gasoline_per_liter: f64,
    /// emitted per km driven by an average car
    pub car_per_km: f64,
    /// emitted by an average car over a year
    pub car_per_year: f64,
    /// absorbed by one tree over a year
    pub tree_per_year: f64,
}

impl Default for ComparisonFactors {
    fn default() -> Self {
        ComparisonFactors {
            gasoline_per_liter: 2.3,
            car_per_km: 0.12,
            car_per_year: 2000.0,
            tree_per_year: 21.77,
        }
    }
}

/// Marker rendered next to a comparison by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    GasPump,
    Car,
    Calendar,
    Tree,
}

impl Icon {
    /// Marker class understood by the stylesheet of the presentation layer
    pub fn class(&self) -> &'static str {
        match self {
            Icon::GasPump => "fa-gas-pump",
            Icon::Car => "fa-car",
            Icon::Calendar => "fa-calendar",
            Icon::Tree => "fa-tree",
        }
    }
}

/// A single "this is equivalent to" line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub icon: Icon,
    pub text: String,
}

// in thousands, rounded to one decimal place
fn thousands(x: f64) -> f64 {
    (x / 100.0).round() / 10.0
}

/// Expresses `co2e_kg` as a fixed-order list of everyday equivalences.
/// Totals of a metric ton or more report gasoline and car distance in
/// thousands and include the car-months item; smaller totals omit it.
pub fn comparisons(co2e_kg: f64, factors: &ComparisonFactors) -> Vec<Comparison> {
    let liters_of_gasoline = co2e_kg / factors.gasoline_per_liter;
    let km_by_car = co2e_kg / factors.car_per_km;
    let car_months = co2e_kg / factors.car_per_year * 12.0;
    let trees_needed = co2e_kg / factors.tree_per_year;

    if co2e_kg >= 1000.0 {
        vec![
            Comparison {
                icon: Icon::GasPump,
                text: format!(
                    "Burning {:.1} thousand liters of gasoline",
                    thousands(liters_of_gasoline)
                ),
            },
            Comparison {
                icon: Icon::Car,
                text: format!(
                    "Driving {:.1} thousand km in an average car",
                    thousands(km_by_car)
                ),
            },
            Comparison {
                icon: Icon::Calendar,
                text: format!(
                    "{} months of an average car's emissions",
                    car_months.round() as i64
                ),
            },
            Comparison {
                icon: Icon::Tree,
                text: format!(
                    "{} trees needed to absorb this CO₂ in one year",
                    trees_needed.round() as i64
                ),
            },
        ]
    } else {
        vec![
            Comparison {
                icon: Icon::GasPump,
                text: format!(
                    "Burning {} liters of gasoline",
                    liters_of_gasoline.round() as i64
                ),
            },
            Comparison {
                icon: Icon::Car,
                text: format!("Driving {} km in an average car", km_by_car.round() as i64),
            },
            Comparison {
                icon: Icon::Tree,
                text: format!(
                    "{} trees needed to absorb this CO₂ in one year",
                    trees_needed.round() as i64
                ),
            },
        ]
    }
}
