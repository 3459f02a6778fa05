use serde::{Deserialize, Serialize};

/// Price of offsetting one kg of CO₂e, in dollars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OffsetPricing {
    /// $15 per metric ton
    pub price_per_kg: f64,
}

impl Default for OffsetPricing {
    fn default() -> Self {
        OffsetPricing { price_per_kg: 0.015 }
    }
}

/// Returns the cost in dollars of offsetting `co2e_kg`. Pure and total;
/// callers recompute it on every edit of the amount field.
pub fn offset_cost(co2e_kg: f64, pricing: &OffsetPricing) -> f64 {
    co2e_kg * pricing.price_per_kg
}

/// Renders a dollar amount with two decimal places, e.g. `"15.00"`.
pub fn format_cost(dollars: f64) -> String {
    format!("{dollars:.2}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_ton_costs_fifteen_dollars() {
        let pricing = OffsetPricing::default();
        assert_eq!(format_cost(offset_cost(1000.0, &pricing)), "15.00");
    }

    #[test]
    fn zero_amount_costs_nothing() {
        let pricing = OffsetPricing::default();
        assert_eq!(format_cost(offset_cost(0.0, &pricing)), "0.00");
    }

    #[test]
    fn fractional_amounts_round_to_cents() {
        let pricing = OffsetPricing::default();
        assert_eq!(format_cost(offset_cost(728.0, &pricing)), "10.92");
    }
}
