//! Pricing catalog supplied by the pricing-configuration service.
//!
//! Every price is optional on the wire; anything missing or unreadable
//! prices at zero so a partially configured catalog still produces a quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::configuration::{BasketballCourtType, BasketballSystemKind};
use super::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingCatalog {
    #[serde(deserialize_with = "lenient::or_default")]
    pub materials: MaterialPrices,
    #[serde(deserialize_with = "lenient::or_default")]
    pub services: ServiceRates,
    #[serde(deserialize_with = "lenient::or_default")]
    pub equipment: EquipmentPrices,
}

/// Unit prices for consumables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialPrices {
    /// Patch binder, per gallon
    #[serde(deserialize_with = "lenient::price")]
    pub binder: Decimal,
    /// 50 lb bag
    #[serde(deserialize_with = "lenient::price")]
    pub sand: Decimal,
    /// 48-quart unit
    #[serde(deserialize_with = "lenient::price")]
    pub cement: Decimal,
    /// Per gallon; purchased by the drum
    #[serde(deserialize_with = "lenient::price")]
    pub resurfacer: Decimal,
    /// Per gallon; purchased by the drum
    #[serde(deserialize_with = "lenient::price")]
    pub color_coat: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub crack_filler: Decimal,
    /// Per roll
    #[serde(deserialize_with = "lenient::price")]
    pub fiberglass_mesh: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub fiberglass_primer: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub cushion_base_coat: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub cushion_finish_coat: Decimal,
}

/// Per-square-foot, per-court and hourly service rates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceRates {
    #[serde(deserialize_with = "lenient::price")]
    pub pressure_wash: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub acid_wash: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub tennis_lines: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub pickleball_lines: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub basketball_half_court_lines: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub basketball_full_court_lines: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub labor_rate: Decimal,
    /// Per mile driven; no built-in default
    #[serde(deserialize_with = "lenient::price")]
    pub mileage_rate: Decimal,
}

impl ServiceRates {
    pub fn basketball_lines(&self, court_type: BasketballCourtType) -> Decimal {
        match court_type {
            BasketballCourtType::Half => self.basketball_half_court_lines,
            BasketballCourtType::Full => self.basketball_full_court_lines,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentPrices {
    #[serde(deserialize_with = "lenient::price")]
    pub tennis_post_set: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub pickleball_post_set: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub mobile_net: Decimal,
    /// Per linear foot
    #[serde(deserialize_with = "lenient::price")]
    pub windscreen_low_grade: Decimal,
    /// Per linear foot
    #[serde(deserialize_with = "lenient::price")]
    pub windscreen_high_grade: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub basketball_adjustable_60: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub basketball_adjustable_72: Decimal,
    #[serde(deserialize_with = "lenient::price")]
    pub basketball_fixed_height: Decimal,
}

impl EquipmentPrices {
    pub fn basketball_system(&self, kind: BasketballSystemKind) -> Decimal {
        match kind {
            BasketballSystemKind::Adjustable60 => self.basketball_adjustable_60,
            BasketballSystemKind::Adjustable72 => self.basketball_adjustable_72,
            BasketballSystemKind::FixedHeight => self.basketball_fixed_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_and_bad_prices_are_zero() {
        let catalog: PricingCatalog = serde_json::from_value(serde_json::json!({
            "materials": { "colorCoat": 8.5, "sand": "n/a", "binder": -3 },
            "services": { "mileageRate": "0.63" }
        }))
        .unwrap();

        assert_eq!(catalog.materials.color_coat, dec!(8.5));
        assert_eq!(catalog.materials.sand, Decimal::ZERO);
        assert_eq!(catalog.materials.binder, Decimal::ZERO);
        assert_eq!(catalog.materials.resurfacer, Decimal::ZERO);
        assert_eq!(catalog.services.mileage_rate, dec!(0.63));
        assert_eq!(catalog.equipment, EquipmentPrices::default());
    }

    #[test]
    fn test_rate_lookups_by_kind() {
        let services = ServiceRates {
            basketball_half_court_lines: dec!(350),
            basketball_full_court_lines: dec!(600),
            ..Default::default()
        };
        assert_eq!(services.basketball_lines(BasketballCourtType::Half), dec!(350));
        assert_eq!(services.basketball_lines(BasketballCourtType::Full), dec!(600));

        let equipment = EquipmentPrices {
            basketball_adjustable_72: dec!(4200),
            ..Default::default()
        };
        assert_eq!(
            equipment.basketball_system(BasketballSystemKind::Adjustable72),
            dec!(4200)
        );
        assert_eq!(
            equipment.basketball_system(BasketballSystemKind::FixedHeight),
            Decimal::ZERO
        );
    }
}
