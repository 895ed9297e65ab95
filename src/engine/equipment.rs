//! Court equipment pricing: quantity × catalog unit price.

use std::collections::BTreeMap;

use crate::domain::{
    BasketballSystemKind, CostCategory, EquipmentPrices, EquipmentSelection, LineItem, Unit,
};

pub fn equipment_costs(selection: &EquipmentSelection, prices: &EquipmentPrices) -> CostCategory {
    let fixed = [
        LineItem::priced(
            "tennis_post_sets",
            "Tennis post sets",
            selection.tennis_post_sets as f64,
            Unit::Each,
            prices.tennis_post_set,
        ),
        LineItem::priced(
            "pickleball_post_sets",
            "Pickleball post sets",
            selection.pickleball_post_sets as f64,
            Unit::Each,
            prices.pickleball_post_set,
        ),
        LineItem::priced(
            "mobile_nets",
            "Mobile nets",
            selection.mobile_nets as f64,
            Unit::Each,
            prices.mobile_net,
        ),
        LineItem::priced(
            "windscreen_low_grade",
            "Windscreen (low grade)",
            selection.windscreen_low_grade_feet,
            Unit::LinearFoot,
            prices.windscreen_low_grade,
        ),
        LineItem::priced(
            "windscreen_high_grade",
            "Windscreen (high grade)",
            selection.windscreen_high_grade_feet,
            Unit::LinearFoot,
            prices.windscreen_high_grade,
        ),
    ];

    // The form may list the same system kind more than once.
    let mut systems: BTreeMap<BasketballSystemKind, u32> = BTreeMap::new();
    for order in &selection.basketball_systems {
        let count = systems.entry(order.kind).or_default();
        *count = count.saturating_add(order.quantity);
    }

    let basketball = systems.into_iter().map(|(kind, quantity)| {
        let key = match kind {
            BasketballSystemKind::Adjustable60 => "basketball_adjustable_60",
            BasketballSystemKind::Adjustable72 => "basketball_adjustable_72",
            BasketballSystemKind::FixedHeight => "basketball_fixed_height",
        };
        LineItem::priced(
            key,
            kind.label(),
            quantity as f64,
            Unit::Each,
            prices.basketball_system(kind),
        )
    });

    CostCategory::from_items(fixed.into_iter().chain(basketball))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BasketballSystemOrder;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn prices() -> EquipmentPrices {
        EquipmentPrices {
            tennis_post_set: dec!(850),
            pickleball_post_set: dec!(400),
            mobile_net: dec!(275),
            windscreen_low_grade: dec!(4.25),
            windscreen_high_grade: dec!(6.75),
            basketball_adjustable_60: dec!(2800),
            basketball_adjustable_72: dec!(3900),
            basketball_fixed_height: dec!(1650),
        }
    }

    #[test]
    fn test_quantity_times_unit_price() {
        let selection = EquipmentSelection {
            tennis_post_sets: 2,
            pickleball_post_sets: 1,
            mobile_nets: 3,
            windscreen_low_grade_feet: 120.0,
            windscreen_high_grade_feet: 60.0,
            basketball_systems: Vec::new(),
        };

        let costs = equipment_costs(&selection, &prices());
        assert_eq!(costs.cost_of("tennis_post_sets"), dec!(1700));
        assert_eq!(costs.cost_of("pickleball_post_sets"), dec!(400));
        assert_eq!(costs.cost_of("mobile_nets"), dec!(825));
        assert_eq!(costs.cost_of("windscreen_low_grade"), dec!(510));
        assert_eq!(costs.cost_of("windscreen_high_grade"), dec!(405));
        assert_eq!(costs.total, dec!(3840));
    }

    #[test]
    fn test_basketball_systems_priced_per_unit_by_kind() {
        let selection = EquipmentSelection {
            basketball_systems: vec![
                BasketballSystemOrder {
                    kind: BasketballSystemKind::Adjustable72,
                    quantity: 1,
                },
                BasketballSystemOrder {
                    kind: BasketballSystemKind::FixedHeight,
                    quantity: 2,
                },
                BasketballSystemOrder {
                    kind: BasketballSystemKind::Adjustable72,
                    quantity: 1,
                },
            ],
            ..Default::default()
        };

        let costs = equipment_costs(&selection, &prices());
        assert_eq!(costs.items.len(), 2);
        assert_eq!(costs.item("basketball_adjustable_72").map(|i| i.quantity), Some(2.0));
        assert_eq!(costs.cost_of("basketball_adjustable_72"), dec!(7800));
        assert_eq!(costs.cost_of("basketball_fixed_height"), dec!(3300));
        assert_eq!(costs.total, dec!(11100));
    }

    #[test]
    fn test_missing_prices_default_to_zero() {
        let selection = EquipmentSelection {
            tennis_post_sets: 2,
            ..Default::default()
        };
        let costs = equipment_costs(&selection, &EquipmentPrices::default());
        assert_eq!(costs.items.len(), 1);
        assert_eq!(costs.total, Decimal::ZERO);
    }

    #[test]
    fn test_nothing_selected_is_empty() {
        let costs = equipment_costs(&EquipmentSelection::default(), &prices());
        assert!(costs.items.is_empty());
        assert_eq!(costs.total, Decimal::ZERO);
    }
}
