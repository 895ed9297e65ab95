use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::color::PaintColor;
use super::configuration::SubstrateType;

/// Colored playing surfaces an estimate can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    TennisCourts,
    PickleballKitchen,
    PickleballCourts,
    BasketballCourt,
    Apron,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    SquareFoot,
    Gallon,
    Drum,
    Bag,
    CementUnit,
    Roll,
    Court,
    LinearFoot,
    Each,
    Night,
    Mile,
    Hour,
    Lump,
}

/// One priced line of the estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub key: String,
    pub label: String,
    pub quantity: f64,
    pub unit: Unit,
    pub unit_price: Decimal,
    pub cost: Decimal,
}

impl LineItem {
    /// `quantity × unit_price`; `None` when nothing is being bought.
    ///
    /// Costs too large for a `Decimal` saturate at `Decimal::MAX`.
    pub fn priced(
        key: impl Into<String>,
        label: impl Into<String>,
        quantity: f64,
        unit: Unit,
        unit_price: Decimal,
    ) -> Option<Self> {
        if !(quantity.is_finite() && quantity > 0.0) {
            return None;
        }

        let unit_price = unit_price.max(Decimal::ZERO);
        let quantity_dec = Decimal::from_f64(quantity).unwrap_or(if quantity > 1.0 {
            Decimal::MAX
        } else {
            Decimal::ZERO
        });
        let cost = quantity_dec.saturating_mul(unit_price);

        Some(Self {
            key: key.into(),
            label: label.into(),
            quantity,
            unit,
            unit_price,
            cost,
        })
    }

    /// Flat amount that is not a quantity times a rate.
    pub fn lump_sum(
        key: impl Into<String>,
        label: impl Into<String>,
        amount: Decimal,
    ) -> Option<Self> {
        if amount <= Decimal::ZERO {
            return None;
        }

        Some(Self {
            key: key.into(),
            label: label.into(),
            quantity: 1.0,
            unit: Unit::Lump,
            unit_price: amount,
            cost: amount,
        })
    }
}

/// Sum of amounts, saturating at `Decimal::MAX`
pub fn sum_costs(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

/// A group of line items with their sum
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

impl CostCategory {
    pub fn from_items(items: impl IntoIterator<Item = Option<LineItem>>) -> Self {
        let items: Vec<LineItem> = items.into_iter().flatten().collect();
        let total = sum_costs(items.iter().map(|item| item.cost));
        Self { items, total }
    }

    pub fn item(&self, key: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn cost_of(&self, key: &str) -> Decimal {
        self.item(key).map(|item| item.cost).unwrap_or(Decimal::ZERO)
    }
}

/// Area and paint requirement of one colored surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoredSurface {
    pub surface: Surface,
    pub color: PaintColor,
    pub area: f64,
    pub gallons: u64,
    /// Drums if this surface were bought on its own; the order uses the
    /// per-color totals in the color summary instead.
    pub drums: u64,
}

/// Paint to order for one color, pooled across every surface using it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSummaryEntry {
    pub gallons: u64,
    pub drums: u64,
    pub cost: Decimal,
    pub surfaces: Vec<Surface>,
}

/// Gallons and the drums they are bought in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoatingQuantity {
    pub gallons: u64,
    pub drums: u64,
}

/// Patch binder plus the sand and cement mixed into it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinderMix {
    pub binder_gallons: u32,
    pub sand_bags: u32,
    pub cement_quarts: u32,
    pub cement_units: u32,
}

/// Purchasable quantities, independent of price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOrder {
    pub resurfacer: CoatingQuantity,
    pub color_coat: CoatingQuantity,
    pub patch_mix: BinderMix,
    pub major_crack_mix: BinderMix,
    pub crack_filler_gallons: u32,
    pub mesh_rolls: u32,
    pub mesh_primer_gallons: u32,
    pub cushion_base_gallons: u32,
    pub cushion_finish_gallons: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsSummary {
    pub lodging_nights: u32,
    pub round_trip_miles: f64,
}

/// Fully itemized estimate; rebuilt from scratch on every calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub square_footage: f64,
    pub substrate_type: SubstrateType,
    pub surfaces: Vec<ColoredSurface>,
    pub apron_area: f64,
    pub material_order: MaterialOrder,
    pub logistics_summary: LogisticsSummary,
    pub surface_prep: CostCategory,
    pub coating: CostCategory,
    pub equipment: CostCategory,
    pub logistics: CostCategory,
    pub other: CostCategory,
    pub color_summary: BTreeMap<PaintColor, ColorSummaryEntry>,
    pub subtotal: Decimal,
    pub margin_percent: Decimal,
    pub margin_amount: Decimal,
    pub total: Decimal,
    pub cost_per_square_foot: Decimal,
}

impl CostBreakdown {
    pub fn categories(&self) -> [&CostCategory; 5] {
        [
            &self.surface_prep,
            &self.coating,
            &self.equipment,
            &self.logistics,
            &self.other,
        ]
    }

    pub fn surface(&self, surface: Surface) -> Option<&ColoredSurface> {
        self.surfaces.iter().find(|s| s.surface == surface)
    }
}
