//! Estimate calculation engine
//!
//! Pure functions from a project configuration and a pricing catalog to a
//! fully itemized `CostBreakdown`. Nothing here performs I/O or keeps state
//! between calls, so it is safe to invoke from any number of handlers at once.

pub mod area;
pub mod colors;
pub mod equipment;
pub mod logistics;
pub mod materials;
pub mod surface;

use rust_decimal::prelude::*;

use crate::domain::{
    sum_costs, BasketballCourtType, CoatingQuantity, CostBreakdown, CostCategory, LineItem,
    MaterialOrder, PricingCatalog, ProjectConfiguration, ServiceRates, Sports, Unit,
};

const COST_PER_SQFT_DP: u32 = 4;

fn line_painting_items(sports: &Sports, services: &ServiceRates) -> [Option<LineItem>; 3] {
    let basketball_label = match sports.basketball.court_type {
        BasketballCourtType::Full => "Basketball line painting (full court)",
        BasketballCourtType::Half => "Basketball line painting (half court)",
    };

    [
        LineItem::priced(
            "tennis_lines",
            "Tennis line painting",
            sports.tennis.courts() as f64,
            Unit::Court,
            services.tennis_lines,
        ),
        LineItem::priced(
            "pickleball_lines",
            "Pickleball line painting",
            sports.pickleball.courts() as f64,
            Unit::Court,
            services.pickleball_lines,
        ),
        LineItem::priced(
            "basketball_lines",
            basketball_label,
            sports.basketball.courts() as f64,
            Unit::Court,
            services.basketball_lines(sports.basketball.court_type),
        ),
    ]
}

/// Run the whole pipeline for one recalculation request.
///
/// Margin is applied here and nowhere else.
pub fn calculate_estimate(
    config: &ProjectConfiguration,
    catalog: &PricingCatalog,
) -> CostBreakdown {
    let square_footage = config.square_footage();

    // Areas -> per-surface paint -> pooled per-color order
    let plan = area::plan_surfaces(&config.sports, &config.apron, square_footage);
    let surfaces = colors::colored_surfaces(&plan.surfaces);
    let color_summary = colors::aggregate_by_color(&surfaces, catalog.materials.color_coat);

    let resurfacer = materials::two_coat_quantity(square_footage);
    let color_coat = CoatingQuantity {
        gallons: color_summary
            .values()
            .fold(0u64, |acc, c| acc.saturating_add(c.gallons)),
        drums: color_summary
            .values()
            .fold(0u64, |acc, c| acc.saturating_add(c.drums)),
    };
    let color_coat_cost = sum_costs(color_summary.values().map(|c| c.cost));

    let prep = surface::prep_quantities(config);
    let specialty = surface::specialty_quantities(config);

    let surface_prep =
        surface::surface_prep_costs(config, &prep, &catalog.materials, &catalog.services);

    let color_coat_item = (color_coat.drums > 0).then(|| LineItem {
        key: "color_coat".to_string(),
        label: "Color coat (pooled by color)".to_string(),
        quantity: color_coat.drums as f64,
        unit: Unit::Drum,
        unit_price: colors::drum_price(catalog.materials.color_coat),
        cost: color_coat_cost,
    });

    let coating = CostCategory::from_items(
        [
            LineItem::priced(
                "resurfacer",
                "Acrylic resurfacer",
                resurfacer.drums as f64,
                Unit::Drum,
                colors::drum_price(catalog.materials.resurfacer),
            ),
            color_coat_item,
        ]
        .into_iter()
        .chain(line_painting_items(&config.sports, &catalog.services)),
    );

    let equipment = equipment::equipment_costs(&config.equipment, &catalog.equipment);
    let logistics = logistics::logistics_costs(&config.logistics, &catalog.services);
    let other = surface::other_costs(config, &specialty, &catalog.materials);

    // Saturating throughout: absurd quantities cap at Decimal::MAX
    let subtotal = sum_costs(
        [&surface_prep, &coating, &equipment, &logistics, &other]
            .iter()
            .map(|category| category.total),
    );
    let margin_percent = Decimal::from_f64(config.margin_percent()).unwrap_or(Decimal::ZERO);
    let margin_amount = subtotal.saturating_mul(margin_percent) / Decimal::ONE_HUNDRED;
    let total = subtotal.saturating_add(margin_amount);

    let cost_per_square_foot = match Decimal::from_f64(square_footage) {
        Some(sqft) if sqft > Decimal::ZERO => total
            .checked_div(sqft)
            .unwrap_or(Decimal::MAX)
            .round_dp(COST_PER_SQFT_DP),
        _ => Decimal::ZERO,
    };

    tracing::debug!(
        square_footage,
        surfaces = surfaces.len(),
        colors = color_summary.len(),
        subtotal = %subtotal,
        total = %total,
        "Estimate calculated"
    );

    CostBreakdown {
        square_footage,
        substrate_type: config.substrate_type,
        apron_area: plan.apron_area(),
        surfaces,
        material_order: MaterialOrder {
            resurfacer,
            color_coat,
            patch_mix: prep.patch_mix,
            major_crack_mix: prep.major_crack_mix,
            crack_filler_gallons: prep.crack_filler_gallons,
            mesh_rolls: specialty.mesh_rolls,
            mesh_primer_gallons: specialty.mesh_primer_gallons,
            cushion_base_gallons: specialty.cushion_base_gallons,
            cushion_finish_gallons: specialty.cushion_finish_gallons,
        },
        logistics_summary: logistics::logistics_summary(&config.logistics),
        surface_prep,
        coating,
        equipment,
        logistics,
        other,
        color_summary,
        subtotal,
        margin_percent,
        margin_amount,
        total,
        cost_per_square_foot,
    }
}
