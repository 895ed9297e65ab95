//! Surface preparation and specialty-system line items.

use super::materials::{
    binder_mix, cushion_coat_gallons, mesh_primer_gallons, mesh_rolls, whole_units,
};
use crate::domain::{
    BinderMix, CostCategory, LineItem, MaterialPrices, ProjectConfiguration, ServiceRates, Unit,
};

/// Quantities behind the surface-prep and specialty line items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepQuantities {
    pub patch_mix: BinderMix,
    pub major_crack_mix: BinderMix,
    pub crack_filler_gallons: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialtyQuantities {
    pub mesh_rolls: u32,
    pub mesh_primer_gallons: u32,
    pub cushion_base_gallons: u32,
    pub cushion_finish_gallons: u32,
}

pub fn prep_quantities(config: &ProjectConfiguration) -> PrepQuantities {
    let prep = &config.surface_prep;
    PrepQuantities {
        patch_mix: binder_mix(prep.patch_gallons),
        major_crack_mix: binder_mix(prep.major_crack_gallons),
        crack_filler_gallons: whole_units(prep.minor_crack_gallons),
    }
}

pub fn specialty_quantities(config: &ProjectConfiguration) -> SpecialtyQuantities {
    let total = config.square_footage();
    let mesh_area = config.fiberglass_mesh.effective_area(total);
    let cushion_area = config.cushion_system.effective_area(total);

    SpecialtyQuantities {
        mesh_rolls: mesh_rolls(mesh_area),
        mesh_primer_gallons: mesh_primer_gallons(mesh_area),
        cushion_base_gallons: cushion_coat_gallons(cushion_area),
        cushion_finish_gallons: cushion_coat_gallons(cushion_area),
    }
}

fn binder_mix_items(
    prefix: &str,
    label: &str,
    mix: &BinderMix,
    prices: &MaterialPrices,
) -> [Option<LineItem>; 3] {
    [
        LineItem::priced(
            format!("{prefix}_binder"),
            format!("{label} binder"),
            mix.binder_gallons as f64,
            Unit::Gallon,
            prices.binder,
        ),
        LineItem::priced(
            format!("{prefix}_sand"),
            format!("{label} sand (50 lb bags)"),
            mix.sand_bags as f64,
            Unit::Bag,
            prices.sand,
        ),
        LineItem::priced(
            format!("{prefix}_cement"),
            format!("{label} cement (48 qt units)"),
            mix.cement_units as f64,
            Unit::CementUnit,
            prices.cement,
        ),
    ]
}

/// Washing, patching and crack repair.
pub fn surface_prep_costs(
    config: &ProjectConfiguration,
    quantities: &PrepQuantities,
    materials: &MaterialPrices,
    services: &ServiceRates,
) -> CostCategory {
    let total = config.square_footage();
    let prep = &config.surface_prep;

    let washing = [
        prep.needs_pressure_wash
            .then(|| {
                LineItem::priced(
                    "pressure_wash",
                    "Pressure wash",
                    total,
                    Unit::SquareFoot,
                    services.pressure_wash,
                )
            })
            .flatten(),
        prep.needs_acid_wash
            .then(|| {
                LineItem::priced(
                    "acid_wash",
                    "Acid wash",
                    total,
                    Unit::SquareFoot,
                    services.acid_wash,
                )
            })
            .flatten(),
    ];

    let crack_filler = LineItem::priced(
        "minor_crack_filler",
        "Minor crack filler",
        quantities.crack_filler_gallons as f64,
        Unit::Gallon,
        materials.crack_filler,
    );

    CostCategory::from_items(
        washing
            .into_iter()
            .chain(binder_mix_items("patch", "Patch", &quantities.patch_mix, materials))
            .chain(std::iter::once(crack_filler))
            .chain(binder_mix_items(
                "major_crack",
                "Major crack repair",
                &quantities.major_crack_mix,
                materials,
            )),
    )
}

/// Fiberglass mesh, cushion system and the estimator's own extra charges.
pub fn other_costs(
    config: &ProjectConfiguration,
    quantities: &SpecialtyQuantities,
    materials: &MaterialPrices,
) -> CostCategory {
    let specialty = [
        LineItem::priced(
            "fiberglass_mesh",
            "Fiberglass mesh (rolls)",
            quantities.mesh_rolls as f64,
            Unit::Roll,
            materials.fiberglass_mesh,
        ),
        LineItem::priced(
            "fiberglass_primer",
            "Fiberglass mesh primer",
            quantities.mesh_primer_gallons as f64,
            Unit::Gallon,
            materials.fiberglass_primer,
        ),
        LineItem::priced(
            "cushion_base_coat",
            "Cushion base coat",
            quantities.cushion_base_gallons as f64,
            Unit::Gallon,
            materials.cushion_base_coat,
        ),
        LineItem::priced(
            "cushion_finish_coat",
            "Cushion finish coat",
            quantities.cushion_finish_gallons as f64,
            Unit::Gallon,
            materials.cushion_finish_coat,
        ),
    ];

    let extras = config.additional_items.iter().enumerate().map(|(i, item)| {
        let label = match item.description.trim() {
            "" => format!("Additional item {}", i + 1),
            text => text.to_string(),
        };
        LineItem::lump_sum(format!("additional_{}", i + 1), label, item.amount)
    });

    CostCategory::from_items(specialty.into_iter().chain(extras))
}
