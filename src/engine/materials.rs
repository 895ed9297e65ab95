//! Coverage-rate conversions from area (or requested gallons) to the units
//! suppliers actually sell.
//!
//! Every conversion rounds up: a fractional requirement still needs a whole
//! gallon, drum, bag or roll on site.

use crate::domain::lenient::sanitize;
use crate::domain::{BinderMix, CoatingQuantity};

/// Square feet one gallon covers per coat
pub const COVERAGE_SQFT_PER_GALLON: f64 = 125.0;
/// Field allowance applied on top of the nominal coverage rate
pub const APPLICATION_FACTOR: f64 = 1.5;
/// Resurfacer and color coat both go down in two coats
pub const STANDARD_COATS: u32 = 2;
pub const DRUM_GALLONS: u64 = 30;

/// Two 50 lb sand bags per three gallons of binder
pub const SAND_BAGS_PER_BINDER_BATCH: f64 = 2.0;
pub const BINDER_GALLONS_PER_BATCH: f64 = 3.0;
pub const CEMENT_QUARTS_PER_UNIT: u32 = 4;

pub const MESH_SQFT_PER_ROLL: f64 = 320.0;
pub const PRIMER_SQFT_PER_GALLON: f64 = 75.0;
pub const CUSHION_SQFT_PER_GALLON: f64 = 100.0;

/// Smallest whole number of units covering `requirement`.
pub(crate) fn whole_units(requirement: f64) -> u32 {
    let requirement = sanitize(requirement);
    requirement.ceil().min(u32::MAX as f64) as u32
}

/// Gallons of a liquid coating for `area` square feet at `coats` coats.
///
/// Paint is pooled across surfaces, so it is counted in `u64` to leave room
/// for the per-color sums.
pub fn coating_gallons(area: f64, coats: u32) -> u64 {
    // Multiply before dividing so exact multiples of the coverage rate
    // never pick up a stray extra gallon.
    let requirement =
        sanitize(sanitize(area) * APPLICATION_FACTOR * coats as f64 / COVERAGE_SQFT_PER_GALLON);
    // `as` saturates at u64::MAX
    requirement.ceil() as u64
}

/// 30-gallon drums holding `gallons`; at least one once anything is needed.
pub fn drums_for_gallons(gallons: u64) -> u64 {
    gallons.div_ceil(DRUM_GALLONS)
}

/// Standard two-coat requirement for one surface.
pub fn two_coat_quantity(area: f64) -> CoatingQuantity {
    let gallons = coating_gallons(area, STANDARD_COATS);
    CoatingQuantity {
        gallons,
        drums: drums_for_gallons(gallons),
    }
}

/// Sand and cement that go with a requested amount of patch binder.
pub fn binder_mix(binder_gallons: f64) -> BinderMix {
    let binder_gallons = sanitize(binder_gallons);
    let cement_quarts = whole_units(binder_gallons);

    BinderMix {
        binder_gallons: whole_units(binder_gallons),
        sand_bags: whole_units(
            binder_gallons * SAND_BAGS_PER_BINDER_BATCH / BINDER_GALLONS_PER_BATCH,
        ),
        cement_quarts,
        cement_units: cement_quarts.div_ceil(CEMENT_QUARTS_PER_UNIT),
    }
}

pub fn mesh_rolls(area: f64) -> u32 {
    whole_units(sanitize(area) / MESH_SQFT_PER_ROLL)
}

pub fn mesh_primer_gallons(area: f64) -> u32 {
    whole_units(sanitize(area) / PRIMER_SQFT_PER_GALLON)
}

/// Gallons for a single cushion coat (base and finish use the same rate).
pub fn cushion_coat_gallons(area: f64) -> u32 {
    whole_units(sanitize(area) / CUSHION_SQFT_PER_GALLON)
}
