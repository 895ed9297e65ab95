//! Pools paint requirements by color.
//!
//! Drums are bought per color, not per surface, so the drum ceiling is taken
//! over each color's combined gallons.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::area::SurfaceArea;
use super::materials::{drums_for_gallons, two_coat_quantity, DRUM_GALLONS};
use crate::domain::{ColorSummaryEntry, ColoredSurface, PaintColor};

pub fn drum_price(color_coat_per_gallon: Decimal) -> Decimal {
    color_coat_per_gallon
        .max(Decimal::ZERO)
        .saturating_mul(Decimal::from(DRUM_GALLONS))
}

/// Per-surface paint requirement, drums rounded as if bought alone.
pub fn colored_surfaces(surfaces: &[SurfaceArea]) -> Vec<ColoredSurface> {
    surfaces
        .iter()
        .map(|s| {
            let qty = two_coat_quantity(s.area);
            ColoredSurface {
                surface: s.surface,
                color: s.color,
                area: s.area,
                gallons: qty.gallons,
                drums: qty.drums,
            }
        })
        .collect()
}

/// Group surfaces by color and price the pooled drums.
///
/// Colors whose surfaces need no paint are left out.
pub fn aggregate_by_color(
    surfaces: &[ColoredSurface],
    color_coat_per_gallon: Decimal,
) -> BTreeMap<PaintColor, ColorSummaryEntry> {
    let per_drum = drum_price(color_coat_per_gallon);
    let mut pooled: BTreeMap<PaintColor, ColorSummaryEntry> = BTreeMap::new();

    for surface in surfaces.iter().filter(|s| s.gallons > 0) {
        let entry = pooled.entry(surface.color).or_insert_with(|| ColorSummaryEntry {
            gallons: 0,
            drums: 0,
            cost: Decimal::ZERO,
            surfaces: Vec::new(),
        });
        entry.gallons = entry.gallons.saturating_add(surface.gallons);
        entry.surfaces.push(surface.surface);
    }

    for entry in pooled.values_mut() {
        entry.drums = drums_for_gallons(entry.gallons);
        entry.cost = Decimal::from(entry.drums).saturating_mul(per_drum);
    }

    pooled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Surface;
    use rust_decimal_macros::dec;

    fn surface(surface: Surface, color: PaintColor, area: f64) -> SurfaceArea {
        SurfaceArea {
            surface,
            color,
            area,
        }
    }

    #[test]
    fn test_shared_color_pools_before_rounding() {
        // 2808 sq ft -> 68 gal, 1192 sq ft -> 29 gal; separately 3 + 1 drums,
        // pooled 97 gal -> 4 drums
        let areas = [
            surface(Surface::TennisCourts, PaintColor::DarkGreen, 2808.0),
            surface(Surface::Apron, PaintColor::DarkGreen, 1192.0),
        ];
        let colored = colored_surfaces(&areas);
        assert_eq!(colored[0].gallons, 68);
        assert_eq!(colored[1].gallons, 29);

        let summary = aggregate_by_color(&colored, dec!(10));
        let green = &summary[&PaintColor::DarkGreen];
        assert_eq!(summary.len(), 1);
        assert_eq!(green.gallons, 97);
        assert_eq!(green.drums, 4);
        assert_eq!(green.cost, dec!(1200));
        assert_eq!(green.surfaces, vec![Surface::TennisCourts, Surface::Apron]);
    }

    #[test]
    fn test_pooling_saves_drums_over_per_surface_rounding() {
        let areas = [
            surface(Surface::PickleballKitchen, PaintColor::Gray, 280.0),
            surface(Surface::PickleballCourts, PaintColor::Gray, 600.0),
            surface(Surface::Apron, PaintColor::Gray, 400.0),
        ];
        let colored = colored_surfaces(&areas);
        let per_surface: u64 = colored.iter().map(|s| s.drums).sum();

        let summary = aggregate_by_color(&colored, dec!(9.5));
        let gray = &summary[&PaintColor::Gray];

        assert_eq!(per_surface, 3);
        assert_eq!(gray.gallons, 7 + 15 + 10);
        assert_eq!(gray.drums, 2);
        assert_eq!(gray.cost, dec!(570));
    }

    #[test]
    fn test_distinct_colors_stay_separate() {
        let areas = [
            surface(Surface::TennisCourts, PaintColor::DarkBlue, 2808.0),
            surface(Surface::Apron, PaintColor::LightGreen, 1000.0),
        ];
        let summary = aggregate_by_color(&colored_surfaces(&areas), dec!(8));

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[&PaintColor::DarkBlue].drums, 3);
        assert_eq!(summary[&PaintColor::LightGreen].gallons, 24);
        assert_eq!(summary[&PaintColor::LightGreen].drums, 1);
    }

    #[test]
    fn test_zero_gallon_colors_are_omitted() {
        let areas = [surface(Surface::Apron, PaintColor::Red, 0.0)];
        assert!(aggregate_by_color(&colored_surfaces(&areas), dec!(8)).is_empty());
    }

    #[test]
    fn test_missing_price_still_orders_drums() {
        let areas = [surface(Surface::Apron, PaintColor::Red, 500.0)];
        let summary = aggregate_by_color(&colored_surfaces(&areas), Decimal::ZERO);
        assert_eq!(summary[&PaintColor::Red].drums, 1);
        assert_eq!(summary[&PaintColor::Red].cost, Decimal::ZERO);
    }

    #[test]
    fn test_pooled_gallons_saturate() {
        let huge = |surface| ColoredSurface {
            surface,
            color: PaintColor::Red,
            area: f64::MAX,
            gallons: u64::MAX - 1,
            drums: drums_for_gallons(u64::MAX - 1),
        };
        let surfaces = [huge(Surface::PickleballKitchen), huge(Surface::PickleballCourts)];

        let summary = aggregate_by_color(&surfaces, dec!(9));
        let red = &summary[&PaintColor::Red];
        assert_eq!(red.gallons, u64::MAX);
        assert_eq!(red.drums, u64::MAX.div_ceil(30));
        assert!(red.cost > Decimal::ZERO);
    }
}
