//! Playing-surface geometry per sport, with the apron as the leftover.

use crate::domain::lenient::sanitize;
use crate::domain::{
    Apron, BasketballCourtType, BasketballSelection, PaintColor, PickleballSelection, Sports,
    Surface, TennisSelection,
};

pub const TENNIS_COURT_LENGTH_FT: f64 = 78.0;
pub const TENNIS_COURT_WIDTH_FT: f64 = 36.0;

pub const PICKLEBALL_COURT_LENGTH_FT: f64 = 44.0;
pub const PICKLEBALL_COURT_WIDTH_FT: f64 = 20.0;
/// Both non-volley zones of one court combined
pub const PICKLEBALL_KITCHEN_LENGTH_FT: f64 = 14.0;

pub const BASKETBALL_FULL_COURT_SIDE_FT: f64 = 100.0;
pub const BASKETBALL_HALF_COURT_SIDE_FT: f64 = 50.0;

/// One colored surface before any paint math
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceArea {
    pub surface: Surface,
    pub color: PaintColor,
    pub area: f64,
}

/// Area split of the substrate across sports and apron
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPlan {
    pub total_area: f64,
    /// Only surfaces with area; the apron, when present, is last.
    pub surfaces: Vec<SurfaceArea>,
}

impl AreaPlan {
    pub fn area_of(&self, surface: Surface) -> f64 {
        self.surfaces
            .iter()
            .filter(|s| s.surface == surface)
            .map(|s| s.area)
            .sum()
    }

    pub fn apron_area(&self) -> f64 {
        self.area_of(Surface::Apron)
    }

    pub fn sport_area(&self) -> f64 {
        self.surfaces
            .iter()
            .filter(|s| s.surface != Surface::Apron)
            .map(|s| s.area)
            .sum()
    }
}

pub fn tennis_area(tennis: &TennisSelection) -> f64 {
    TENNIS_COURT_LENGTH_FT * TENNIS_COURT_WIDTH_FT * tennis.courts() as f64
}

/// `(kitchen, court)` areas; the court figure excludes the kitchen.
pub fn pickleball_areas(pickleball: &PickleballSelection) -> (f64, f64) {
    let courts = pickleball.courts() as f64;
    let kitchen = PICKLEBALL_KITCHEN_LENGTH_FT * PICKLEBALL_COURT_WIDTH_FT * courts;
    let full = PICKLEBALL_COURT_LENGTH_FT * PICKLEBALL_COURT_WIDTH_FT * courts;
    (kitchen, (full - kitchen).max(0.0))
}

/// Basketball is laid out as one pad sized by court type.
pub fn basketball_area(basketball: &BasketballSelection) -> f64 {
    if !basketball.selected {
        return 0.0;
    }

    let side = match basketball.court_type {
        BasketballCourtType::Full => BASKETBALL_FULL_COURT_SIDE_FT,
        BasketballCourtType::Half => BASKETBALL_HALF_COURT_SIDE_FT,
    };
    side * side
}

/// Split `total_area` into per-sport surfaces plus the residual apron.
pub fn plan_surfaces(sports: &Sports, apron: &Apron, total_area: f64) -> AreaPlan {
    let total_area = sanitize(total_area);
    let (kitchen, pickleball_court) = pickleball_areas(&sports.pickleball);

    let candidates = [
        (
            Surface::TennisCourts,
            sports.tennis.color,
            tennis_area(&sports.tennis),
        ),
        (
            Surface::PickleballKitchen,
            sports.pickleball.kitchen_color,
            kitchen,
        ),
        (
            Surface::PickleballCourts,
            sports.pickleball.court_color,
            pickleball_court,
        ),
        (
            Surface::BasketballCourt,
            sports.basketball.color,
            basketball_area(&sports.basketball),
        ),
    ];

    let mut surfaces: Vec<SurfaceArea> = candidates
        .into_iter()
        .filter(|(_, _, area)| *area > 0.0)
        .map(|(surface, color, area)| SurfaceArea {
            surface,
            color,
            area,
        })
        .collect();

    let sport_area: f64 = surfaces.iter().map(|s| s.area).sum();
    let apron_area = (total_area - sport_area).max(0.0);
    if apron_area > 0.0 {
        surfaces.push(SurfaceArea {
            surface: Surface::Apron,
            color: apron.color,
            area: apron_area,
        });
    }

    AreaPlan {
        total_area,
        surfaces,
    }
}
