use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::color::PaintColor;
use super::lenient;

/// Everything the estimate form collects about a resurfacing job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfiguration {
    #[serde(deserialize_with = "lenient::or_default")]
    pub dimensions: Dimensions,
    #[serde(alias = "substrate", deserialize_with = "lenient::or_default")]
    pub substrate_type: SubstrateType,
    #[serde(deserialize_with = "lenient::or_default")]
    pub surface_prep: SurfacePrep,
    #[serde(deserialize_with = "lenient::or_default")]
    pub fiberglass_mesh: AreaSystem,
    #[serde(deserialize_with = "lenient::or_default")]
    pub cushion_system: AreaSystem,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sports: Sports,
    #[serde(deserialize_with = "lenient::or_default")]
    pub apron: Apron,
    #[serde(deserialize_with = "lenient::or_default")]
    pub equipment: EquipmentSelection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub logistics: Logistics,
    #[serde(alias = "margin", deserialize_with = "lenient::number")]
    pub margin_percent: f64,
    /// Free-form charges added by the estimator (permits, dumpster, etc.)
    #[serde(deserialize_with = "lenient::list")]
    pub additional_items: Vec<AdditionalItem>,
}

impl ProjectConfiguration {
    pub fn square_footage(&self) -> f64 {
        self.dimensions.square_footage()
    }

    /// Margin clamped into the 0..=100 range.
    pub fn margin_percent(&self) -> f64 {
        lenient::sanitize(self.margin_percent).min(100.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    #[serde(deserialize_with = "lenient::number")]
    pub length: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub width: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// Always derived, so it can never drift from the two sides.
    pub fn square_footage(&self) -> f64 {
        lenient::sanitize(self.length) * lenient::sanitize(self.width)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstrateType {
    NewConcrete,
    #[default]
    ExistingConcrete,
    Asphalt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfacePrep {
    #[serde(deserialize_with = "lenient::flag")]
    pub needs_pressure_wash: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub needs_acid_wash: bool,
    #[serde(alias = "patchWork", deserialize_with = "lenient::number")]
    pub patch_gallons: f64,
    #[serde(alias = "minorCracks", deserialize_with = "lenient::number")]
    pub minor_crack_gallons: f64,
    #[serde(alias = "majorCracks", deserialize_with = "lenient::number")]
    pub major_crack_gallons: f64,
}

/// Optional system laid over part of the slab (fiberglass mesh, cushion)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaSystem {
    #[serde(deserialize_with = "lenient::flag")]
    pub needed: bool,
    #[serde(alias = "squareFootage", deserialize_with = "lenient::number")]
    pub area: f64,
}

impl AreaSystem {
    pub fn new(area: f64) -> Self {
        Self { needed: true, area }
    }

    /// Covered area, bounded by the slab it sits on.
    pub fn effective_area(&self, total_area: f64) -> f64 {
        if self.needed {
            lenient::sanitize(self.area).min(lenient::sanitize(total_area))
        } else {
            0.0
        }
    }
}

/// Fixed set of supported sports; each one is always present
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sports {
    #[serde(deserialize_with = "lenient::or_default")]
    pub tennis: TennisSelection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub pickleball: PickleballSelection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub basketball: BasketballSelection,
}

fn selected_courts(selected: bool, court_count: u32) -> u32 {
    if selected {
        court_count.max(1)
    } else {
        0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TennisSelection {
    #[serde(deserialize_with = "lenient::flag")]
    pub selected: bool,
    #[serde(alias = "courts", deserialize_with = "lenient::count")]
    pub court_count: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub color: PaintColor,
}

impl TennisSelection {
    pub fn new(court_count: u32, color: PaintColor) -> Self {
        Self {
            selected: true,
            court_count,
            color,
        }
    }

    pub fn courts(&self) -> u32 {
        selected_courts(self.selected, self.court_count)
    }
}

/// Pickleball kitchen (non-volley zone) and court body are colored separately
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickleballSelection {
    #[serde(deserialize_with = "lenient::flag")]
    pub selected: bool,
    #[serde(alias = "courts", deserialize_with = "lenient::count")]
    pub court_count: u32,
    #[serde(alias = "nvzColor", deserialize_with = "lenient::or_default")]
    pub kitchen_color: PaintColor,
    #[serde(deserialize_with = "lenient::or_default")]
    pub court_color: PaintColor,
}

impl PickleballSelection {
    pub fn new(court_count: u32, kitchen_color: PaintColor, court_color: PaintColor) -> Self {
        Self {
            selected: true,
            court_count,
            kitchen_color,
            court_color,
        }
    }

    pub fn courts(&self) -> u32 {
        selected_courts(self.selected, self.court_count)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasketballCourtType {
    #[default]
    Half,
    Full,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasketballSelection {
    #[serde(deserialize_with = "lenient::flag")]
    pub selected: bool,
    #[serde(alias = "courts", deserialize_with = "lenient::count")]
    pub court_count: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub court_type: BasketballCourtType,
    #[serde(deserialize_with = "lenient::or_default")]
    pub color: PaintColor,
}

impl BasketballSelection {
    pub fn new(court_type: BasketballCourtType, color: PaintColor) -> Self {
        Self {
            selected: true,
            court_count: 1,
            court_type,
            color,
        }
    }

    pub fn courts(&self) -> u32 {
        selected_courts(self.selected, self.court_count)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Apron {
    #[serde(deserialize_with = "lenient::or_default")]
    pub color: PaintColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BasketballSystemKind {
    #[default]
    #[serde(rename = "adjustable-60", alias = "60")]
    Adjustable60,
    #[serde(rename = "adjustable-72", alias = "72")]
    Adjustable72,
    #[serde(rename = "fixed-height", alias = "fixed")]
    FixedHeight,
}

impl BasketballSystemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adjustable60 => "Adjustable basketball system (60\" backboard)",
            Self::Adjustable72 => "Adjustable basketball system (72\" backboard)",
            Self::FixedHeight => "Fixed-height basketball system",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketballSystemOrder {
    pub kind: BasketballSystemKind,
    #[serde(deserialize_with = "lenient::count")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentSelection {
    #[serde(alias = "tennisPosts", deserialize_with = "lenient::count")]
    pub tennis_post_sets: u32,
    #[serde(alias = "pickleballPosts", deserialize_with = "lenient::count")]
    pub pickleball_post_sets: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub mobile_nets: u32,
    #[serde(alias = "windscreenLowGrade", deserialize_with = "lenient::number")]
    pub windscreen_low_grade_feet: f64,
    #[serde(alias = "windscreenHighGrade", deserialize_with = "lenient::number")]
    pub windscreen_high_grade_feet: f64,
    #[serde(deserialize_with = "lenient::list")]
    pub basketball_systems: Vec<BasketballSystemOrder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Logistics {
    #[serde(deserialize_with = "lenient::count")]
    pub travel_days: u32,
    #[serde(alias = "trips", deserialize_with = "lenient::count")]
    pub number_of_trips: u32,
    #[serde(deserialize_with = "lenient::price")]
    pub hotel_rate: Decimal,
    #[serde(alias = "distance", deserialize_with = "lenient::number")]
    pub distance_to_site: f64,
    #[serde(alias = "laborHours", deserialize_with = "lenient::number")]
    pub general_labor_hours: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalItem {
    pub description: String,
    #[serde(deserialize_with = "lenient::price")]
    pub amount: Decimal,
}
