//! Travel and crew costs: lodging, mileage and general labor.

use crate::domain::lenient::sanitize;
use crate::domain::{CostCategory, LineItem, Logistics, LogisticsSummary, ServiceRates, Unit};

/// Nights on the road: every trip but the last day ends in a hotel.
pub fn lodging_nights(logistics: &Logistics) -> u32 {
    logistics
        .travel_days
        .saturating_sub(1)
        .saturating_mul(logistics.number_of_trips)
}

/// Miles driven, out and back once per trip.
pub fn round_trip_miles(logistics: &Logistics) -> f64 {
    sanitize(logistics.distance_to_site) * 2.0 * logistics.number_of_trips as f64
}

pub fn logistics_summary(logistics: &Logistics) -> LogisticsSummary {
    LogisticsSummary {
        lodging_nights: lodging_nights(logistics),
        round_trip_miles: round_trip_miles(logistics),
    }
}

/// Mileage is billed at the catalog's `mileageRate`; there is no built-in
/// rate, so a catalog without one prices travel distance at zero.
pub fn logistics_costs(logistics: &Logistics, services: &ServiceRates) -> CostCategory {
    CostCategory::from_items([
        LineItem::priced(
            "lodging",
            "Lodging",
            lodging_nights(logistics) as f64,
            Unit::Night,
            logistics.hotel_rate,
        ),
        LineItem::priced(
            "mileage",
            "Mileage (round trip)",
            round_trip_miles(logistics),
            Unit::Mile,
            services.mileage_rate,
        ),
        LineItem::priced(
            "general_labor",
            "General labor",
            sanitize(logistics.general_labor_hours),
            Unit::Hour,
            services.labor_rate,
        ),
    ])
}
