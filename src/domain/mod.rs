//! Domain types for estimate inputs and outputs
//!
//! Inputs (`ProjectConfiguration`, `PricingCatalog`) decode leniently from
//! form and pricing-service payloads; `CostBreakdown` is the engine's output.

pub mod breakdown;
pub mod catalog;
pub mod color;
pub mod configuration;
pub mod lenient;

pub use breakdown::*;
pub use catalog::*;
pub use color::PaintColor;
pub use configuration::*;
