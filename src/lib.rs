//! Pricing engine for athletic court resurfacing estimates.
//!
//! [`engine::calculate_estimate`] turns a [`domain::ProjectConfiguration`] and a
//! [`domain::PricingCatalog`] into a [`domain::CostBreakdown`]. The remaining
//! modules serve it over HTTP.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
