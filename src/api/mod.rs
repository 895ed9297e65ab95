//! API response envelopes shared by the route handlers

pub mod response;

pub use response::{ApiResponse, Created, DataResponse};
