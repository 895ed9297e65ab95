//! Shared helpers for HTTP contract tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use court_estimator::{
    app::{create_app, AppState},
    config::Settings,
    domain::PricingCatalog,
    services::CatalogRegistry,
};
use serde_json::Value;
use std::path::PathBuf;

/// Catalog directory unique to one test
pub fn scratch_dir_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "court-estimator-it-{}-{}",
        name,
        std::process::id()
    ))
}

/// Like [`scratch_dir_path`], emptied first
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = scratch_dir_path(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

pub fn standard_catalog() -> PricingCatalog {
    serde_json::from_value(serde_json::json!({
        "materials": {
            "binder": 12, "sand": 8, "cement": 30,
            "resurfacer": 6.5, "colorCoat": 9.25, "crackFiller": 20
        },
        "services": {
            "pressureWash": 0.08, "tennisLines": 450, "pickleballLines": 300,
            "laborRate": 40, "mileageRate": 0.63
        },
        "equipment": { "tennisPostSet": 900, "mobileNet": 300 }
    }))
    .unwrap()
}

/// App with `default` and `standard` catalogs registered in memory
pub fn test_app(name: &str) -> (Router, CatalogRegistry) {
    let dir = scratch_dir(name);
    let registry = CatalogRegistry::load(&dir, "default").unwrap();
    registry.insert("standard", standard_catalog());

    let state = AppState::new(Settings::local(dir), registry.clone());
    (create_app(state), registry)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn json_body(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
