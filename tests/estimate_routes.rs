mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{json_body, json_request, raw_request, test_app};
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn single_tennis_court() -> serde_json::Value {
    json!({
        "dimensions": { "length": 78, "width": 36 },
        "sports": { "tennis": { "selected": true, "courtCount": 1, "color": "dark-blue" } }
    })
}

#[tokio::test]
async fn test_calculate_with_named_catalog() {
    let (app, _) = test_app("estimate-named");

    let request = json_request(
        "POST",
        "/estimate/calculate",
        &json!({ "configuration": single_tennis_court(), "catalogId": "standard" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = json_body(response.into_body()).await;
    let data = &body["data"];
    assert_eq!(data["squareFootage"], 2808.0);
    assert_eq!(data["materialOrder"]["resurfacer"]["drums"], 3);
    assert_eq!(data["colorSummary"]["dark-blue"]["drums"], 3);
    // 585 resurfacer + 832.50 color + 450 lines
    assert_eq!(data["coating"]["total"].as_f64(), Some(1867.5));
    assert_eq!(data["total"].as_f64(), Some(1867.5));
    assert_eq!(body["meta"]["catalogId"], "standard");
    assert!(body["meta"]["calculatedAt"].is_string());
}

#[tokio::test]
async fn test_legacy_and_junk_fields_are_coerced() {
    let (app, _) = test_app("estimate-legacy");

    let configuration = json!({
        "dimensions": { "length": "78", "width": 36 },
        "sports": { "tennis": { "selected": "yes", "courts": 0, "color": "Dark Blue" } },
        "margin": "lots",
        "logistics": { "travelDays": -2, "distance": null }
    });
    let request = json_request(
        "POST",
        "/estimate/calculate",
        &json!({ "configuration": configuration, "catalogId": "standard" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let data = json_body(response.into_body()).await["data"].clone();
    assert_eq!(data["squareFootage"], 2808.0);
    assert_eq!(data["marginAmount"].as_f64(), Some(0.0));
    assert_eq!(data["logistics"]["items"], json!([]));
    assert_eq!(data["total"].as_f64(), Some(1867.5));
}

#[tokio::test]
async fn test_inline_catalog_wins() {
    let (app, _) = test_app("estimate-inline");

    let request = json_request(
        "POST",
        "/estimate/calculate",
        &json!({
            "configuration": single_tennis_court(),
            "catalogId": "does-not-exist",
            "catalog": { "services": { "tennisLines": 500 } }
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["catalogId"], "inline");
    assert_eq!(body["data"]["total"].as_f64(), Some(500.0));
}

#[tokio::test]
async fn test_default_catalog_prices_everything_at_zero() {
    let (app, _) = test_app("estimate-default");

    let request = json_request(
        "POST",
        "/estimate/calculate",
        &json!({ "configuration": single_tennis_court() }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["catalogId"], "default");
    assert_eq!(body["data"]["materialOrder"]["colorCoat"]["gallons"], 68);
    assert_eq!(body["data"]["total"].as_f64(), Some(0.0));
    assert_eq!(body["data"]["costPerSquareFoot"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_empty_configuration_is_a_zero_estimate() {
    let (app, _) = test_app("estimate-empty");

    let request = json_request("POST", "/estimate/calculate", &json!({ "catalogId": "standard" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let data = json_body(response.into_body()).await["data"].clone();
    assert_eq!(data["squareFootage"], 0.0);
    assert_eq!(data["surfaces"], json!([]));
    assert_eq!(data["total"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_unknown_catalog_is_not_found() {
    let (app, _) = test_app("estimate-unknown");

    let request = json_request(
        "POST",
        "/estimate/calculate",
        &json!({ "configuration": single_tennis_court(), "catalogId": "nope" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, _) = test_app("estimate-malformed");

    let response = app
        .oneshot(raw_request("POST", "/estimate/calculate", "{ not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (app, _) = test_app("estimate-request-id");

    let mut request = json_request("POST", "/estimate/calculate", &json!({}));
    request
        .headers_mut()
        .insert("x-request-id", "estimate-42".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "estimate-42");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let (app, _) = test_app("estimate-oversized");

    let body = vec![b' '; 2 * 1024 * 1024];
    let request = Request::builder()
        .method("POST")
        .uri("/estimate/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_repeated_calculations_are_identical() {
    let (app, _) = test_app("estimate-idempotent");
    let payload = json!({ "configuration": single_tennis_court(), "catalogId": "standard" });

    let first = app
        .clone()
        .oneshot(json_request("POST", "/estimate/calculate", &payload))
        .await
        .unwrap();
    let second = app
        .oneshot(json_request("POST", "/estimate/calculate", &payload))
        .await
        .unwrap();

    let first = json_body(first.into_body()).await;
    let second = json_body(second.into_body()).await;
    assert_eq!(first["data"], second["data"]);
}
