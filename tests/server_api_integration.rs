//! Integration tests for the HTTP API
//!
//! Each test drives the full router in-process through tower's
//! `oneshot`, so the whole middleware and handler stack runs without
//! binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::config::ServerConfig;
use server::server::build_router;
use server::state::ServerState;
use tower::ServiceExt;

fn test_app() -> Router {
    let state = Arc::new(ServerState::new(ServerConfig::default()));
    build_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn valid_contract() -> Value {
    json!({
        "schemaVersion": "1.0.0",
        "contractMetadata": {
            "contractName": "Integration Build",
            "clientName": "Acme Corp",
            "effectiveDate": "2026-10-01"
        },
        "lineItems": [
            { "description": "Setup", "costType": "one-off", "unitCost": 100, "quantity": 2 },
            { "description": "Hosting", "costType": "monthly", "unitCost": 50, "quantity": 1 }
        ],
        "discounts": [
            { "description": "Promo", "type": "percentage", "value": 10 }
        ]
    })
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = test_app();

    let response = app.clone().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn contract_crud_lifecycle() {
    let app = test_app();

    // Starts empty.
    let response = app.clone().oneshot(get_request("/api/contracts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["count"], 0);

    // Create.
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contracts", valid_contract()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["status"], "success");
    let id = created["data"]["id"].as_str().expect("id assigned").to_string();
    assert_eq!(created["data"]["status"], "draft");

    // Read back.
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/contracts/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["contractMetadata"]["clientName"], "Acme Corp");

    // List summaries carry recomputed totals.
    let response = app.clone().oneshot(get_request("/api/contracts")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["data"][0]["totalValue"]["subtotal"], 200.0);

    // Update.
    let mut updated_doc = valid_contract();
    updated_doc["contractMetadata"]["contractName"] = json!("Renamed Build");
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/contracts/{id}"), updated_doc))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["contractMetadata"]["contractName"], "Renamed Build");

    // Duplicate gets a fresh id and the copy suffix.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/contracts/{id}/duplicate"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let copy = body_json(response).await;
    let copy_id = copy["data"]["id"].as_str().expect("copy id");
    assert_ne!(copy_id, id);
    assert_eq!(
        copy["data"]["contractMetadata"]["contractName"],
        "Renamed Build (Copy)"
    );

    // Delete the original; only the copy remains.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/contracts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/api/contracts")).await.unwrap();
    assert_eq!(body_json(response).await["count"], 1);
}

#[tokio::test]
async fn invalid_contract_is_rejected_with_a_report() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/contracts",
            json!({ "lineItems": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "validation_failed");
    assert!(body["errors"].as_array().map_or(false, |e| !e.is_empty()));
}

#[tokio::test]
async fn missing_contract_is_a_404() {
    let app = test_app();

    let response = app
        .oneshot(get_request(
            "/api/contracts/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["status"], "error");
}

#[tokio::test]
async fn dry_run_validation_returns_totals() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/contracts/validate",
            valid_contract(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "valid");
    assert_eq!(body["totals"]["subtotal"], 200.0);
    assert_eq!(body["totals"]["finalOneOffTotal"], 180.0);
}

#[tokio::test]
async fn template_catalog_and_instantiation() {
    let app = test_app();

    let response = app.clone().oneshot(get_request("/api/templates")).await.unwrap();
    let listing = body_json(response).await;
    assert_eq!(listing["count"], 2);

    let response = app
        .clone()
        .oneshot(get_request("/api/templates/categories"))
        .await
        .unwrap();
    let categories = body_json(response).await;
    assert_eq!(categories["data"], json!(["Services", "Consulting"]));

    // Using a template returns a document without persisting anything.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/templates/consulting-template/use",
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["lineItems"].as_array().map(Vec::len), Some(2));

    let response = app.oneshot(get_request("/api/contracts")).await.unwrap();
    assert_eq!(body_json(response).await["count"], 0);
}

#[tokio::test]
async fn default_templates_cannot_be_deleted() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/templates/default-service-template")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn standalone_validation_reports_without_failing_the_request() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/validation/contract",
            json!({ "contractMetadata": {} }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["isValid"], false);
    assert!(body["errorCount"].as_u64().unwrap() > 0);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/validation/bulk",
            json!({ "contracts": [valid_contract(), { "bad": true }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["summary"]["total"], 2);
    assert_eq!(body["summary"]["valid"], 1);
    assert_eq!(body["summary"]["invalid"], 1);
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() {
    let app = test_app();

    let response = app.oneshot(get_request("/api/nonsense")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
