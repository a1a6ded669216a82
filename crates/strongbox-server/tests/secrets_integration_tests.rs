// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Integration tests for the secret façade HTTP surface.
//!
//! Tests cover:
//! - Status codes and envelopes for every endpoint
//! - Boundary validation (empty secret value)
//! - Batch partial-failure semantics
//! - Health probe behavior against a reachable and an unreachable store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
	body::Body,
	http::{Request, StatusCode},
	Router,
};
use serde_json::{json, Value};
use strongbox_secrets::{MemoryStore, SecretStore, SecretsFacade, StoreError};
use strongbox_server::{create_router, AppState};
use tower::ServiceExt;

/// Store whose every call fails, standing in for an unreachable vault.
struct UnreachableStore;

#[async_trait]
impl SecretStore for UnreachableStore {
	async fn fetch(&self, _name: &str) -> Result<String, StoreError> {
		Err(StoreError::Unavailable(
			"connection refused to vault.example.net:443".to_string(),
		))
	}

	async fn put(&self, _name: &str, _value: &str) -> Result<(), StoreError> {
		Err(StoreError::Unavailable(
			"connection refused to vault.example.net:443".to_string(),
		))
	}

	async fn remove(&self, _name: &str) -> Result<(), StoreError> {
		Err(StoreError::Unavailable(
			"connection refused to vault.example.net:443".to_string(),
		))
	}

	async fn list(&self) -> Result<Vec<String>, StoreError> {
		Err(StoreError::Unavailable(
			"connection refused to vault.example.net:443".to_string(),
		))
	}
}

fn app_with_store(store: impl SecretStore + 'static) -> Router {
	let state = AppState {
		secrets: Arc::new(SecretsFacade::new(Arc::new(store))),
	};
	create_router(state)
}

/// Router backed by a seeded in-memory store.
fn seeded_app() -> Router {
	app_with_store(MemoryStore::with_secrets([("db-password", "p@ss123")]))
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.header("content-type", "application/json")
		.body(Body::from(serde_json::to_vec(body).unwrap()))
		.unwrap()
}

// ============================================================================
// GET /secrets/{name}
// ============================================================================

#[tokio::test]
async fn test_get_secret_returns_value() {
	let app = seeded_app();

	let response = app.oneshot(get("/secrets/db-password")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["secretName"], json!("db-password"));
	assert_eq!(body["secretValue"], json!("p@ss123"));
}

#[tokio::test]
async fn test_get_missing_secret_returns_404() {
	let app = seeded_app();

	let response = app.oneshot(get("/secrets/missing-key")).await.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(false));
	assert!(body["error"].as_str().unwrap().contains("missing-key"));
}

#[tokio::test]
async fn test_get_with_unreachable_store_returns_500() {
	let app = app_with_store(UnreachableStore);

	let response = app.oneshot(get("/secrets/db-password")).await.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(false));
	assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

// ============================================================================
// GET /secrets/{name}/exists
// ============================================================================

#[tokio::test]
async fn test_exists_is_true_for_stored_secret() {
	let app = seeded_app();

	let response = app
		.oneshot(get("/secrets/db-password/exists"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["exists"], json!(true));
}

#[tokio::test]
async fn test_exists_is_false_for_missing_secret() {
	let app = seeded_app();

	let response = app
		.oneshot(get("/secrets/missing-key/exists"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["exists"], json!(false));
}

#[tokio::test]
async fn test_exists_stays_200_when_store_unreachable() {
	let app = app_with_store(UnreachableStore);

	let response = app
		.oneshot(get("/secrets/db-password/exists"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["exists"], json!(false));
}

// ============================================================================
// GET /secrets
// ============================================================================

#[tokio::test]
async fn test_list_returns_names_and_count() {
	let app = app_with_store(MemoryStore::with_secrets([
		("api-key", "k"),
		("db-password", "p"),
	]));

	let response = app.oneshot(get("/secrets")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["count"], json!(2));
	assert_eq!(body["secretNames"], json!(["api-key", "db-password"]));
}

#[tokio::test]
async fn test_list_failure_returns_500() {
	let app = app_with_store(UnreachableStore);

	let response = app.oneshot(get("/secrets")).await.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(false));
}

// ============================================================================
// POST /secrets/batch
// ============================================================================

#[tokio::test]
async fn test_batch_covers_hits_and_misses() {
	let app = seeded_app();

	let response = app
		.oneshot(json_request(
			"POST",
			"/secrets/batch",
			&json!(["db-password", "missing-key"]),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["secrets"]["db-password"], json!("p@ss123"));
	assert_eq!(body["secrets"]["missing-key"], json!(null));
	assert_eq!(body["secrets"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_batch_succeeds_when_store_unreachable() {
	let app = app_with_store(UnreachableStore);

	let response = app
		.oneshot(json_request("POST", "/secrets/batch", &json!(["a", "b"])))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	let secrets = body["secrets"].as_object().unwrap();
	assert_eq!(secrets.len(), 2);
	assert!(secrets.values().all(Value::is_null));
}

#[tokio::test]
async fn test_batch_of_empty_list_is_empty_map() {
	let app = seeded_app();

	let response = app
		.oneshot(json_request("POST", "/secrets/batch", &json!([])))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert!(body["secrets"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_with_malformed_body_is_client_error() {
	let app = seeded_app();

	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/secrets/batch")
				.header("content-type", "application/json")
				.body(Body::from("{\"not\": \"a list\"}"))
				.unwrap(),
		)
		.await
		.unwrap();

	assert!(response.status().is_client_error());
}

// ============================================================================
// POST /secrets/{name}
// ============================================================================

#[tokio::test]
async fn test_set_then_get_returns_new_value() {
	let app = seeded_app();

	let response = app
		.clone()
		.oneshot(json_request(
			"POST",
			"/secrets/db-password",
			&json!({"secretValue": "rotated"}),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["secretName"], json!("db-password"));

	let response = app.oneshot(get("/secrets/db-password")).await.unwrap();
	let body = body_json(response).await;
	assert_eq!(body["secretValue"], json!("rotated"));
}

#[tokio::test]
async fn test_set_empty_value_is_rejected_and_store_untouched() {
	let app = seeded_app();

	let response = app
		.clone()
		.oneshot(json_request(
			"POST",
			"/secrets/api-key",
			&json!({"secretValue": ""}),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(false));
	assert!(body["error"].as_str().unwrap().contains("invalid input"));

	// The rejected write never reached the store.
	let response = app.oneshot(get("/secrets/api-key")).await.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_whitespace_value_is_rejected() {
	let app = seeded_app();

	let response = app
		.oneshot(json_request(
			"POST",
			"/secrets/api-key",
			&json!({"secretValue": "   "}),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_set_missing_value_field_is_rejected() {
	let app = seeded_app();

	let response = app
		.oneshot(json_request("POST", "/secrets/api-key", &json!({})))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_set_with_unreachable_store_returns_500() {
	let app = app_with_store(UnreachableStore);

	let response = app
		.oneshot(json_request(
			"POST",
			"/secrets/api-key",
			&json!({"secretValue": "value"}),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// DELETE /secrets/{name}
// ============================================================================

#[tokio::test]
async fn test_delete_then_exists_is_false() {
	let app = seeded_app();

	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri("/secrets/db-password")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["secretName"], json!("db-password"));

	let response = app
		.oneshot(get("/secrets/db-password/exists"))
		.await
		.unwrap();
	let body = body_json(response).await;
	assert_eq!(body["exists"], json!(false));
}

#[tokio::test]
async fn test_delete_missing_secret_returns_500() {
	let app = seeded_app();

	let response = app
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri("/secrets/missing-key")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	// The store's rejection of the delete propagates as a write failure.
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body = body_json(response).await;
	assert_eq!(body["success"], json!(false));
}

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn test_health_is_healthy_with_reachable_store() {
	let app = seeded_app();

	let response = app.oneshot(get("/health")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(true));
	assert_eq!(body["status"], json!("healthy"));
}

#[tokio::test]
async fn test_health_is_healthy_with_empty_store() {
	let app = app_with_store(MemoryStore::new());

	let response = app.oneshot(get("/health")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_embeds_cause_when_store_unreachable() {
	let app = app_with_store(UnreachableStore);

	let response = app.oneshot(get("/health")).await.unwrap();
	assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

	let body = body_json(response).await;
	assert_eq!(body["success"], json!(false));
	assert_eq!(body["status"], json!("unhealthy"));
	assert!(body["error"]
		.as_str()
		.unwrap()
		.contains("connection refused to vault.example.net:443"));
}
