// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use strongbox_secrets::HealthStatus;
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	pub success: bool,
	pub status: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Secret store is reachable", body = HealthResponse),
        (status = 503, description = "Secret store is unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - liveness probe against the secret store.
///
/// Reuses the store's listing call; an empty store is still healthy.
#[tracing::instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	match state.secrets.health().await {
		HealthStatus::Healthy => (
			StatusCode::OK,
			Json(HealthResponse {
				success: true,
				status: "healthy".to_string(),
				message: Some("secret store connection is working".to_string()),
				error: None,
			}),
		),
		HealthStatus::Unhealthy { message } => {
			tracing::error!(error = %message, "health check failed");
			(
				StatusCode::SERVICE_UNAVAILABLE,
				Json(HealthResponse {
					success: false,
					status: "unhealthy".to_string(),
					message: None,
					error: Some(format!("secret store connection failed: {message}")),
				}),
			)
		}
	}
}
