// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret management HTTP handlers.
//!
//! Every endpoint wraps exactly one façade operation and serializes its
//! outcome into the `{success, ..., error?}` envelope. Field names are
//! camelCase on the wire.

use std::collections::HashMap;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use serde::{Deserialize, Serialize};
use strongbox_secrets::SecretsError;
use utoipa::ToSchema;

use crate::api::AppState;

/// Error envelope shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
	pub success: bool,
	pub error: String,
}

impl ErrorResponse {
	fn new(error: impl Into<String>) -> Self {
		Self {
			success: false,
			error: error.into(),
		}
	}
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSecretResponse {
	pub success: bool,
	pub secret_name: String,
	pub secret_value: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretExistsResponse {
	pub success: bool,
	pub secret_name: String,
	pub exists: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSecretNamesResponse {
	pub success: bool,
	pub secret_names: Vec<String>,
	pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchSecretsResponse {
	pub success: bool,
	/// One entry per requested name; `null` marks a failed or missing fetch.
	pub secrets: HashMap<String, Option<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetSecretRequest {
	#[serde(default)]
	pub secret_value: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetSecretResponse {
	pub success: bool,
	pub secret_name: String,
	pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSecretResponse {
	pub success: bool,
	pub secret_name: String,
	pub message: String,
}

fn error_status(error: &SecretsError) -> StatusCode {
	match error {
		SecretsError::NotFound { .. } => StatusCode::NOT_FOUND,
		SecretsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
		SecretsError::Fetch { .. } | SecretsError::List(_) | SecretsError::Write { .. } => {
			StatusCode::INTERNAL_SERVER_ERROR
		}
	}
}

fn error_response(error: &SecretsError) -> (StatusCode, Json<ErrorResponse>) {
	(error_status(error), Json(ErrorResponse::new(error.to_string())))
}

#[utoipa::path(
    get,
    path = "/secrets/{name}",
    params(
        ("name" = String, Path, description = "Secret name")
    ),
    responses(
        (status = 200, description = "Secret value", body = GetSecretResponse),
        (status = 404, description = "Secret not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "secrets"
)]
#[tracing::instrument(skip(state), fields(%name))]
pub async fn get_secret(
	State(state): State<AppState>,
	Path(name): Path<String>,
) -> impl IntoResponse {
	match state.secrets.get_secret(&name).await {
		Ok(value) => (
			StatusCode::OK,
			Json(GetSecretResponse {
				success: true,
				secret_name: name,
				secret_value: value,
			}),
		)
			.into_response(),
		Err(e) => {
			tracing::error!(error = %e, "failed to retrieve secret");
			error_response(&e).into_response()
		}
	}
}

#[utoipa::path(
    get,
    path = "/secrets/{name}/exists",
    params(
        ("name" = String, Path, description = "Secret name")
    ),
    responses(
        (status = 200, description = "Existence check result", body = SecretExistsResponse)
    ),
    tag = "secrets"
)]
#[tracing::instrument(skip(state), fields(%name))]
pub async fn secret_exists(
	State(state): State<AppState>,
	Path(name): Path<String>,
) -> impl IntoResponse {
	// A full fetch under the hood; any failure reads as "does not exist".
	let exists = state.secrets.secret_exists(&name).await;
	(
		StatusCode::OK,
		Json(SecretExistsResponse {
			success: true,
			secret_name: name,
			exists,
		}),
	)
}

#[utoipa::path(
    get,
    path = "/secrets",
    responses(
        (status = 200, description = "All secret names", body = ListSecretNamesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "secrets"
)]
#[tracing::instrument(skip(state))]
pub async fn list_secret_names(State(state): State<AppState>) -> impl IntoResponse {
	match state.secrets.list_secret_names().await {
		Ok(names) => (
			StatusCode::OK,
			Json(ListSecretNamesResponse {
				success: true,
				count: names.len(),
				secret_names: names,
			}),
		)
			.into_response(),
		Err(e) => {
			tracing::error!(error = %e, "failed to list secret names");
			error_response(&e).into_response()
		}
	}
}

#[utoipa::path(
    post,
    path = "/secrets/batch",
    request_body = Vec<String>,
    responses(
        (status = 200, description = "Per-name fetch outcomes", body = BatchSecretsResponse)
    ),
    tag = "secrets"
)]
#[tracing::instrument(skip(state, names), fields(count = names.len()))]
pub async fn get_secrets_batch(
	State(state): State<AppState>,
	Json(names): Json<Vec<String>>,
) -> impl IntoResponse {
	// Individual fetch failures become null entries, never an error reply.
	let secrets = state.secrets.get_secrets(&names).await;
	(
		StatusCode::OK,
		Json(BatchSecretsResponse {
			success: true,
			secrets,
		}),
	)
}

#[utoipa::path(
    post,
    path = "/secrets/{name}",
    params(
        ("name" = String, Path, description = "Secret name")
    ),
    request_body = SetSecretRequest,
    responses(
        (status = 200, description = "Secret created or updated", body = SetSecretResponse),
        (status = 400, description = "Empty secret value", body = ErrorResponse),
        (status = 500, description = "Store rejection", body = ErrorResponse)
    ),
    tag = "secrets"
)]
#[tracing::instrument(skip(state, payload), fields(%name))]
pub async fn set_secret(
	State(state): State<AppState>,
	Path(name): Path<String>,
	Json(payload): Json<SetSecretRequest>,
) -> impl IntoResponse {
	// Boundary validation: the façade itself accepts any string.
	let value = match payload.secret_value {
		Some(v) if !v.trim().is_empty() => v,
		_ => {
			let e = SecretsError::InvalidInput(
				"secret value must not be empty or whitespace-only".to_string(),
			);
			return error_response(&e).into_response();
		}
	};

	match state.secrets.set_secret(&name, &value).await {
		Ok(()) => (
			StatusCode::OK,
			Json(SetSecretResponse {
				success: true,
				secret_name: name,
				message: "secret successfully created or updated".to_string(),
			}),
		)
			.into_response(),
		Err(e) => {
			tracing::error!(error = %e, "failed to set secret");
			error_response(&e).into_response()
		}
	}
}

#[utoipa::path(
    delete,
    path = "/secrets/{name}",
    params(
        ("name" = String, Path, description = "Secret name")
    ),
    responses(
        (status = 200, description = "Deletion requested", body = DeleteSecretResponse),
        (status = 500, description = "Store rejection", body = ErrorResponse)
    ),
    tag = "secrets"
)]
#[tracing::instrument(skip(state), fields(%name))]
pub async fn delete_secret(
	State(state): State<AppState>,
	Path(name): Path<String>,
) -> impl IntoResponse {
	match state.secrets.delete_secret(&name).await {
		Ok(()) => (
			StatusCode::OK,
			Json(DeleteSecretResponse {
				success: true,
				secret_name: name,
				message: "secret deletion requested".to_string(),
			}),
		)
			.into_response(),
		Err(e) => {
			tracing::error!(error = %e, "failed to delete secret");
			error_response(&e).into_response()
		}
	}
}
