// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation aggregate.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
	paths(
		crate::routes::secrets::get_secret,
		crate::routes::secrets::secret_exists,
		crate::routes::secrets::list_secret_names,
		crate::routes::secrets::get_secrets_batch,
		crate::routes::secrets::set_secret,
		crate::routes::secrets::delete_secret,
		crate::routes::health::health_check,
	),
	components(schemas(
		crate::routes::secrets::ErrorResponse,
		crate::routes::secrets::GetSecretResponse,
		crate::routes::secrets::SecretExistsResponse,
		crate::routes::secrets::ListSecretNamesResponse,
		crate::routes::secrets::BatchSecretsResponse,
		crate::routes::secrets::SetSecretRequest,
		crate::routes::secrets::SetSecretResponse,
		crate::routes::secrets::DeleteSecretResponse,
		crate::routes::health::HealthResponse,
	)),
	tags(
		(name = "secrets", description = "Secret management endpoints"),
		(name = "health", description = "Health check endpoints")
	)
)]
pub struct ApiDoc;
