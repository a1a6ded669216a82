// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, post};
use axum::Router;
use strongbox_secrets::SecretsFacade;
use strongbox_server_config::ServerConfig;
use strongbox_vault::VaultClient;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_docs::ApiDoc;
use crate::routes;

/// Application state shared across handlers.
///
/// The façade handle is the only state; it is immutable after construction
/// and safe to clone into every concurrent request.
#[derive(Clone)]
pub struct AppState {
	pub secrets: Arc<SecretsFacade>,
}

/// Builds application state from resolved configuration.
///
/// The vault client is constructed once with the configured endpoint,
/// token, and timeout, then shared read-only across all requests.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let client = VaultClient::new(&config.vault.endpoint, config.vault.token.clone())
		.with_timeout(Duration::from_secs(config.vault.timeout_secs));

	AppState {
		secrets: Arc::new(SecretsFacade::new(Arc::new(client))),
	}
}

/// Builds the HTTP router over the given state.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/secrets", get(routes::secrets::list_secret_names))
		.route("/secrets/batch", post(routes::secrets::get_secrets_batch))
		.route("/secrets/{name}", get(routes::secrets::get_secret))
		.route("/secrets/{name}", post(routes::secrets::set_secret))
		.route("/secrets/{name}", delete(routes::secrets::delete_secret))
		.route("/secrets/{name}/exists", get(routes::secrets::secret_exists))
		.route("/health", get(routes::health::health_check))
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
		.with_state(state)
}
