// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Key Vault-style secrets API client implementation.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use strongbox_common_secret::SecretString;
use tracing::{debug, error, instrument, trace};

use crate::error::VaultError;
use crate::types::{SecretListPage, SetSecretBody, VaultErrorBody, VaultSecret};

const API_VERSION: &str = "7.4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a Key Vault-style HTTPS secret store.
///
/// The client is cheap to clone and safe to share across concurrent
/// callers; it holds connection parameters only and is never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct VaultClient {
	http_client: Client,
	endpoint: String,
	token: Option<SecretString>,
}

impl VaultClient {
	/// Creates a new client for the store at `endpoint`.
	///
	/// `token` is a pre-authenticated bearer token; pass `None` only when
	/// the store (e.g. a local emulator) accepts unauthenticated requests.
	pub fn new(endpoint: impl Into<String>, token: Option<SecretString>) -> Self {
		let http_client = strongbox_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("failed to build HTTP client");

		Self {
			http_client,
			endpoint: endpoint.into().trim_end_matches('/').to_string(),
			token,
		}
	}

	/// Sets a custom request timeout, replacing the default of 30 seconds.
	///
	/// Callers that need cancellation semantics get them from this timeout;
	/// nothing above the client re-implements its own.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.http_client = strongbox_common_http::new_client_with_timeout(timeout);
		self
	}

	/// Returns the store endpoint this client talks to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Fetches the named secret, including its value.
	#[instrument(skip(self), fields(%name))]
	pub async fn get_secret(&self, name: &str) -> Result<VaultSecret, VaultError> {
		let url = self.secret_url(name);
		debug!(url = %url, "fetching secret from store");

		let response = self.send(self.http_client.get(&url)).await?;
		let status = response.status();

		if status == StatusCode::NOT_FOUND {
			return Err(VaultError::SecretNotFound(name.to_string()));
		}
		let response = Self::check_status(response).await?;

		let secret: VaultSecret = response.json().await.map_err(|e| {
			error!(error = %e, "failed to parse secret bundle");
			VaultError::InvalidResponse(format!("secret bundle parse error: {e}"))
		})?;

		trace!(id = %secret.id, "fetched secret bundle");
		Ok(secret)
	}

	/// Creates the named secret or overwrites its current value.
	#[instrument(skip(self, value), fields(%name))]
	pub async fn set_secret(&self, name: &str, value: &str) -> Result<VaultSecret, VaultError> {
		let url = self.secret_url(name);
		debug!(url = %url, "writing secret to store");

		let body = SetSecretBody { value };
		let response = self.send(self.http_client.put(&url).json(&body)).await?;
		let response = Self::check_status(response).await?;

		let secret: VaultSecret = response.json().await.map_err(|e| {
			error!(error = %e, "failed to parse secret bundle");
			VaultError::InvalidResponse(format!("secret bundle parse error: {e}"))
		})?;

		Ok(secret)
	}

	/// Requests deletion of the named secret.
	///
	/// The store begins an asynchronous deletion workflow; a success here
	/// means the request was accepted, not that the secret is already gone.
	#[instrument(skip(self), fields(%name))]
	pub async fn delete_secret(&self, name: &str) -> Result<(), VaultError> {
		let url = self.secret_url(name);
		debug!(url = %url, "requesting secret deletion");

		let response = self.send(self.http_client.delete(&url)).await?;
		let status = response.status();

		if status == StatusCode::NOT_FOUND {
			return Err(VaultError::SecretNotFound(name.to_string()));
		}
		Self::check_status(response).await?;

		Ok(())
	}

	/// Enumerates all secret names visible to the authenticated identity.
	///
	/// Follows the listing's `nextLink` pagination until exhausted. The
	/// returned order is the store's enumeration order.
	#[instrument(skip(self))]
	pub async fn list_secret_names(&self) -> Result<Vec<String>, VaultError> {
		let mut names = Vec::new();
		let mut url = format!("{}/secrets?api-version={API_VERSION}", self.endpoint);

		loop {
			debug!(url = %url, "listing secrets page");
			let response = self.send(self.http_client.get(&url)).await?;
			let response = Self::check_status(response).await?;

			let page: SecretListPage = response.json().await.map_err(|e| {
				error!(error = %e, "failed to parse secret listing");
				VaultError::InvalidResponse(format!("secret listing parse error: {e}"))
			})?;

			for item in &page.value {
				match secret_name_from_id(&item.id) {
					Some(name) => names.push(name.to_string()),
					None => {
						return Err(VaultError::InvalidResponse(format!(
							"unrecognized secret identifier: {}",
							item.id
						)));
					}
				}
			}

			match page.next_link {
				Some(next) => url = next,
				None => break,
			}
		}

		debug!(count = names.len(), "listed secret names");
		Ok(names)
	}

	fn secret_url(&self, name: &str) -> String {
		format!("{}/secrets/{name}?api-version={API_VERSION}", self.endpoint)
	}

	async fn send(&self, request: RequestBuilder) -> Result<Response, VaultError> {
		let request = match &self.token {
			Some(token) => request.bearer_auth(token.expose_secret()),
			None => request,
		};

		request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("request to secret store timed out");
				return VaultError::Timeout;
			}
			error!(error = %e, "network error during secret store request");
			VaultError::Network(e)
		})
	}

	/// Maps non-success statuses to client errors, draining the body for
	/// the store's error message where one is present.
	async fn check_status(response: Response) -> Result<Response, VaultError> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		let status_code = status.as_u16();
		let body = response.text().await.unwrap_or_default();
		let message = store_error_message(&body, status_code);

		if status_code == 401 || status_code == 403 {
			error!(status = status_code, "unauthorized secret store request");
			return Err(VaultError::Unauthorized);
		}

		error!(status = status_code, message = %message, "secret store API error");
		Err(VaultError::ApiError {
			status: status_code,
			message,
		})
	}
}

/// Extracts the secret name from a store identifier.
///
/// Identifiers look like `https://{vault}/secrets/{name}` in listings and
/// `https://{vault}/secrets/{name}/{version}` in bundles.
fn secret_name_from_id(id: &str) -> Option<&str> {
	let (_, after) = id.split_once("/secrets/")?;
	let name = after.split('/').next().unwrap_or(after);
	let name = name.split('?').next().unwrap_or(name);
	if name.is_empty() {
		None
	} else {
		Some(name)
	}
}

/// Picks the most useful error text out of a store error body.
fn store_error_message(body: &str, status: u16) -> String {
	if let Ok(parsed) = serde_json::from_str::<VaultErrorBody>(body) {
		if let Some(message) = parsed.error.message {
			return message;
		}
		if let Some(code) = parsed.error.code {
			return code;
		}
	}
	if body.trim().is_empty() {
		format!("HTTP status {status}")
	} else {
		body.to_string()
	}
}
