// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types for the Key Vault-style secrets API.

use serde::{Deserialize, Serialize};

/// A secret bundle as returned by the store on get and set.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultSecret {
	/// The secret value.
	pub value: String,
	/// Fully-qualified secret identifier, e.g.
	/// `https://vault.example.net/secrets/db-password/4387e9f3d6e14c459867679a90fd0f79`.
	pub id: String,
}

/// Request body for creating or updating a secret.
#[derive(Debug, Serialize)]
pub(crate) struct SetSecretBody<'a> {
	pub value: &'a str,
}

/// One page of the secret listing.
#[derive(Debug, Deserialize)]
pub(crate) struct SecretListPage {
	#[serde(default)]
	pub value: Vec<SecretListItem>,
	#[serde(rename = "nextLink")]
	pub next_link: Option<String>,
}

/// A single entry in the secret listing. Listing entries carry identifiers
/// only, never values.
#[derive(Debug, Deserialize)]
pub(crate) struct SecretListItem {
	pub id: String,
}

/// Error body returned by the store on non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct VaultErrorBody {
	pub error: VaultErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VaultErrorDetail {
	#[serde(default)]
	pub code: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
}
