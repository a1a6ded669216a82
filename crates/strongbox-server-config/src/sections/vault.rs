// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Remote secret store configuration.

use serde::Deserialize;
use strongbox_common_secret::SecretString;

/// Remote secret store configuration (runtime, fully resolved).
///
/// The access token is env-only (`STRONGBOX_VAULT_TOKEN`, with `*_FILE`
/// indirection); it never passes through the TOML layer.
#[derive(Debug, Clone)]
pub struct VaultConfig {
	/// Base URL of the secret store, e.g. `https://vault.example.net`.
	pub endpoint: String,
	/// Pre-resolved bearer token for the store.
	pub token: Option<SecretString>,
	/// Request timeout applied to every store call.
	pub timeout_secs: u64,
}

impl Default for VaultConfig {
	fn default() -> Self {
		Self {
			endpoint: String::new(),
			token: None,
			timeout_secs: 30,
		}
	}
}

/// Remote secret store configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VaultConfigLayer {
	#[serde(default)]
	pub endpoint: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl VaultConfigLayer {
	pub fn merge(&mut self, other: VaultConfigLayer) {
		if other.endpoint.is_some() {
			self.endpoint = other.endpoint;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self, token: Option<SecretString>) -> VaultConfig {
		let defaults = VaultConfig::default();
		VaultConfig {
			endpoint: self
				.endpoint
				.map(|e| e.trim_end_matches('/').to_string())
				.unwrap_or(defaults.endpoint),
			token,
			timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
		}
	}
}
