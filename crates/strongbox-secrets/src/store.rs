// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Store trait and backends.
//!
//! [`SecretStore`] is the seam between the façade and a concrete secret
//! store. The production backend is `strongbox_vault::VaultClient`;
//! [`MemoryStore`] backs tests and local development.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use strongbox_vault::{VaultClient, VaultError};
use thiserror::Error;

/// Raw store failure, before the façade wraps it with operation context.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The store distinctly reported the secret absent.
	#[error("secret not found: {0}")]
	NotFound(String),

	/// The call could not complete: network fault, rejected credentials,
	/// throttling, malformed response. Causes are collapsed; only the
	/// message survives.
	#[error("{0}")]
	Unavailable(String),
}

/// An authenticated key/value secret store.
///
/// Implementations must be safe to share across concurrent callers without
/// coordination; the façade holds one behind an `Arc` and never locks.
#[async_trait]
pub trait SecretStore: Send + Sync {
	/// Fetches the named secret's value.
	async fn fetch(&self, name: &str) -> Result<String, StoreError>;

	/// Creates the named secret or overwrites its value.
	async fn put(&self, name: &str, value: &str) -> Result<(), StoreError>;

	/// Requests deletion of the named secret. Deletion may be asynchronous
	/// on the store side; success means the request was accepted.
	async fn remove(&self, name: &str) -> Result<(), StoreError>;

	/// Enumerates all secret names, in the store's own order.
	async fn list(&self) -> Result<Vec<String>, StoreError>;
}

fn unavailable(e: VaultError) -> StoreError {
	StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl SecretStore for VaultClient {
	async fn fetch(&self, name: &str) -> Result<String, StoreError> {
		match self.get_secret(name).await {
			Ok(secret) => Ok(secret.value),
			Err(VaultError::SecretNotFound(_)) => Err(StoreError::NotFound(name.to_string())),
			Err(e) => Err(unavailable(e)),
		}
	}

	async fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
		match self.set_secret(name, value).await {
			Ok(_) => Ok(()),
			Err(e) => Err(unavailable(e)),
		}
	}

	async fn remove(&self, name: &str) -> Result<(), StoreError> {
		match self.delete_secret(name).await {
			Ok(()) => Ok(()),
			Err(VaultError::SecretNotFound(_)) => Err(StoreError::NotFound(name.to_string())),
			Err(e) => Err(unavailable(e)),
		}
	}

	async fn list(&self) -> Result<Vec<String>, StoreError> {
		self.list_secret_names().await.map_err(unavailable)
	}
}

/// In-process secret store for tests and local development.
///
/// Names enumerate in lexicographic order, which stands in for the remote
/// store's (unspecified) enumeration order.
#[derive(Debug, Default)]
pub struct MemoryStore {
	secrets: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store pre-populated with the given secrets.
	pub fn with_secrets<I, K, V>(secrets: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			secrets: RwLock::new(
				secrets
					.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}
}

#[async_trait]
impl SecretStore for MemoryStore {
	async fn fetch(&self, name: &str) -> Result<String, StoreError> {
		let secrets = self.secrets.read().expect("secret map lock poisoned");
		secrets
			.get(name)
			.cloned()
			.ok_or_else(|| StoreError::NotFound(name.to_string()))
	}

	async fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
		let mut secrets = self.secrets.write().expect("secret map lock poisoned");
		secrets.insert(name.to_string(), value.to_string());
		Ok(())
	}

	async fn remove(&self, name: &str) -> Result<(), StoreError> {
		let mut secrets = self.secrets.write().expect("secret map lock poisoned");
		match secrets.remove(name) {
			Some(_) => Ok(()),
			None => Err(StoreError::NotFound(name.to_string())),
		}
	}

	async fn list(&self) -> Result<Vec<String>, StoreError> {
		let secrets = self.secrets.read().expect("secret map lock poisoned");
		Ok(secrets.keys().cloned().collect())
	}
}
