// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The secret façade.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{SecretsError, SecretsResult};
use crate::store::{SecretStore, StoreError};

/// Outcome of the liveness probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
	/// The store answered the listing call.
	Healthy,
	/// The listing call failed; `message` carries the underlying cause.
	Unhealthy { message: String },
}

impl HealthStatus {
	pub fn is_healthy(&self) -> bool {
		matches!(self, HealthStatus::Healthy)
	}
}

/// Uniform CRUD façade over a remote secret store.
///
/// Holds a shared store handle and nothing else: no cache, no retained
/// values, no locks. Every operation is independently callable from
/// concurrent tasks. The façade does not retry and does not log; failures
/// are wrapped with operation context and returned to the caller.
#[derive(Clone)]
pub struct SecretsFacade {
	store: Arc<dyn SecretStore>,
}

impl SecretsFacade {
	/// Wraps a store handle. The handle is expected to be pre-authenticated
	/// and immutable; the façade never mutates it.
	pub fn new(store: Arc<dyn SecretStore>) -> Self {
		Self { store }
	}

	/// Fetches the named secret's value.
	///
	/// Returns [`SecretsError::NotFound`] when the store distinctly reports
	/// the secret absent, and [`SecretsError::Fetch`] for every other
	/// failure; causes beyond that split are collapsed into message text.
	pub async fn get_secret(&self, name: &str) -> SecretsResult<String> {
		self.store.fetch(name).await.map_err(|e| match e {
			StoreError::NotFound(_) => SecretsError::NotFound {
				name: name.to_string(),
			},
			StoreError::Unavailable(message) => SecretsError::Fetch {
				name: name.to_string(),
				message,
			},
		})
	}

	/// Returns whether the named secret currently exists.
	///
	/// Implemented as a full fetch — the store offers no cheaper presence
	/// primitive, so this transfers the secret value and costs as much as
	/// [`SecretsFacade::get_secret`]. Any failure, not-found or otherwise,
	/// maps to `false`; this method never errors.
	pub async fn secret_exists(&self, name: &str) -> bool {
		self.store.fetch(name).await.is_ok()
	}

	/// Enumerates all secret names visible to the store identity.
	///
	/// The returned order is the store's enumeration order, and the list is
	/// a one-shot snapshot taken at call time.
	pub async fn list_secret_names(&self) -> SecretsResult<Vec<String>> {
		self.store
			.list()
			.await
			.map_err(|e| SecretsError::List(e.to_string()))
	}

	/// Fetches several secrets, one independent fetch per name.
	///
	/// A failed fetch becomes a `None` entry; it never aborts the batch.
	/// The result covers exactly the requested names (duplicates collapse
	/// to one entry) and is returned even if every fetch failed. An empty
	/// request yields an empty map.
	pub async fn get_secrets(&self, names: &[String]) -> HashMap<String, Option<String>> {
		let mut secrets = HashMap::with_capacity(names.len());
		for name in names {
			let value = self.store.fetch(name).await.ok();
			secrets.insert(name.clone(), value);
		}
		secrets
	}

	/// Creates the named secret or overwrites its current value.
	///
	/// The façade accepts any string value; callers validate emptiness at
	/// the boundary before invoking it. Concurrent writes to the same name
	/// race at the store with last-write-wins.
	pub async fn set_secret(&self, name: &str, value: &str) -> SecretsResult<()> {
		self.store
			.put(name, value)
			.await
			.map_err(|e| SecretsError::Write {
				name: name.to_string(),
				message: e.to_string(),
			})
	}

	/// Requests deletion of the named secret.
	///
	/// The contract is "deletion has been requested and accepted", not
	/// "secret is immediately gone": the store may run an asynchronous
	/// deletion workflow. Deleting an absent name is not normalized — the
	/// store's rejection propagates as [`SecretsError::Write`].
	pub async fn delete_secret(&self, name: &str) -> SecretsResult<()> {
		self.store
			.remove(name)
			.await
			.map_err(|e| SecretsError::Write {
				name: name.to_string(),
				message: e.to_string(),
			})
	}

	/// Liveness probe, built by repurposing the listing call.
	///
	/// Healthy whenever the store answers the enumeration, regardless of
	/// how many secrets exist (zero included); unhealthy otherwise, with
	/// the listing failure's message attached.
	pub async fn health(&self) -> HealthStatus {
		match self.store.list().await {
			Ok(_) => HealthStatus::Healthy,
			Err(e) => HealthStatus::Unhealthy {
				message: e.to_string(),
			},
		}
	}
}
