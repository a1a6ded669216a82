// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Caller-facing error taxonomy for secret operations.

use thiserror::Error;

/// Result alias for façade operations.
pub type SecretsResult<T> = Result<T, SecretsError>;

/// Errors surfaced by [`crate::SecretsFacade`].
///
/// Every variant carries the operation context (which secret, which
/// operation) and preserves the underlying cause's text. Apart from
/// [`SecretsError::NotFound`] — which the store reports distinctly — the
/// taxonomy deliberately does not distinguish causes: a fetch that failed
/// because of a network fault and one the store refused look the same to
/// callers.
#[derive(Debug, Error)]
pub enum SecretsError {
	/// The named secret does not exist in the store.
	#[error("secret '{name}' not found")]
	NotFound { name: String },

	/// Fetch of a named secret failed for any reason other than a distinct
	/// not-found: network fault, rejected credentials, throttling.
	#[error("failed to retrieve secret '{name}': {message}")]
	Fetch { name: String, message: String },

	/// Enumerating secret names failed.
	#[error("failed to list secrets: {0}")]
	List(String),

	/// A create, update, or delete was rejected by the store.
	#[error("failed to write secret '{name}': {message}")]
	Write { name: String, message: String },

	/// Caller-supplied input failed boundary validation.
	#[error("invalid input: {0}")]
	InvalidInput(String),
}
