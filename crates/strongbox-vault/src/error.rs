// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the vault client.

use thiserror::Error;

/// Errors that can occur when talking to the remote secret store.
#[derive(Debug, Error)]
pub enum VaultError {
	/// Network-level error during HTTP communication.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("request timed out")]
	Timeout,

	/// The store rejected the credentials.
	#[error("unauthorized: the store rejected the access token")]
	Unauthorized,

	/// The named secret does not exist in the store.
	#[error("secret not found: {0}")]
	SecretNotFound(String),

	/// Invalid or unparseable response from the store.
	#[error("invalid response from secret store: {0}")]
	InvalidResponse(String),

	/// The store returned an error status.
	#[error("secret store error: {status} - {message}")]
	ApiError { status: u16, message: String },
}
