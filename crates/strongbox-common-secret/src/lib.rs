// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret wrapper type that prevents accidental logging of sensitive values.
//!
//! [`SecretString`] holds a string credential (an access token, an API key)
//! and redacts it from `Debug` and `Display` output. The wrapped value is
//! zeroized when dropped and is only reachable through an explicit
//! [`SecretString::expose_secret`] call, so every use of the raw value is
//! visible at the call site.

use zeroize::Zeroize;

/// Placeholder emitted wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

/// A string credential with redacted `Debug`/`Display` output.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
	/// Wraps a sensitive string value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the wrapped value.
	///
	/// Callers must not log or serialize the returned slice.
	pub fn expose_secret(&self) -> &str {
		&self.0
	}

	/// Returns true if the wrapped value is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl std::fmt::Debug for SecretString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(REDACTED)
	}
}

impl std::fmt::Display for SecretString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(REDACTED)
	}
}

impl Drop for SecretString {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		String::deserialize(deserializer).map(SecretString::new)
	}
}
