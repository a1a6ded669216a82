// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML file, environment variables.

use std::path::PathBuf;

use strongbox_common_secret::SecretString;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, LoggingConfigLayer, VaultConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/strongbox/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `STRONGBOX_<SECTION>_<FIELD>`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: env_var("STRONGBOX_SERVER_HOST"),
				port: env_u16("STRONGBOX_SERVER_PORT")?,
			}),
			vault: Some(VaultConfigLayer {
				endpoint: env_var("STRONGBOX_VAULT_ENDPOINT"),
				timeout_secs: env_u64("STRONGBOX_VAULT_TIMEOUT_SECS")?,
			}),
			logging: Some(LoggingConfigLayer {
				level: env_var("STRONGBOX_SERVER_LOG_LEVEL"),
			}),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

/// Loads a secret from `<name>` or, failing that, from the file named by
/// `<name>_FILE`. Trailing newlines are stripped from file contents so a
/// conventional one-line secret file round-trips cleanly.
pub fn load_secret_env(name: &str) -> Result<Option<SecretString>, ConfigError> {
	if let Some(value) = env_var(name) {
		return Ok(Some(SecretString::new(value)));
	}

	let file_var = format!("{name}_FILE");
	if let Some(path) = env_var(&file_var) {
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			ConfigError::Secret(format!("failed to read {file_var} path {path}: {e}"))
		})?;
		return Ok(Some(SecretString::new(
			contents.trim_end_matches(['\r', '\n']).to_string(),
		)));
	}

	Ok(None)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_missing_toml_file_is_empty_layer() {
		let source = TomlSource::new("/nonexistent/strongbox-test/server.toml");
		let layer = source.load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.vault.is_none());
	}

	#[test]
	fn test_toml_file_parses_sections() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			"[http]\nport = 9443\n\n[vault]\nendpoint = \"https://vault.example.net\""
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.http.unwrap().port, Some(9443));
		assert_eq!(
			layer.vault.unwrap().endpoint.as_deref(),
			Some("https://vault.example.net")
		);
	}

	#[test]
	fn test_invalid_toml_is_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "not valid toml [").unwrap();

		assert!(matches!(
			TomlSource::new(file.path()).load(),
			Err(ConfigError::TomlParse { .. })
		));
	}

	#[test]
	fn test_load_secret_env_prefers_direct_value() {
		std::env::set_var("STRONGBOX_TEST_SECRET_DIRECT", "tok-abc");
		let secret = load_secret_env("STRONGBOX_TEST_SECRET_DIRECT").unwrap().unwrap();
		assert_eq!(secret.expose_secret(), "tok-abc");
		std::env::remove_var("STRONGBOX_TEST_SECRET_DIRECT");
	}

	#[test]
	fn test_load_secret_env_reads_file_indirection() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "tok-from-file").unwrap();
		std::env::set_var("STRONGBOX_TEST_SECRET_INDIRECT_FILE", file.path());

		let secret = load_secret_env("STRONGBOX_TEST_SECRET_INDIRECT")
			.unwrap()
			.unwrap();
		assert_eq!(secret.expose_secret(), "tok-from-file");
		std::env::remove_var("STRONGBOX_TEST_SECRET_INDIRECT_FILE");
	}

	#[test]
	fn test_load_secret_env_absent_is_none() {
		assert!(load_secret_env("STRONGBOX_TEST_SECRET_ABSENT")
			.unwrap()
			.is_none());
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}
}
