// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Strongbox server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`STRONGBOX_*`)
//!
//! # Usage
//!
//! ```ignore
//! use strongbox_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{load_secret_env, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub vault: VaultConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`STRONGBOX_*`)
/// 2. Config file (`/etc/strongbox/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	let vault_token = load_secret_env("STRONGBOX_VAULT_TOKEN")?;
	let vault = layer.vault.unwrap_or_default().finalize(vault_token);

	validate_config(&vault)?;

	info!(
		host = %http.host,
		port = http.port,
		vault_endpoint = %vault.endpoint,
		vault_token_configured = vault.token.is_some(),
		"server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		vault,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(vault: &VaultConfig) -> Result<(), ConfigError> {
	if vault.endpoint.is_empty() {
		return Err(ConfigError::Validation(
			"STRONGBOX_VAULT_ENDPOINT must be set to the secret store base URL \
			 (or [vault].endpoint in the config file)"
				.to_string(),
		));
	}

	if vault.timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"vault timeout must be at least one second".to_string(),
		));
	}

	Ok(())
}
