// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources.

use serde::Deserialize;

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, VaultConfigLayer};

/// One source's worth of configuration; every section optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub vault: Option<VaultConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merges `other` over `self`; `other`'s set fields win.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		if let Some(other_http) = other.http {
			self.http.get_or_insert_with(Default::default).merge(other_http);
		}
		if let Some(other_vault) = other.vault {
			self.vault
				.get_or_insert_with(Default::default)
				.merge(other_vault);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}
}
