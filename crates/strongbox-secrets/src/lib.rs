// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret façade over a remote key/value secret store.
//!
//! [`SecretsFacade`] exposes six uniform operations (get, exists, list,
//! batch-get, set, delete) plus a health probe, and normalizes the store's
//! raw failure modes into the [`SecretsError`] taxonomy. The store itself
//! sits behind the [`SecretStore`] trait; production wires in a
//! `strongbox_vault::VaultClient`, tests and local development use
//! [`MemoryStore`].

pub mod error;
pub mod facade;
pub mod store;

pub use error::{SecretsError, SecretsResult};
pub use facade::{HealthStatus, SecretsFacade};
pub use store::{MemoryStore, SecretStore, StoreError};
