// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client for a Key Vault-style remote secret store.
//!
//! The client is an authenticated connection handle: it owns the store
//! endpoint, the bearer token, and the request timeout, and nothing else.
//! All policy (error normalization, batch semantics, health probing) lives
//! in `strongbox-secrets`, which wraps this client behind its store trait.

mod client;
mod error;
mod types;

pub use client::VaultClient;
pub use error::VaultError;
pub use types::VaultSecret;
