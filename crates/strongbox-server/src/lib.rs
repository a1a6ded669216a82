// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Strongbox secret façade server.
//!
//! This crate provides the HTTP boundary over the secret façade: request
//! routing, the `{success, ..., error?}` response envelope, boundary
//! validation, and OpenAPI documentation. All secret semantics live in
//! `strongbox-secrets`; the handlers here only map one request to one
//! façade operation and serialize the outcome.

pub mod api;
pub mod api_docs;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use strongbox_server_config::ServerConfig;
