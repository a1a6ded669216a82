// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Strongbox.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header. There is deliberately no retry helper here: the
//! secret façade propagates every store failure to the caller unretried.

mod client;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
