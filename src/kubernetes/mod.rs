// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction and Secret access.

pub mod client;
pub mod dynamic;
pub mod secret;

pub use client::create_client;
pub use dynamic::DynamicClient;
pub use secret::get_optional_secret;
