// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Liveness endpoint.

use axum::{response::IntoResponse, Json};
use drcharge_common_version::{headers, BuildInfo};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub build: BuildInfo,
}

/// GET /health - Exempt from locale redirects.
pub async fn health_check() -> impl IntoResponse {
	let build = BuildInfo::current();
	(
		[(headers::VERSION, build.version)],
		Json(HealthResponse {
			status: "ok",
			build,
		}),
	)
}
