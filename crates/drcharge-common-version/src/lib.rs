// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build and version information for the Dr. Charge server.
//!
//! Version, git SHA, build timestamp and platform are captured at compile
//! time and reported by `drcharge-server version`, the `/health` endpoint and
//! the `X-Drcharge-Version` response header.

shadow_rs::shadow!(build);

#[cfg(feature = "serde")]
use serde::Serialize;

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub const PLATFORM: &str = env!("DRCHARGE_PLATFORM");

/// Core build information.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Get the current build information (compile-time constants).
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				"unknown"
			} else {
				build::SHORT_COMMIT
			},
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}
}

/// HTTP header names for version information.
pub mod headers {
	pub const VERSION: &str = "X-Drcharge-Version";
}
