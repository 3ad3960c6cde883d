// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filesystem paths section.

use serde::{Deserialize, Serialize};

fn default_public_dir() -> String {
	"./public".to_string()
}

fn default_export_dir() -> String {
	"./dist".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfigLayer {
	/// Directory of static assets (images, video, icons) served at `/`.
	pub public_dir: Option<String>,
	/// Output directory for `export`.
	pub export_dir: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.public_dir.is_some() {
			self.public_dir = other.public_dir;
		}
		if other.export_dir.is_some() {
			self.export_dir = other.export_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			public_dir: self.public_dir.unwrap_or_else(default_public_dir),
			export_dir: self.export_dir.unwrap_or_else(default_export_dir),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
	pub public_dir: String,
	pub export_dir: String,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			public_dir: default_public_dir(),
			export_dir: default_export_dir(),
		}
	}
}
