// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site identity section.

use serde::{Deserialize, Serialize};

fn default_brand_name() -> String {
	"Dr. Charge".to_string()
}

fn default_contact_email() -> String {
	"info@drcharge.ca".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfigLayer {
	pub brand_name: Option<String>,
	/// Recipient of the contact form's `mailto:` link.
	pub contact_email: Option<String>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.brand_name.is_some() {
			self.brand_name = other.brand_name;
		}
		if other.contact_email.is_some() {
			self.contact_email = other.contact_email;
		}
	}

	pub fn finalize(self) -> SiteConfig {
		SiteConfig {
			brand_name: self.brand_name.unwrap_or_else(default_brand_name),
			contact_email: self.contact_email.unwrap_or_else(default_contact_email),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
	pub brand_name: String,
	pub contact_email: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			brand_name: default_brand_name(),
			contact_email: default_contact_email(),
		}
	}
}
