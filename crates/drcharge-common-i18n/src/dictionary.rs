// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed translation dictionaries.
//!
//! Each locale ships a JSON file under `dictionaries/`. The files are embedded
//! at compile time and parsed once. Every struct rejects unknown fields and
//! requires every known one, so all loaded dictionaries share one key
//! structure and differ only in their leaf strings.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::I18nError;
use crate::locale::Locale;

const FR_JSON: &str = include_str!("../dictionaries/fr.json");
const EN_JSON: &str = include_str!("../dictionaries/en.json");

static DICTIONARIES: Lazy<HashMap<Locale, Dictionary>> = Lazy::new(|| {
	let mut map = HashMap::new();

	for (locale, source) in [(Locale::Fr, FR_JSON), (Locale::En, EN_JSON)] {
		match serde_json::from_str::<Dictionary>(source) {
			Ok(dictionary) => {
				map.insert(locale, dictionary);
			}
			Err(e) => {
				tracing::error!(locale = %locale, error = %e, "failed to parse dictionary");
			}
		}
	}

	map
});

/// Look up the dictionary for a resolved locale.
///
/// # Example
///
/// ```
/// use drcharge_common_i18n::{load_dictionary, Locale};
///
/// let fr = load_dictionary(Locale::Fr).unwrap();
/// assert_eq!(fr.nav.home, "Accueil");
/// ```
pub fn load_dictionary(locale: Locale) -> Result<&'static Dictionary, I18nError> {
	DICTIONARIES
		.get(&locale)
		.ok_or(I18nError::MissingDictionary(locale))
}

/// All copy for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dictionary {
	pub common: CommonCopy,
	pub nav: NavCopy,
	pub hero: HeroCopy,
	pub services: ServicesCopy,
	pub stats: StatsCopy,
	pub about: AboutCopy,
	pub faq: FaqCopy,
	pub contact: ContactCopy,
	pub app_section: AppSectionCopy,
	pub footer: FooterCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommonCopy {
	pub loading: String,
	pub contact: String,
	pub learn_more: String,
	pub view_all: String,
	pub install_app: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavCopy {
	pub home: String,
	pub services: String,
	pub about: String,
	pub faq: String,
	pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroCopy {
	pub title: String,
	pub subtitle: String,
	pub cta_primary: String,
	pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesCopy {
	pub title: String,
	pub items: ServiceItems,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceItems {
	pub station: ServiceItem,
	pub powerbank: ServiceItem,
	pub truck: ServiceItem,
}

impl ServiceItems {
	/// Items in display order.
	pub fn iter(&self) -> impl Iterator<Item = &ServiceItem> {
		[&self.station, &self.powerbank, &self.truck].into_iter()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceItem {
	pub title: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsCopy {
	pub charge_speed: String,
	pub power: String,
	pub connectivity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutCopy {
	pub title: String,
	pub mission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqCopy {
	pub title: String,
	pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
	pub question: String,
	pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactCopy {
	pub title: String,
	pub intro: String,
	pub form: ContactFormCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFormCopy {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub subject: String,
	pub message: String,
	pub send: String,
	/// Mail subject used when the visitor leaves the subject empty.
	pub default_subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSectionCopy {
	pub title: String,
	pub description: String,
	pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterCopy {
	pub rights: String,
	pub credit: String,
}
