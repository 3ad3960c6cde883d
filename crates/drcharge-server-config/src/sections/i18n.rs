// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.
//!
//! Codes stay as strings until [`I18nConfig::locale_config`] checks them
//! against the closed locale set, so a typo in TOML or the environment is
//! reported as a validation error rather than silently ignored.

use drcharge_common_i18n::{Locale, LocaleConfig, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_locales() -> Vec<String> {
	Locale::ALL.iter().map(|l| l.code().to_string()).collect()
}

fn default_exempt_prefixes() -> Vec<String> {
	vec!["/api".to_string(), "/health".to_string()]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
	pub locales: Option<Vec<String>>,
	/// Path prefixes the locale guard never redirects.
	pub exempt_prefixes: Option<Vec<String>>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.exempt_prefixes.is_some() {
			self.exempt_prefixes = other.exempt_prefixes;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.code().to_string()),
			locales: self.locales.unwrap_or_else(default_locales),
			exempt_prefixes: self
				.exempt_prefixes
				.unwrap_or_else(default_exempt_prefixes),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	pub default_locale: String,
	pub locales: Vec<String>,
	pub exempt_prefixes: Vec<String>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}

impl I18nConfig {
	/// Resolve the configured codes into a [`LocaleConfig`].
	pub fn locale_config(&self) -> Result<LocaleConfig, ConfigError> {
		let locales = self
			.locales
			.iter()
			.map(|code| parse_locale("i18n.locales", code))
			.collect::<Result<Vec<_>, _>>()?;
		let default_locale = parse_locale("i18n.default_locale", &self.default_locale)?;

		LocaleConfig::new(locales, default_locale).map_err(|e| ConfigError::Validation(e.to_string()))
	}
}

fn parse_locale(key: &str, code: &str) -> Result<Locale, ConfigError> {
	code.trim()
		.parse::<Locale>()
		.map_err(|e| ConfigError::InvalidValue {
			key: key.to_string(),
			message: e.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = I18nConfig::default();
		assert_eq!(config.default_locale, "fr");
		assert_eq!(config.locales, vec!["fr", "en"]);
		assert_eq!(config.exempt_prefixes, vec!["/api", "/health"]);
	}

	#[test]
	fn test_default_locale_config() {
		let locale_config = I18nConfig::default().locale_config().unwrap();
		assert_eq!(locale_config, LocaleConfig::default());
	}

	#[test]
	fn test_custom_default() {
		let config = I18nConfigLayer {
			default_locale: Some("en".to_string()),
			..Default::default()
		}
		.finalize();
		let locale_config = config.locale_config().unwrap();
		assert_eq!(locale_config.default_locale(), Locale::En);
	}

	#[test]
	fn test_unknown_code_is_invalid_value() {
		let config = I18nConfigLayer {
			locales: Some(vec!["fr".to_string(), "de".to_string()]),
			..Default::default()
		}
		.finalize();
		let err = config.locale_config().unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "i18n.locales"));
	}

	#[test]
	fn test_default_outside_set_fails_validation() {
		let config = I18nConfigLayer {
			default_locale: Some("en".to_string()),
			locales: Some(vec!["fr".to_string()]),
			..Default::default()
		}
		.finalize();
		assert!(matches!(
			config.locale_config(),
			Err(ConfigError::Validation(_))
		));
	}

	#[test]
	fn test_empty_set_fails_validation() {
		let config = I18nConfigLayer {
			locales: Some(Vec::new()),
			..Default::default()
		}
		.finalize();
		assert!(config.locale_config().is_err());
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = I18nConfigLayer {
			default_locale: Some("fr".to_string()),
			locales: Some(vec!["fr".to_string(), "en".to_string()]),
			exempt_prefixes: None,
		};
		base.merge(I18nConfigLayer {
			default_locale: Some("en".to_string()),
			locales: None,
			exempt_prefixes: Some(vec!["/status".to_string()]),
		});
		assert_eq!(base.default_locale.as_deref(), Some("en"));
		assert_eq!(base.locales.as_ref().map(Vec::len), Some(2));
		assert_eq!(base.exempt_prefixes, Some(vec!["/status".to_string()]));
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let toml_str = r#"
default_locale = "en"
"#;
		let layer: I18nConfigLayer = toml::from_str(toml_str).unwrap();
		assert_eq!(layer.default_locale.as_deref(), Some("en"));
		assert!(layer.locales.is_none());
		assert!(layer.exempt_prefixes.is_none());
	}
}
