// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales, locale metadata and the static locale configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::I18nError;

/// A locale the site is published in.
///
/// The set is closed: adding a language means adding a variant, a
/// [`LocaleInfo`] entry and a dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
	Fr,
	En,
}

impl Locale {
	/// Every locale, in publishing order.
	pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

	/// The short code used as the first path segment (`fr`, `en`).
	pub fn code(&self) -> &'static str {
		match self {
			Locale::Fr => "fr",
			Locale::En => "en",
		}
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			Locale::Fr => &LOCALES[0],
			Locale::En => &LOCALES[1],
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::ALL
			.into_iter()
			.find(|l| l.code().eq_ignore_ascii_case(s))
			.ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language, shown in the language switcher
	pub native_name: &'static str,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: Locale = Locale::Fr;

/// All supported locales.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		locale: Locale::Fr,
		name: "French",
		native_name: "Français",
	},
	LocaleInfo {
		locale: Locale::En,
		name: "English",
		native_name: "English",
	},
];

/// The locales a deployment serves plus its designated default.
///
/// Built once at startup and shared read-only; every resolver function takes
/// it by reference instead of consulting global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	locales: Vec<Locale>,
	default_locale: Locale,
}

impl LocaleConfig {
	/// Build a configuration, de-duplicating `locales` while keeping order.
	///
	/// Fails if the set is empty or does not contain `default_locale`.
	pub fn new(
		locales: impl IntoIterator<Item = Locale>,
		default_locale: Locale,
	) -> Result<Self, I18nError> {
		let mut unique = Vec::new();
		for locale in locales {
			if !unique.contains(&locale) {
				unique.push(locale);
			}
		}

		if unique.is_empty() {
			return Err(I18nError::InvalidConfig(
				"at least one locale must be supported".to_string(),
			));
		}

		if !unique.contains(&default_locale) {
			return Err(I18nError::InvalidConfig(format!(
				"default locale {default_locale} is not in the supported set"
			)));
		}

		Ok(Self {
			locales: unique,
			default_locale,
		})
	}

	pub fn locales(&self) -> &[Locale] {
		&self.locales
	}

	pub fn default_locale(&self) -> Locale {
		self.default_locale
	}

	/// Find a configured locale by its exact code.
	pub fn find(&self, code: &str) -> Option<Locale> {
		self.locales.iter().copied().find(|l| l.code() == code)
	}
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			locales: Locale::ALL.to_vec(),
			default_locale: DEFAULT_LOCALE,
		}
	}
}
