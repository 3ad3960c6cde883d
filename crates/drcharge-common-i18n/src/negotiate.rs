// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Accept-Language negotiation.
//!
//! Resolution order for a request (highest to lowest priority):
//! 1. Exact tag match of the highest-ranked acceptable language
//! 2. Primary-subtag match of that language (`fr-CA` → `fr`)
//! 3. The same two checks for each following language, in rank order
//! 4. The configured default locale
//!
//! Malformed input never errors; it only shortens the ranked list.

use std::cmp::Ordering;

use unic_langid::LanguageIdentifier;

use crate::locale::{Locale, LocaleConfig};

/// One acceptable language from an Accept-Language header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTag {
	pub tag: LanguageIdentifier,
	pub quality: f32,
}

/// Parse a raw Accept-Language value into a ranked list.
///
/// Entries are ordered by descending quality, ties keep header order.
/// Qualities above 1 count as 1. The wildcard, `q=0` entries and tags that
/// are not valid language identifiers are dropped.
///
/// # Example
///
/// ```
/// use drcharge_common_i18n::parse_accept_language;
///
/// let ranked = parse_accept_language("en;q=0.8,fr-CA,fr;q=0.9");
/// let tags: Vec<String> = ranked.iter().map(|t| t.tag.to_string()).collect();
/// assert_eq!(tags, ["fr-CA", "fr", "en"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<LanguageTag> {
	let mut ranked: Vec<LanguageTag> = accept_language::parse_with_quality(header)
		.into_iter()
		.filter(|(name, quality)| !name.is_empty() && name != "*" && *quality > 0.0)
		.filter_map(|(name, quality)| match name.parse::<LanguageIdentifier>() {
			Ok(tag) => Some(LanguageTag {
				tag,
				quality: quality.min(1.0),
			}),
			Err(e) => {
				tracing::trace!(tag = %name, error = %e, "skipping unparseable language tag");
				None
			}
		})
		.collect();

	ranked.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
	ranked
}

/// Pick the best supported locale for a ranked preference list.
pub fn negotiate_locale(ranked: &[LanguageTag], config: &LocaleConfig) -> Locale {
	for preference in ranked {
		if let Some(locale) = exact_match(&preference.tag, config) {
			return locale;
		}
		if let Some(locale) = primary_match(&preference.tag, config) {
			return locale;
		}
	}

	config.default_locale()
}

/// Resolve the locale for a request from its Accept-Language header.
///
/// An absent header resolves to the default locale.
///
/// # Example
///
/// ```
/// use drcharge_common_i18n::{resolve_request_locale, Locale, LocaleConfig};
///
/// let config = LocaleConfig::default();
/// assert_eq!(resolve_request_locale(Some("de;q=1.0"), &config), Locale::Fr);
/// assert_eq!(resolve_request_locale(Some("en-US"), &config), Locale::En);
/// assert_eq!(resolve_request_locale(None, &config), Locale::Fr);
/// ```
pub fn resolve_request_locale(header: Option<&str>, config: &LocaleConfig) -> Locale {
	match header {
		Some(value) => negotiate_locale(&parse_accept_language(value), config),
		None => config.default_locale(),
	}
}

fn exact_match(tag: &LanguageIdentifier, config: &LocaleConfig) -> Option<Locale> {
	config.locales().iter().copied().find(|locale| {
		locale
			.code()
			.parse::<LanguageIdentifier>()
			.is_ok_and(|supported| &supported == tag)
	})
}

fn primary_match(tag: &LanguageIdentifier, config: &LocaleConfig) -> Option<Locale> {
	config.locales().iter().copied().find(|locale| {
		locale
			.code()
			.parse::<LanguageIdentifier>()
			.is_ok_and(|supported| supported.language == tag.language)
	})
}
