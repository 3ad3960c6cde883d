// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! i18n error types.

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
	#[error("Unsupported locale: {0:?}")]
	UnsupportedLocale(String),

	#[error("Invalid locale configuration: {0}")]
	InvalidConfig(String),

	#[error("No dictionary loaded for locale {0}")]
	MissingDictionary(Locale),
}
