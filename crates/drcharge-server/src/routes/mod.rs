// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod contact;
pub mod health;
pub mod pages;

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use drcharge_common_i18n::path_locale;

use crate::api::AppState;
use crate::locale_guard::RequestLocale;

/// Handlers read the locale the guard attached. Without it (a request that
/// bypassed the guard) the path prefix is consulted, then the default.
impl FromRequestParts<AppState> for RequestLocale {
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
		if let Some(locale) = parts.extensions.get::<RequestLocale>() {
			return Ok(*locale);
		}

		let locale = path_locale(parts.uri.path(), state.locales())
			.unwrap_or_else(|| state.locales().default_locale());
		Ok(RequestLocale(locale))
	}
}
