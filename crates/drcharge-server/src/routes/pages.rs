// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized page handlers.

use axum::{
	extract::{Path, State},
	http::{StatusCode, Uri},
	response::{Html, IntoResponse, Response},
};
use drcharge_common_i18n::{load_dictionary, Locale};

use crate::api::AppState;
use crate::error::ServerError;
use crate::locale_guard::RequestLocale;
use crate::pages::{render_not_found, render_page, Page};

/// GET /{locale} and /{locale}/
pub async fn home(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	uri: Uri,
) -> Result<Html<String>, ServerError> {
	render(&state, locale, uri.path(), Some(Page::Home)).map(Html)
}

/// GET /{locale}/{page}
pub async fn page(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Path(slug): Path<String>,
	uri: Uri,
) -> Result<Response, ServerError> {
	match slug.parse::<Page>() {
		Ok(page) => Ok(Html(render(&state, locale, uri.path(), Some(page))?).into_response()),
		Err(e) => {
			tracing::debug!(path = %uri.path(), error = %e, "unknown page");
			Ok((
				StatusCode::NOT_FOUND,
				Html(render(&state, locale, uri.path(), None)?),
			)
				.into_response())
		}
	}
}

/// Fallback for anything no route or static file matched.
pub async fn not_found(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	uri: Uri,
) -> Result<(StatusCode, Html<String>), ServerError> {
	tracing::debug!(path = %uri.path(), locale = %locale, "not found");
	Ok((
		StatusCode::NOT_FOUND,
		Html(render(&state, locale, uri.path(), None)?),
	))
}

fn render(
	state: &AppState,
	locale: Locale,
	path: &str,
	page: Option<Page>,
) -> Result<String, ServerError> {
	let dictionary = load_dictionary(locale)?;
	let ctx = state.site.context(locale, dictionary, state.locales(), path);
	Ok(match page {
		Some(page) => render_page(page, &ctx),
		None => render_not_found(&ctx),
	})
}
