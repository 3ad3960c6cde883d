// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form hand-off.

use axum::{
	extract::{rejection::QueryRejection, Query, State},
	response::Redirect,
};
use drcharge_common_i18n::{load_dictionary, localized_path};

use crate::api::AppState;
use crate::contact::{compose_mailto, ContactForm};
use crate::error::ServerError;
use crate::locale_guard::RequestLocale;

/// GET /{locale}/contact/send
///
/// Answers `303 See Other` with the composed `mailto:` link. An incomplete
/// or malformed form is sent back to the contact page without a message.
pub async fn send(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	form: Result<Query<ContactForm>, QueryRejection>,
) -> Result<Redirect, ServerError> {
	let contact_page = localized_path(locale, "/contact");
	let Query(form) = match form {
		Ok(form) => form,
		Err(e) => {
			tracing::debug!(locale = %locale, error = %e, "contact form query rejected");
			return Ok(Redirect::to(&contact_page));
		}
	};
	let dictionary = load_dictionary(locale)?;

	match compose_mailto(&form, &state.site.contact_email, dictionary) {
		Ok(mailto) => {
			tracing::debug!(locale = %locale, "contact form handed off to mail client");
			Ok(Redirect::to(&mailto))
		}
		Err(e) => {
			tracing::debug!(locale = %locale, error = %e, "contact form blocked");
			Ok(Redirect::to(&contact_page))
		}
	}
}
