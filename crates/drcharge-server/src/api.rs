// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Router construction and shared application state.

use std::{path::PathBuf, sync::Arc};

use axum::{
	routing::{get, MethodRouter},
	Router,
};
use drcharge_common_i18n::LocaleConfig;
use drcharge_server_config::ServerConfig;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::html::SiteInfo;
use crate::locale_guard::{GuardConfig, LocaleGuardLayer};
use crate::routes;

/// State shared by every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
	pub guard: Arc<GuardConfig>,
	pub site: Arc<SiteInfo>,
	pub public_dir: PathBuf,
}

impl AppState {
	pub fn locales(&self) -> &LocaleConfig {
		&self.guard.locales
	}
}

/// Build the application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	AppState {
		guard: Arc::new(GuardConfig::new(
			config.locales.clone(),
			config.i18n.exempt_prefixes.clone(),
		)),
		site: Arc::new(SiteInfo {
			brand_name: config.site.brand_name.clone(),
			contact_email: config.site.contact_email.clone(),
			base_url: config.http.base_url.clone(),
		}),
		public_dir: PathBuf::from(&config.paths.public_dir),
	}
}

/// Create the site router.
///
/// Page routes are registered once per configured locale, so a path whose
/// first segment is not a locale (`/hero.jpg`) falls through to the static
/// file service. Every request passes the locale guard first.
pub fn create_router(state: AppState) -> Router {
	let mut router = Router::new().route("/health", get(routes::health::health_check));

	for locale in state.locales().locales() {
		let prefix = format!("/{}", locale.code());
		router = router
			.route(&prefix, get(routes::pages::home))
			.route(&format!("{prefix}/"), get(routes::pages::home))
			.route(&format!("{prefix}/contact/send"), get(routes::contact::send))
			.route(&format!("{prefix}/{{page}}"), get(routes::pages::page));
	}

	let not_found: MethodRouter = get(routes::pages::not_found).with_state(state.clone());
	let guard = LocaleGuardLayer::from_shared(Arc::clone(&state.guard));

	router
		.with_state(state.clone())
		.fallback_service(ServeDir::new(&state.public_dir).fallback(not_found))
		.layer(guard)
		.layer(TraceLayer::new_for_http())
}
