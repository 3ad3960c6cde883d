// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dr. Charge website server.
//!
//! Serves the marketing pages under a locale prefix (`/fr/...`, `/en/...`),
//! redirects unprefixed paths to the visitor's negotiated locale, serves
//! static assets, and can export the whole site as static HTML.

pub mod api;
pub mod contact;
pub mod error;
pub mod export;
pub mod html;
pub mod locale_guard;
pub mod pages;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use contact::{compose_mailto, ContactError, ContactForm};
pub use drcharge_server_config::ServerConfig;
pub use error::ServerError;
pub use export::{export_site, ExportReport};
pub use html::{PageContext, SiteInfo};
pub use locale_guard::{
	decide, GuardConfig, GuardDecision, LocaleGuardLayer, PassReason, RequestLocale,
};
pub use pages::{render_not_found, render_page, Page};
