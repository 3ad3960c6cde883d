// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale guard: keeps every page under a `/<locale>` path prefix.
//!
//! Each inbound request is classified once, before routing:
//!
//! 1. A static asset (final segment ends in an image, video or icon
//!    extension) passes through untouched, as does any other file path
//!    such as `/robots.txt`.
//! 2. A path under an exempt prefix (`/api`, `/health`) passes through.
//! 3. A path whose first segment is a supported locale passes through and
//!    carries a [`RequestLocale`] extension.
//! 4. Anything else is redirected to the same path prefixed with the locale
//!    negotiated from `Accept-Language`.
//!
//! The classification lives in [`decide`], a pure function of the path,
//! query, header and [`GuardConfig`]. [`LocaleGuardLayer`] applies it to an
//! axum router.
//!
//! # Example
//!
//! ```ignore
//! use drcharge_server::locale_guard::{GuardConfig, LocaleGuardLayer};
//!
//! Router::new()
//!     .route("/fr/about", get(about))
//!     .layer(LocaleGuardLayer::new(GuardConfig::default()));
//! ```

use std::{
	future::Future,
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use axum::{
	body::Body,
	http::{header, HeaderValue, Request, StatusCode},
	response::Response,
};
use drcharge_common_i18n::{
	is_file_path, is_static_asset, localized_path, path_locale, resolve_request_locale, Locale,
	LocaleConfig,
};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

/// Static inputs of the guard, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
	pub locales: LocaleConfig,
	/// Path prefixes matched on a segment boundary, never redirected.
	pub exempt_prefixes: Vec<String>,
}

impl GuardConfig {
	pub fn new(locales: LocaleConfig, exempt_prefixes: Vec<String>) -> Self {
		Self {
			locales,
			exempt_prefixes,
		}
	}

	/// Check whether `path` sits under one of the exempt prefixes.
	pub fn is_exempt(&self, path: &str) -> bool {
		self.exempt_prefixes.iter().any(|prefix| {
			let prefix = prefix.trim_end_matches('/');
			match path.strip_prefix(prefix) {
				Some(rest) => rest.is_empty() || rest.starts_with('/'),
				None => false,
			}
		})
	}
}

impl Default for GuardConfig {
	fn default() -> Self {
		Self::new(
			LocaleConfig::default(),
			vec!["/api".to_string(), "/health".to_string()],
		)
	}
}

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
	StaticAsset,
	/// Any other path whose final segment has an extension (`/robots.txt`).
	PublicFile,
	Exempt,
	Localized(Locale),
}

/// Outcome of classifying one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
	PassThrough(PassReason),
	Redirect { locale: Locale, location: String },
}

/// Classify a request.
///
/// `query` is the raw query string without the leading `?`; an empty query
/// is treated as absent. `accept_language` is the raw header value.
pub fn decide(
	path: &str,
	query: Option<&str>,
	accept_language: Option<&str>,
	config: &GuardConfig,
) -> GuardDecision {
	if is_static_asset(path) {
		return GuardDecision::PassThrough(PassReason::StaticAsset);
	}

	if is_file_path(path) {
		return GuardDecision::PassThrough(PassReason::PublicFile);
	}

	if config.is_exempt(path) {
		return GuardDecision::PassThrough(PassReason::Exempt);
	}

	if let Some(locale) = path_locale(path, &config.locales) {
		return GuardDecision::PassThrough(PassReason::Localized(locale));
	}

	let locale = resolve_request_locale(accept_language, &config.locales);
	let mut location = localized_path(locale, path);
	if let Some(query) = query.filter(|q| !q.is_empty()) {
		location.push('?');
		location.push_str(query);
	}

	GuardDecision::Redirect { locale, location }
}

/// Locale resolved by the guard for a localized request.
///
/// Inserted as a request extension before the request reaches a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

/// Tower layer applying [`decide`] to every request.
#[derive(Clone)]
pub struct LocaleGuardLayer {
	config: Arc<GuardConfig>,
}

impl LocaleGuardLayer {
	pub fn new(config: GuardConfig) -> Self {
		Self {
			config: Arc::new(config),
		}
	}

	pub fn from_shared(config: Arc<GuardConfig>) -> Self {
		Self { config }
	}
}

impl<S> Layer<S> for LocaleGuardLayer {
	type Service = LocaleGuardService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		LocaleGuardService {
			inner,
			config: Arc::clone(&self.config),
		}
	}
}

/// Service wrapper for [`LocaleGuardLayer`].
#[derive(Clone)]
pub struct LocaleGuardService<S> {
	inner: S,
	config: Arc<GuardConfig>,
}

impl<S> Service<Request<Body>> for LocaleGuardService<S>
where
	S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
	S::Future: Send,
{
	type Response = Response;
	type Error = S::Error;
	type Future = LocaleGuardFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, mut req: Request<Body>) -> Self::Future {
		let path = req.uri().path().to_string();
		let accept_language = req
			.headers()
			.get(header::ACCEPT_LANGUAGE)
			.and_then(|v| v.to_str().ok());

		let decision = decide(&path, req.uri().query(), accept_language, &self.config);

		match decision {
			GuardDecision::PassThrough(reason) => {
				tracing::debug!(path = %path, reason = ?reason, "locale guard pass-through");
				if let PassReason::Localized(locale) = reason {
					req.extensions_mut().insert(RequestLocale(locale));
				}
			}
			GuardDecision::Redirect { locale, location } => {
				match HeaderValue::try_from(location.as_str()) {
					Ok(value) => {
						tracing::debug!(
							path = %path,
							locale = %locale,
							location = %location,
							"locale guard redirect"
						);
						return LocaleGuardFuture::Redirected {
							resp: Some(redirect_response(value)),
						};
					}
					Err(e) => {
						tracing::warn!(
							path = %path,
							location = %location,
							error = %e,
							"locale guard could not build Location header, passing through"
						);
					}
				}
			}
		}

		LocaleGuardFuture::Inner {
			fut: self.inner.call(req),
		}
	}
}

fn redirect_response(location: HeaderValue) -> Response {
	let mut resp = Response::new(Body::empty());
	*resp.status_mut() = StatusCode::TEMPORARY_REDIRECT;
	resp.headers_mut().insert(header::LOCATION, location);
	resp.headers_mut()
		.insert(header::VARY, HeaderValue::from_static("accept-language"));
	resp
}

pin_project! {
	/// Future for [`LocaleGuardService`].
	#[project = LocaleGuardFutureProj]
	pub enum LocaleGuardFuture<F> {
		Inner { #[pin] fut: F },
		Redirected { resp: Option<Response> },
	}
}

impl<F, E> Future for LocaleGuardFuture<F>
where
	F: Future<Output = Result<Response, E>>,
{
	type Output = Result<Response, E>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match self.project() {
			LocaleGuardFutureProj::Inner { fut } => fut.poll(cx),
			LocaleGuardFutureProj::Redirected { resp } => {
				Poll::Ready(Ok(resp.take().expect("polled after completion")))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{routing::get, Router};
	use proptest::prelude::*;
	use tower::ServiceExt;

	fn config() -> GuardConfig {
		GuardConfig::default()
	}

	fn redirect_target(decision: GuardDecision) -> String {
		match decision {
			GuardDecision::Redirect { location, .. } => location,
			other => panic!("expected redirect, got {other:?}"),
		}
	}

	#[test]
	fn test_root_redirects_to_default() {
		let decision = decide("/", None, None, &config());
		assert_eq!(
			decision,
			GuardDecision::Redirect {
				locale: Locale::Fr,
				location: "/fr/".to_string(),
			}
		);
	}

	#[test]
	fn test_unlocalized_path_uses_accept_language() {
		let decision = decide("/about", None, Some("en-US,en;q=0.9"), &config());
		assert_eq!(redirect_target(decision), "/en/about");
	}

	#[test]
	fn test_unsupported_preference_falls_back() {
		let decision = decide("/about", None, Some("de;q=1.0"), &config());
		assert_eq!(redirect_target(decision), "/fr/about");
	}

	#[test]
	fn test_garbage_header_falls_back() {
		let decision = decide("/faq", None, Some(";;;q=abc,,"), &config());
		assert_eq!(redirect_target(decision), "/fr/faq");
	}

	#[test]
	fn test_query_preserved() {
		let decision = decide("/contact", Some("ref=flyer&x=1"), None, &config());
		assert_eq!(redirect_target(decision), "/fr/contact?ref=flyer&x=1");
	}

	#[test]
	fn test_empty_query_dropped() {
		let decision = decide("/contact", Some(""), None, &config());
		assert_eq!(redirect_target(decision), "/fr/contact");
	}

	#[test]
	fn test_localized_paths_pass() {
		for path in ["/fr", "/fr/", "/en/about", "/en/services/"] {
			assert!(
				matches!(
					decide(path, None, Some("de"), &config()),
					GuardDecision::PassThrough(PassReason::Localized(_))
				),
				"{path} should pass"
			);
		}
	}

	#[test]
	fn test_segment_boundary() {
		let decision = decide("/frabc", None, None, &config());
		assert_eq!(redirect_target(decision), "/fr/frabc");
	}

	#[test]
	fn test_unsupported_locale_segment_is_unlocalized() {
		let decision = decide("/de/about", None, Some("en"), &config());
		assert_eq!(redirect_target(decision), "/en/de/about");
	}

	#[test]
	fn test_locale_outside_configured_set_redirects() {
		let config = GuardConfig::new(
			LocaleConfig::new([Locale::Fr], Locale::Fr).unwrap(),
			Vec::new(),
		);
		let decision = decide("/en/about", None, None, &config);
		assert_eq!(redirect_target(decision), "/fr/en/about");
	}

	#[test]
	fn test_assets_bypass() {
		for path in ["/hero.jpg", "/videos/truck.mp4", "/favicon.ico", "/logo.SVG"] {
			assert_eq!(
				decide(path, None, None, &config()),
				GuardDecision::PassThrough(PassReason::StaticAsset)
			);
		}
	}

	#[test]
	fn test_public_files_bypass() {
		for path in ["/robots.txt", "/styles.css", "/site.webmanifest", "/fonts/inter.woff2"] {
			assert_eq!(
				decide(path, None, Some("en"), &config()),
				GuardDecision::PassThrough(PassReason::PublicFile)
			);
		}
		assert!(matches!(
			decide("/robots.", None, None, &config()),
			GuardDecision::Redirect { .. }
		));
	}

	#[test]
	fn test_exempt_prefixes() {
		let config = config();
		assert!(config.is_exempt("/health"));
		assert!(config.is_exempt("/api/v1/status"));
		assert!(!config.is_exempt("/healthy"));
		assert!(!config.is_exempt("/apis"));
		assert_eq!(
			decide("/api/contact", None, None, &config),
			GuardDecision::PassThrough(PassReason::Exempt)
		);
	}

	#[test]
	fn test_exempt_prefix_trailing_slash() {
		let config = GuardConfig::new(LocaleConfig::default(), vec!["/status/".to_string()]);
		assert!(config.is_exempt("/status"));
		assert!(config.is_exempt("/status/live"));
	}

	#[test]
	fn test_round_trip_no_second_redirect() {
		let location = redirect_target(decide("/about", None, Some("en"), &config()));
		assert_eq!(location, "/en/about");
		assert_eq!(
			decide(&location, None, Some("en"), &config()),
			GuardDecision::PassThrough(PassReason::Localized(Locale::En))
		);
	}

	async fn echo_locale(req: Request<Body>) -> String {
		match req.extensions().get::<RequestLocale>() {
			Some(RequestLocale(locale)) => locale.code().to_string(),
			None => "none".to_string(),
		}
	}

	fn app() -> Router {
		Router::new()
			.route("/fr/about", get(echo_locale))
			.route("/health", get(echo_locale))
			.layer(LocaleGuardLayer::new(config()))
	}

	#[tokio::test]
	async fn test_layer_redirect_response() {
		let resp = app()
			.oneshot(
				Request::builder()
					.uri("/about?a=b")
					.header(header::ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9,en;q=0.8")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
		assert_eq!(resp.headers()[header::LOCATION], "/fr/about?a=b");
		assert_eq!(resp.headers()[header::VARY], "accept-language");
	}

	#[tokio::test]
	async fn test_layer_sets_request_locale() {
		let resp = app()
			.oneshot(
				Request::builder()
					.uri("/fr/about")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::OK);
		let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
			.await
			.unwrap();
		assert_eq!(&body[..], b"fr");
	}

	#[tokio::test]
	async fn test_layer_exempt_has_no_locale() {
		let resp = app()
			.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::OK);
		let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
			.await
			.unwrap();
		assert_eq!(&body[..], b"none");
	}

	fn unlocalized_path() -> impl Strategy<Value = String> {
		proptest::collection::vec("[a-z0-9-]{1,8}", 0..4).prop_map(|segments| {
			format!("/{}", segments.join("/"))
		})
		.prop_filter("must not start with a locale or exempt segment", |p| {
			let first = p.trim_start_matches('/').split('/').next().unwrap_or("");
			!matches!(first, "fr" | "en" | "api" | "health")
		})
	}

	proptest! {
		#[test]
		fn prop_no_header_redirects_to_default(path in unlocalized_path()) {
			let decision = decide(&path, None, None, &config());
			prop_assert_eq!(
				decision,
				GuardDecision::Redirect {
					locale: Locale::Fr,
					location: format!("/fr{path}"),
				}
			);
		}

		#[test]
		fn prop_localized_never_redirects(
			locale in prop_oneof![Just(Locale::Fr), Just(Locale::En)],
			rest in "(/[a-z0-9-]{0,8}){0,3}",
			header in proptest::option::of("[a-zA-Z,;=.0-9 -]{0,24}"),
		) {
			let path = format!("/{}{rest}", locale.code());
			let decision = decide(&path, None, header.as_deref(), &config());
			prop_assert_eq!(decision, GuardDecision::PassThrough(PassReason::Localized(locale)));
		}

		#[test]
		fn prop_assets_never_redirect(
			stem in "(/[a-z0-9-]{1,8}){1,3}",
			ext in prop_oneof![Just("jpg"), Just("jpeg"), Just("png"), Just("svg"), Just("mp4"), Just("ico")],
		) {
			let path = format!("{stem}.{ext}");
			prop_assert_eq!(
				decide(&path, None, Some("en"), &config()),
				GuardDecision::PassThrough(PassReason::StaticAsset)
			);
		}

		#[test]
		fn prop_decision_is_deterministic(
			path in "/[a-z/.]{0,16}",
			header in proptest::option::of("[a-zA-Z,;=.0-9*-]{0,32}"),
		) {
			let first = decide(&path, None, header.as_deref(), &config());
			let second = decide(&path, None, header.as_deref(), &config());
			prop_assert_eq!(first, second);
		}
	}
}
