// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized pages, contact hand-off and 404s.

mod support;

use axum::http::StatusCode;
use support::{body_string, location, TestApp};

#[tokio::test]
async fn every_page_renders_in_every_locale() {
	let app = TestApp::new();
	for code in ["fr", "en"] {
		for slug in ["", "services", "about", "faq", "contact"] {
			let uri = format!("/{code}/{slug}");
			let resp = app.get(&uri).await;
			assert_eq!(resp.status(), StatusCode::OK, "{uri}");
			let body = body_string(resp).await;
			assert!(body.contains(&format!(r#"<html lang="{code}""#)), "{uri}");
		}
	}
}

#[tokio::test]
async fn bare_locale_serves_home() {
	let app = TestApp::new();
	let resp = app.get("/en").await;
	assert_eq!(resp.status(), StatusCode::OK);
	assert!(body_string(resp).await.contains("Power on the go"));
}

#[tokio::test]
async fn pages_use_locale_dictionary() {
	let app = TestApp::new();

	let fr = body_string(app.get("/fr/about").await).await;
	assert!(fr.contains("À propos"));

	let en = body_string(app.get("/en/about").await).await;
	assert!(en.contains("About Dr. Charge"));
	assert!(en.contains(r#"href="/fr/about""#));
}

#[tokio::test]
async fn unknown_page_is_localized_404() {
	let app = TestApp::new();
	let resp = app.get("/en/pricing").await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
	let body = body_string(resp).await;
	assert!(body.contains(r#"<html lang="en""#));
	assert!(body.contains("404"));
}

#[tokio::test]
async fn contact_send_redirects_to_mailto() {
	let app = TestApp::new();
	let resp = app
		.get("/en/contact/send?name=Ana&email=ana%40example.com&phone=&subject=&message=Hello")
		.await;

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	let target = location(&resp);
	assert!(target.starts_with("mailto:info@drcharge.ca?subject=Contact%20Dr.%20Charge&body="));
	assert!(target.contains("Name%3A%20Ana"));
	assert!(target.ends_with("Message%3A%0AHello"));
}

#[tokio::test]
async fn incomplete_contact_form_is_sent_back() {
	let app = TestApp::new();
	let resp = app.get("/fr/contact/send?name=Ana&message=Bonjour").await;

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&resp), "/fr/contact");
}

#[tokio::test]
async fn malformed_contact_query_is_sent_back() {
	let app = TestApp::new();
	let resp = app
		.get("/en/contact/send?name=Ana&name=Bob&email=ana%40example.com&message=Hi")
		.await;

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&resp), "/en/contact");
}

#[tokio::test]
async fn contact_send_without_prefix_is_redirected_first() {
	let app = TestApp::new();
	let resp = app.get("/contact/send?name=Ana").await;
	assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(location(&resp), "/fr/contact/send?name=Ana");
}
