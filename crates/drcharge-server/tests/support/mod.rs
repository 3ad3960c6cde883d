// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use axum::{
	body::Body,
	http::{header, Request, Response},
	Router,
};
use drcharge_server::{create_app_state, create_router, ServerConfig};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a temporary public directory holding a few public files.
pub struct TestApp {
	pub router: Router,
	pub public_dir: TempDir,
}

impl TestApp {
	pub fn new() -> Self {
		Self::with_config(ServerConfig::default())
	}

	pub fn with_config(mut config: ServerConfig) -> Self {
		let public_dir = tempfile::tempdir().unwrap();
		std::fs::write(public_dir.path().join("hero.jpg"), b"\xff\xd8\xff\xe0jpeg").unwrap();
		std::fs::create_dir_all(public_dir.path().join("videos")).unwrap();
		std::fs::write(public_dir.path().join("videos/truck.mp4"), b"mp4").unwrap();
		std::fs::write(public_dir.path().join("robots.txt"), b"User-agent: *\n").unwrap();
		std::fs::write(public_dir.path().join("styles.css"), b"body{}").unwrap();
		config.paths.public_dir = public_dir.path().display().to_string();

		let router = create_router(create_app_state(&config));
		Self { router, public_dir }
	}

	pub async fn get(&self, uri: &str) -> Response<Body> {
		self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
	}

	pub async fn get_with_language(&self, uri: &str, accept_language: &str) -> Response<Body> {
		self.request(
			Request::builder()
				.uri(uri)
				.header(header::ACCEPT_LANGUAGE, accept_language)
				.body(Body::empty())
				.unwrap(),
		)
		.await
	}

	pub async fn request(&self, request: Request<Body>) -> Response<Body> {
		self.router.clone().oneshot(request).await.unwrap()
	}
}

pub fn location(resp: &Response<Body>) -> &str {
	resp.headers()[header::LOCATION].to_str().unwrap()
}

pub async fn body_string(resp: Response<Body>) -> String {
	let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
		.await
		.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}
