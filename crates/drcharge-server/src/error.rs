// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error type and its HTTP mapping.

use std::path::PathBuf;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use drcharge_common_i18n::I18nError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("i18n error: {0}")]
	I18n(#[from] I18nError),

	#[error("failed to write {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl ServerError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::I18n(_) | ServerError::Write { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn code(&self) -> &'static str {
		match self {
			ServerError::I18n(_) => "i18n_error",
			ServerError::Write { .. } => "io_error",
		}
	}
}

/// JSON body returned for errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		let body = ErrorResponse {
			error: self.code().to_string(),
			message: self.to_string(),
		};
		(status, Json(body)).into_response()
	}
}
