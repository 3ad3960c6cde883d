// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-prefix path helpers.
//!
//! A localized path carries exactly one supported locale as its first
//! segment: `/fr`, `/fr/`, `/en/about`. Matching is on whole segments, so
//! `/frabc` is not localized.

use crate::locale::{Locale, LocaleConfig};

/// File extensions served as static assets, never locale-redirected.
pub const STATIC_ASSET_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "svg", "mp4", "ico"];

fn file_extension(path: &str) -> Option<&str> {
	let last_segment = path.rsplit('/').next().unwrap_or(path);
	last_segment
		.rsplit_once('.')
		.map(|(_, ext)| ext)
		.filter(|ext| !ext.is_empty())
}

/// Check whether the final segment of `path` names a static asset.
pub fn is_static_asset(path: &str) -> bool {
	file_extension(path).is_some_and(|ext| {
		STATIC_ASSET_EXTENSIONS
			.iter()
			.any(|candidate| candidate.eq_ignore_ascii_case(ext))
	})
}

/// Check whether the final segment of `path` carries any file extension.
///
/// `/robots.txt` and `/fonts/inter.woff2` are files; `/about` and `/robots.`
/// are not. Pages never have an extension, so such paths belong to the
/// public file tree.
pub fn is_file_path(path: &str) -> bool {
	file_extension(path).is_some()
}

/// Return the locale pinned by the first segment of `path`, if any.
pub fn path_locale(path: &str, config: &LocaleConfig) -> Option<Locale> {
	let rest = path.strip_prefix('/')?;
	let first_segment = rest.split('/').next().unwrap_or(rest);
	config.find(first_segment)
}

/// Prefix `path` with `/<locale>`.
///
/// A separating slash is inserted only when `path` does not already start
/// with one, so `/` becomes `/fr/` and `about` becomes `/fr/about`.
pub fn localized_path(locale: Locale, path: &str) -> String {
	let separator = if path.starts_with('/') { "" } else { "/" };
	format!("/{}{separator}{path}", locale.code())
}

/// Rewrite `path` so it is served in `target`.
///
/// The leading locale segment is replaced; an unlocalized path is prefixed.
pub fn switch_locale_path(path: &str, target: Locale, config: &LocaleConfig) -> String {
	match path_locale(path, config) {
		Some(current) => {
			let rest = &path[1 + current.code().len()..];
			format!("/{}{rest}", target.code())
		}
		None => localized_path(target, path),
	}
}
