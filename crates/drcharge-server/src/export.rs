// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static export: every page in every configured locale.
//!
//! Output layout:
//!
//! ```text
//! <out>/index.html             redirect to /<default>/
//! <out>/<code>/index.html      home
//! <out>/<code>/<slug>/index.html
//! ```

use std::path::{Path, PathBuf};

use drcharge_common_i18n::{load_dictionary, localized_path, LocaleConfig};

use crate::error::ServerError;
use crate::html::{escape, SiteInfo};
use crate::pages::{render_page, Page};

/// Summary of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
	pub locales: usize,
	pub pages: usize,
	/// Every file written, in write order.
	pub files: Vec<PathBuf>,
}

/// Render the site into `out_dir`.
///
/// Existing files at the target paths are overwritten; nothing else in
/// `out_dir` is touched.
pub fn export_site(
	out_dir: &Path,
	locales: &LocaleConfig,
	site: &SiteInfo,
) -> Result<ExportReport, ServerError> {
	let mut report = ExportReport::default();

	for locale in locales.locales() {
		let dictionary = load_dictionary(*locale)?;
		let locale_dir = out_dir.join(locale.code());

		for page in Page::ALL {
			let current_path = localized_path(*locale, &format!("/{}", page.slug()));
			let ctx = site.context(*locale, dictionary, locales, &current_path);
			let html = render_page(page, &ctx);

			let dir = match page.slug() {
				"" => locale_dir.clone(),
				slug => locale_dir.join(slug),
			};
			let path = write_index(&dir, &html)?;
			tracing::debug!(locale = %locale, page = %page, path = %path.display(), "exported page");

			report.pages += 1;
			report.files.push(path);
		}
		report.locales += 1;
	}

	let root = write_index(out_dir, &root_redirect(locales))?;
	report.files.push(root);

	tracing::info!(
		out_dir = %out_dir.display(),
		locales = report.locales,
		pages = report.pages,
		"static export complete"
	);
	Ok(report)
}

fn write_index(dir: &Path, html: &str) -> Result<PathBuf, ServerError> {
	std::fs::create_dir_all(dir).map_err(|e| ServerError::Write {
		path: dir.to_path_buf(),
		source: e,
	})?;
	let path = dir.join("index.html");
	std::fs::write(&path, html).map_err(|e| ServerError::Write {
		path: path.clone(),
		source: e,
	})?;
	Ok(path)
}

/// Static hosts cannot negotiate, so the root sends everyone to the default.
fn root_redirect(locales: &LocaleConfig) -> String {
	let target = escape(&localized_path(locales.default_locale(), "/"));
	format!(
		r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="0; url={target}">
<link rel="canonical" href="{target}">
</head>
<body><a href="{target}">{target}</a></body>
</html>
"#
	)
}
