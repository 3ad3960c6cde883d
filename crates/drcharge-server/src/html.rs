// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML document shell shared by every page: head, header, footer.

use chrono::Datelike;
use drcharge_common_i18n::{localized_path, switch_locale_path, Dictionary, Locale, LocaleConfig};

/// Deployment identity shared by every rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
	pub brand_name: String,
	/// Recipient of contact form `mailto:` links.
	pub contact_email: String,
	/// Public origin without trailing slash.
	pub base_url: String,
}

impl SiteInfo {
	pub fn context<'a>(
		&'a self,
		locale: Locale,
		dictionary: &'a Dictionary,
		locales: &'a LocaleConfig,
		current_path: &'a str,
	) -> PageContext<'a> {
		PageContext {
			locale,
			dictionary,
			locales,
			brand_name: &self.brand_name,
			base_url: &self.base_url,
			current_path,
		}
	}
}

impl Default for SiteInfo {
	fn default() -> Self {
		Self {
			brand_name: "Dr. Charge".to_string(),
			contact_email: "info@drcharge.ca".to_string(),
			base_url: "http://localhost:3000".to_string(),
		}
	}
}

/// Everything a renderer needs besides the page itself.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
	pub locale: Locale,
	pub dictionary: &'a Dictionary,
	pub locales: &'a LocaleConfig,
	pub brand_name: &'a str,
	/// Public origin without trailing slash, used for canonical links.
	pub base_url: &'a str,
	/// Path of the page being rendered, e.g. `/fr/about`.
	pub current_path: &'a str,
}

impl PageContext<'_> {
	/// Path of `slug` under the current locale prefix.
	pub fn href(&self, slug: &str) -> String {
		localized_path(self.locale, &format!("/{slug}"))
	}
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#39;")
}

/// Wrap `main` in the full document.
///
/// `nav` is a list of `(href, label)` pairs; the entry matching the current
/// path is marked with `aria-current`.
pub fn document(ctx: &PageContext<'_>, title: &str, nav: &[(String, &str)], main: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {brand}</title>
<link rel="canonical" href="{canonical}">
{alternates}<link rel="icon" href="/favicon.ico">
</head>
<body>
{header}
<main>
{main}
</main>
{footer}
</body>
</html>
"#,
		lang = ctx.locale.code(),
		title = escape(title),
		brand = escape(ctx.brand_name),
		canonical = escape(&format!("{}{}", ctx.base_url, ctx.current_path)),
		alternates = alternate_links(ctx),
		header = header(ctx, nav),
		footer = footer(ctx),
	)
}

fn alternate_links(ctx: &PageContext<'_>) -> String {
	ctx.locales
		.locales()
		.iter()
		.map(|locale| {
			format!(
				"<link rel=\"alternate\" hreflang=\"{code}\" href=\"{href}\">\n",
				code = locale.code(),
				href = escape(&format!(
					"{}{}",
					ctx.base_url,
					switch_locale_path(ctx.current_path, *locale, ctx.locales)
				)),
			)
		})
		.collect()
}

fn header(ctx: &PageContext<'_>, nav: &[(String, &str)]) -> String {
	let links: String = nav
		.iter()
		.map(|(href, label)| {
			let current = if same_page(href, ctx.current_path) {
				r#" aria-current="page""#
			} else {
				""
			};
			format!(
				"<a href=\"{}\"{current}>{}</a>",
				escape(href),
				escape(label)
			)
		})
		.collect();

	format!(
		r#"<header class="site-header">
<a class="brand" href="{home}">{brand}</a>
<nav>{links}</nav>
{switcher}
<a class="cta" href="{contact}">{cta}</a>
</header>"#,
		home = escape(&ctx.href("")),
		brand = escape(ctx.brand_name),
		switcher = language_switcher(ctx),
		contact = escape(&ctx.href("contact")),
		cta = escape(&ctx.dictionary.common.contact),
	)
}

/// `/fr` and `/fr/` are the same page.
fn same_page(href: &str, current_path: &str) -> bool {
	href.trim_end_matches('/') == current_path.trim_end_matches('/')
}

fn language_switcher(ctx: &PageContext<'_>) -> String {
	if ctx.locales.locales().len() < 2 {
		return String::new();
	}

	let options: String = ctx
		.locales
		.locales()
		.iter()
		.map(|locale| {
			let info = locale.info();
			let current = if *locale == ctx.locale {
				r#" aria-current="true""#
			} else {
				""
			};
			format!(
				"<a href=\"{href}\" hreflang=\"{code}\" lang=\"{code}\" title=\"{title}\"{current}>{name}</a>",
				href = escape(&switch_locale_path(ctx.current_path, *locale, ctx.locales)),
				code = locale.code(),
				title = escape(info.name),
				name = escape(info.native_name),
			)
		})
		.collect();

	format!(r#"<div class="language-switcher">{options}</div>"#)
}

fn footer(ctx: &PageContext<'_>) -> String {
	let copy = &ctx.dictionary.footer;
	format!(
		r#"<footer class="site-footer">
<p>&copy; {year} {brand}. {rights}</p>
<p>{credit}</p>
</footer>"#,
		year = chrono::Utc::now().year(),
		brand = escape(ctx.brand_name),
		rights = escape(&copy.rights),
		credit = escape(&copy.credit),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use drcharge_common_i18n::load_dictionary;

	fn context<'a>(locale: Locale, locales: &'a LocaleConfig, path: &'a str) -> PageContext<'a> {
		PageContext {
			locale,
			dictionary: load_dictionary(locale).unwrap(),
			locales,
			brand_name: "Dr. Charge",
			base_url: "https://drcharge.ca",
			current_path: path,
		}
	}

	#[test]
	fn test_escape() {
		assert_eq!(
			escape(r#"<a href="x">Tom & Jerry's</a>"#),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
		);
		assert_eq!(escape("plain"), "plain");
	}

	#[test]
	fn test_document_lang_and_canonical() {
		let locales = LocaleConfig::default();
		let html = document(&context(Locale::En, &locales, "/en/about"), "About", &[], "");
		assert!(html.contains(r#"<html lang="en">"#));
		assert!(html.contains(r#"<link rel="canonical" href="https://drcharge.ca/en/about">"#));
	}

	#[test]
	fn test_switcher_keeps_page() {
		let locales = LocaleConfig::default();
		let html = document(&context(Locale::Fr, &locales, "/fr/faq"), "FAQ", &[], "");
		assert!(html.contains(r#"href="/en/faq" hreflang="en""#));
		assert!(html.contains(r#"href="/fr/faq" hreflang="fr" lang="fr" title="French" aria-current="true""#));
	}

	#[test]
	fn test_switcher_hidden_for_single_locale() {
		let locales = LocaleConfig::new([Locale::Fr], Locale::Fr).unwrap();
		let html = document(&context(Locale::Fr, &locales, "/fr/"), "Accueil", &[], "");
		assert!(!html.contains("language-switcher"));
	}

	#[test]
	fn test_nav_marks_current_page() {
		let locales = LocaleConfig::default();
		let nav = vec![
			("/en/".to_string(), "Home"),
			("/en/about".to_string(), "About"),
		];
		let html = document(&context(Locale::En, &locales, "/en/about"), "About", &nav, "");
		assert!(html.contains(r#"<a href="/en/about" aria-current="page">About</a>"#));
		assert!(html.contains(r#"<a href="/en/">Home</a>"#));
	}

	#[test]
	fn test_nav_marks_home_without_trailing_slash() {
		let locales = LocaleConfig::default();
		let nav = vec![
			("/en/".to_string(), "Home"),
			("/en/about".to_string(), "About"),
		];
		let html = document(&context(Locale::En, &locales, "/en"), "Home", &nav, "");
		assert!(html.contains(r#"<a href="/en/" aria-current="page">Home</a>"#));
		assert!(html.contains(r#"<a href="/en/about">About</a>"#));
	}
}
